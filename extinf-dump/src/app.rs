use std::{io::Write, sync::Arc};

use anyhow::Result;
use log::info;

use crate::{Config, report::Report, something_with_error_log, transfer::load_all};

pub struct App {
    pub config: Arc<Config>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Paths from the command line win over the configured ones
    pub fn resolve_paths(&self, args: Vec<String>) -> Vec<String> {
        if args.is_empty() {
            self.config.playlists.clone()
        } else {
            args
        }
    }

    /// Writes a report for every playlist that parsed and logs the others.
    /// Returns how many failed.
    pub async fn dump(&self, paths: &[String], out: &mut impl Write) -> Result<usize> {
        info!(
            "Reading {} playlists with {} workers",
            paths.len(),
            self.config.workers()
        );
        let results = load_all(paths, self.config.workers()).await;

        let mut failed = 0;
        for (path, result) in paths.iter().zip(results) {
            let Ok(playlist) = result.map_err(something_with_error_log!(path, ())) else {
                failed += 1;
                continue;
            };

            write!(out, "{}", Report::new(path, &playlist, &self.config))?;
        }

        Ok(failed)
    }
}
