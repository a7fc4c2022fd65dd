use std::{env, fs::File, path::Path};

use anyhow::Result;
use log::debug;
use serde::Deserialize;

pub const CONFIG_PATH_ENV: &str = "EXTINF_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "extinf.yml";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Read when no path is passed on the command line
    pub playlists: Vec<String>,
    pub show_attributes: Option<bool>,
    pub show_raw: Option<bool>,
    pub workers: Option<usize>,
}

impl Config {
    pub fn show_attributes(&self) -> bool {
        self.show_attributes.unwrap_or(true)
    }

    pub fn show_raw(&self) -> bool {
        self.show_raw.unwrap_or(false)
    }

    pub fn workers(&self) -> usize {
        self.workers.unwrap_or(4).max(1)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}

/// Loads `path` when given, else the file named by `EXTINF_CONFIG_PATH`.
/// Without either, `extinf.yml` is used when present and the defaults
/// otherwise.
pub fn resolve_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_config(path);
    }

    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        return load_config(path);
    }

    if !Path::new(DEFAULT_CONFIG_PATH).exists() {
        debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
        return Ok(Config::default());
    }

    load_config(DEFAULT_CONFIG_PATH)
}
