use std::path::PathBuf;

use clap::Parser;

use crate::Config;

#[derive(Debug, Parser)]
#[command(name = "extinf-dump")]
#[command(version, about = "List the #EXTINF entries of m3u/m3u8 playlists")]
pub struct Args {
    /// Playlists to read, the configured `playlists` are used when empty
    pub paths: Vec<String>,

    /// Path to config file, overrides EXTINF_CONFIG_PATH
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Max playlists parsed at the same time
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Print the raw fragment under every entry
    #[arg(long)]
    pub show_raw: bool,

    /// Don't print entry attributes
    #[arg(long)]
    pub no_attributes: bool,
}

impl Args {
    /// Flags given on the command line win over the config file
    pub fn apply(&self, config: &mut Config) {
        if let Some(workers) = self.workers {
            config.workers = Some(workers);
        }

        if self.show_raw {
            config.show_raw = Some(true);
        }

        if self.no_attributes {
            config.show_attributes = Some(false);
        }
    }
}
