use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::Parser;
use extinf_dump::{App, Args, resolve_config};
use log::error;

async fn app_entry() -> Result<()> {
    let args = Args::parse();

    let mut config = resolve_config(args.config.as_deref())?;
    args.apply(&mut config);
    let app = App::new(config);

    let paths = app.resolve_paths(args.paths);
    if paths.is_empty() {
        bail!("No playlist given, pass paths or set `playlists` in the config");
    }

    // stdout is only locked once every playlist has been parsed
    let mut out = Vec::new();
    let failed = app.dump(&paths, &mut out).await?;
    io::stdout().lock().write_all(&out)?;

    if failed > 0 {
        bail!("{} of {} playlists failed", failed, paths.len());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = app_entry().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
