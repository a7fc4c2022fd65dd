use std::{io, path::Path, sync::Arc};

use extinf_rs::{ParseError, Playlist};
use log::debug;
use thiserror::Error;
use tokio::{sync::Semaphore, task::JoinError};

#[derive(Debug, Error)]
pub enum LoadPlaylistError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Join(#[from] JoinError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parses the playlist on the blocking pool so large files don't stall
/// the runtime.
pub async fn parse_playlist_async(bytes: Vec<u8>) -> Result<Playlist, LoadPlaylistError> {
    Ok(tokio::task::spawn_blocking(move || extinf_rs::parse(&bytes)).await??)
}

pub async fn load_playlist(path: impl AsRef<Path>) -> Result<Playlist, LoadPlaylistError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    debug!("Read {} bytes from {}", bytes.len(), path.as_ref().display());

    parse_playlist_async(bytes).await
}

/// Loads every path, at most `workers` at a time. Results keep the order
/// of `paths`.
pub async fn load_all(
    paths: &[String],
    workers: usize,
) -> Vec<Result<Playlist, LoadPlaylistError>> {
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));

    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| {
            let semaphore = semaphore.clone();
            tokio::spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                load_playlist(path).await
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(match handle.await {
            Ok(result) => result,
            Err(e) => Err(e.into()),
        });
    }

    results
}
