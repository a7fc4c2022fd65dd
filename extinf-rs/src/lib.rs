//! # extinf-rs
//! A library for parsing the `#EXTINF` entries of m3u/m3u8 playlists
//!
//! # Example
//! ```rust
//! use extinf_rs::Playlist;
//!
//! let data = b"#EXTM3U
//! #EXTINF:-1 tvg-id=\"1\" group-title=\"News\",Channel One
//! http://example.com/ch1.m3u8
//! #EXTINF:180,Song 1
//! http://example.com/song1.mp3";
//!
//! let playlist = Playlist::parse(data).unwrap();
//! assert_eq!(playlist.len(), 2);
//! assert_eq!(playlist[0].name(), "Channel One");
//! assert_eq!(playlist[0].attribute("group-title"), Some("News"));
//! assert_eq!(playlist[1].duration(), Some(180));
//! ```
//!
//! Text that was already decoded skips the signature check:
//! ```rust
//! let playlist: extinf_rs::Playlist = "#EXTINF:1,A\nhttp://example.com/a.mp3".parse().unwrap();
//! assert_eq!(playlist[0].uri(), Some("http://example.com/a.mp3"));
//! ```

pub mod entry;
pub mod format;
mod parser;
pub use format::{Entry, Playlist};
pub use parser::*;
