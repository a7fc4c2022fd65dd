use std::str::{FromStr, Utf8Error};

use log::debug;
use thiserror::Error;

use crate::{
    entry::parse_entry,
    format::{Playlist, directives},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Input is not a byte buffer")]
    NotBytes,
    #[error("Missing #EXTM3U signature")]
    BadSignature,
    #[error("Playlist is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),
    #[error("Fragment does not start with #EXTINF")]
    NotAnEntry,
    #[error("Invalid duration: {0:?}")]
    InvalidDuration(String),
}

/// Input of the playlist parser: raw file contents, or text that was
/// already decoded by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Source<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Source<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

/// Only byte buffers carry a signature, text input is rejected with
/// [`ParseError::NotBytes`].
pub fn check_signature<'a>(source: impl Into<Source<'a>>) -> Result<(), ParseError> {
    let Source::Bytes(bytes) = source.into() else {
        return Err(ParseError::NotBytes);
    };

    if !bytes.starts_with(&directives::SIGNATURE) {
        return Err(ParseError::BadSignature);
    }

    Ok(())
}

/// Strict UTF-8, invalid sequences are an error rather than replaced
pub fn decode(bytes: &[u8]) -> Result<&str, ParseError> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Cuts `text` right before every `#EXTINF`. Text in front of the first
/// marker, or the whole text when there is none, forms a fragment as well.
fn split_fragments(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut last = 0;
    for (index, _) in text.match_indices(directives::EXTINF) {
        if index == 0 {
            continue;
        }
        result.push(&text[last..index]);
        last = index;
    }
    result.push(&text[last..]);

    result
}

/// Parses a playlist file's contents.
pub fn parse(bytes: &[u8]) -> Result<Playlist, ParseError> {
    check_signature(bytes)?;
    let text = decode(bytes)?;
    parse_str(text)
}

/// Parses already decoded playlist text, no signature is required.
pub fn parse_str(text: &str) -> Result<Playlist, ParseError> {
    let text = match text.strip_prefix(directives::EXTM3U) {
        Some(rest) => rest.trim(),
        None => text,
    };

    let items = split_fragments(text)
        .into_iter()
        .map(parse_entry)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed playlist with {} entries", items.len());
    Ok(Playlist { items })
}

impl Playlist {
    /// Parses bytes or text, see [`parse`] and [`parse_str`].
    pub fn parse<'a>(source: impl Into<Source<'a>>) -> Result<Self, ParseError> {
        match source.into() {
            Source::Bytes(bytes) => parse(bytes),
            Source::Text(text) => parse_str(text),
        }
    }
}

impl FromStr for Playlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

impl TryFrom<&[u8]> for Playlist {
    type Error = ParseError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        parse(value)
    }
}
