use std::fmt::Display;

use extinf_rs::{Entry, Playlist};

use crate::Config;

/// Human readable listing of one parsed playlist
pub struct Report<'a> {
    pub path: &'a str,
    pub playlist: &'a Playlist,
    pub show_attributes: bool,
    pub show_raw: bool,
}

impl<'a> Report<'a> {
    pub fn new(path: &'a str, playlist: &'a Playlist, config: &Config) -> Self {
        Self {
            path,
            playlist,
            show_attributes: config.show_attributes(),
            show_raw: config.show_raw(),
        }
    }

    fn fmt_entry(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        index: usize,
        entry: &Entry,
    ) -> std::fmt::Result {
        // 1. name [duration] uri
        let name = if entry.name().is_empty() {
            "(no name)"
        } else {
            entry.name()
        };
        write!(f, "{:>4}. {}", index + 1, name)?;
        match entry.duration() {
            Some(duration) => write!(f, " [{}s]", duration)?,
            None => write!(f, " [-]")?,
        }
        writeln!(f, " {}", entry.uri().map(str::trim_end).unwrap_or("-"))?;

        // attributes, sorted so the output is stable
        if self.show_attributes {
            if let Some(attributes) = entry.attributes() {
                let mut attributes = attributes.iter().collect::<Vec<_>>();
                attributes.sort_by(|a, b| a.0.cmp(b.0));
                for (key, value) in attributes {
                    match value {
                        Some(value) => writeln!(f, "        {}={}", key, value)?,
                        None => writeln!(f, "        {}", key)?,
                    }
                }
            }
        }

        if self.show_raw {
            for line in entry.raw_info().lines() {
                writeln!(f, "      | {}", line)?;
            }
        }

        Ok(())
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.playlist.len();
        let noun = if count == 1 { "entry" } else { "entries" };
        writeln!(f, "{}: {} {}", self.path, count, noun)?;

        for (index, entry) in self.playlist.iter().enumerate() {
            self.fmt_entry(f, index, entry)?;
        }

        Ok(())
    }
}
