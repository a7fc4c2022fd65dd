use std::collections::HashMap;

use smol_str::SmolStr;

pub type Attributes = HashMap<SmolStr, Option<SmolStr>>;

/// One `#EXTINF` item of a playlist.
///
/// Built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) name: SmolStr,
    pub(crate) duration: Option<i64>,
    pub(crate) uri: Option<SmolStr>,
    pub(crate) attributes: Option<Attributes>,
    pub(crate) raw_info: String,
}

impl Entry {
    /// Display name, empty when the directive has none
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration in seconds. `None` when the directive has no duration region,
    /// negative placeholders such as `-1` are kept as they are.
    pub fn duration(&self) -> Option<i64> {
        self.duration
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// `None` when the directive carries no attributes at all
    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|x| x.get(key))
            .and_then(|x| x.as_deref())
    }

    /// The fragment this entry was parsed from
    pub fn raw_info(&self) -> &str {
        &self.raw_info
    }
}
