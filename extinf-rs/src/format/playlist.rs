use std::ops::Index;

use crate::format::Entry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    /// Entries of this playlist, in source order
    pub(crate) items: Vec<Entry>,
}

impl Playlist {
    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<Entry> {
        self.items
    }
}

impl Index<usize> for Playlist {
    type Output = Entry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Playlist {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
