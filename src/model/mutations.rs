use std::collections::HashSet;

use serde::Serialize;

use crate::model::coverage::PanelCoverage;

/// Unique mutation position keys read from a MAF.
#[derive(Debug, Clone, Default)]
pub struct MutationSet {
    keys: HashSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MutationCounts {
    pub total: usize,
    pub on_target: usize,
    pub off_target: usize,
}

impl MutationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the key was already present.
    pub fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Keys present in the panel (set intersection).
    pub fn on_target<'a>(&'a self, panel: &'a PanelCoverage) -> impl Iterator<Item = &'a str> {
        self.iter().filter(|key| panel.contains_key(key))
    }

    /// Keys absent from the panel (set difference).
    pub fn off_target<'a>(&'a self, panel: &'a PanelCoverage) -> impl Iterator<Item = &'a str> {
        self.iter().filter(|key| !panel.contains_key(key))
    }

    pub fn classify(&self, panel: &PanelCoverage) -> MutationCounts {
        MutationCounts {
            total: self.len(),
            on_target: self.on_target(panel).count(),
            off_target: self.off_target(panel).count(),
        }
    }
}

impl FromIterator<String> for MutationSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/mutations.rs"]
mod tests;
