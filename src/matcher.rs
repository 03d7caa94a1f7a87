use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::catalog::ArchiveRecord;

/// Jar path to the first matching class name, kept in insertion order.
///
/// Re-inserting a jar replaces its class name but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    entries: IndexMap<PathBuf, String>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, jar_path: PathBuf, class_name: String) -> Option<String> {
        self.entries.insert(jar_path, class_name)
    }

    pub fn get(&self, jar_path: &Path) -> Option<&str> {
        self.entries.get(jar_path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries
            .iter()
            .map(|(path, class_name)| (path.as_path(), class_name.as_str()))
    }
}

/// The earliest class name in `record` that contains `target`.
pub fn first_match<'a>(record: &'a ArchiveRecord, target: &str) -> Option<&'a str> {
    record
        .class_names
        .iter()
        .find(|name| name.contains(target))
        .map(String::as_str)
}

/// Records the first match of `record` into `result`; returns whether one was found.
pub fn record_first_match(result: &mut MatchResult, record: &ArchiveRecord, target: &str) -> bool {
    match first_match(record, target) {
        Some(class_name) => {
            result.insert(record.path.clone(), class_name.to_string());
            true
        }
        None => false,
    }
}
