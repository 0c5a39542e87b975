use crate::loader::KinkRecord;
use serde_yaml::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// Key used for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Title {
    /// A present text `idea_title`
    Named(String),
    /// Sentinel for an absent or non-text `idea_title`. Untitled records
    /// compare among themselves like any other title value, so two of them
    /// count as a duplicate pair.
    Missing,
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Title::Named(title) => f.write_str(title),
            Title::Missing => f.write_str("<missing>"),
        }
    }
}

/// One reported repeat: the title plus the 1-based catalog positions of its
/// original first occurrence and of this duplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub title: Title,
    pub first_line: usize,
    pub dup_line: usize,
}

/// Scan the catalog once and collect every repeated title.
///
/// Positions are 1-based in catalog order. A title appearing k times yields
/// k-1 duplicates, all referencing the original first occurrence, emitted in
/// increasing duplicate-position order. Pure function of its input; O(n) time
/// and space.
pub fn find_duplicates(records: &[KinkRecord]) -> Vec<Duplicate> {
    let mut seen: HashMap<Title, usize> = HashMap::with_capacity(records.len());
    let mut duplicates = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let line = index + 1;
        let title = title_of(record, line);

        match seen.entry(title) {
            Entry::Occupied(entry) => {
                debug!("Repeat of title {:?} at line {}", entry.key(), line);
                duplicates.push(Duplicate {
                    title: entry.key().clone(),
                    first_line: *entry.get(),
                    dup_line: line,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(line);
            }
        }
    }

    duplicates
}

/// Extract the detection key for a record, folding absent and non-text
/// titles into the shared sentinel.
fn title_of(record: &KinkRecord, line: usize) -> Title {
    match &record.idea_title {
        Some(Value::String(title)) => Title::Named(title.clone()),
        Some(other) => {
            warn!(
                "Line {}: idea_title is not text ({:?}), treating as missing",
                line, other
            );
            Title::Missing
        }
        None => Title::Missing,
    }
}
