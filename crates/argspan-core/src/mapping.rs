//! # Role mapping
//!
//! Maps source class names (propbank roles such as `ARG0`) to the label
//! names used in the output annotations (`agent`). Loaded once by the
//! caller and passed read-only into every extraction call; the table is
//! never process-wide state.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ArgspanError, Result};

/// Immutable mapping from propbank role name to output label.
///
/// Classes absent from the mapping are intentionally filtered: chunks
/// carrying them are dropped silently during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMapping {
    map: HashMap<String, String>,
}

impl RoleMapping {
    /// Creates an empty mapping (every chunk will be filtered).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a tab-delimited mapping table, one `source<TAB>target` pair
    /// per line, no header. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ArgspanError::MappingParse` for a non-blank line without a
    /// tab separator.
    pub fn from_tsv(table: &str) -> Result<Self> {
        let mut map = HashMap::new();

        for (i, line) in table.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (source, target) =
                line.split_once('\t')
                    .ok_or_else(|| ArgspanError::MappingParse {
                        line: i + 1,
                        content: line.to_string(),
                    })?;
            map.insert(source.trim().to_string(), target.trim().to_string());
        }

        Ok(Self { map })
    }

    /// Reads and parses a mapping table from a file.
    ///
    /// # Errors
    ///
    /// Returns `ArgspanError::MappingIo` if the file cannot be read, or
    /// `ArgspanError::MappingParse` for a malformed line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let table = std::fs::read_to_string(path)?;
        Self::from_tsv(&table)
    }

    /// Looks up the output label for a source class.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&str> {
        self.map.get(class).map(String::as_str)
    }

    /// Returns `true` if the source class has a mapping.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.map.contains_key(class)
    }

    /// Number of mapped classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no classes are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<S, T> FromIterator<(S, T)> for RoleMapping
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(s, t)| (s.into(), t.into()))
                .collect(),
        }
    }
}
