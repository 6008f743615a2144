//! In-memory resource store with a plain `key: value` text loader.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::ResourceLookup;
use crate::error::Result;

/// A flat resource store.
///
/// The text loader understands the common subset of resource files:
///
/// - `key: value` lines, split at the first colon
/// - `!` comment lines and `#` directive lines, which are skipped
/// - leading whitespace of the value is dropped, trailing whitespace kept
/// - a later line for the same key replaces the earlier one
///
/// Malformed lines are skipped. Wildcard bindings are not supported: keys
/// match exactly.
///
/// # Examples
///
/// ```
/// use optlayer::source::{ResourceDatabase, ResourceLookup};
///
/// let db = ResourceDatabase::parse("! comment\nrofi.lines: 10\nrofi.font:   Sans 9\n");
/// assert_eq!(db.lookup("rofi.lines").as_deref(), Some("10"));
/// assert_eq!(db.lookup("rofi.font").as_deref(), Some("Sans 9"));
/// assert_eq!(db.lookup("rofi.width"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDatabase {
    entries: HashMap<String, String>,
}

impl ResourceDatabase {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse resource text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut db = Self::new();
        for (number, line) in text.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('!') || trimmed.starts_with('#') {
                continue;
            }
            match trimmed.split_once(':') {
                Some((key, value)) if !key.trim().is_empty() => {
                    db.insert(key.trim(), value.trim_start());
                }
                _ => log::debug!("skipping malformed resource line {}", number + 1),
            }
        }
        db
    }

    /// Read and parse a resource file.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file cannot be read. Bytes that are
    /// not valid UTF-8 are replaced rather than rejected.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of stored resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceLookup for ResourceDatabase {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResourceDatabase {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut db = Self::new();
        for (key, value) in iter {
            db.insert(key, value);
        }
        db
    }
}
