//! Java `.properties` format support.
//!
//! # Data Flow
//! ```text
//! byte stream (ISO-8859-1) / &str
//!     → parser.rs (logical lines, key/value split, escapes)
//!     → Properties (string → string)
//! ```
//!
//! # Design Decisions
//! - Entries are inserted as each logical line completes, so a failure
//!   halfway through a stream leaves the earlier entries in place
//! - Later duplicates overwrite earlier ones

pub mod parser;

use std::collections::HashMap;
use std::io::Read;
use thiserror::Error;

/// Errors raised while reading a properties stream.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// The underlying stream failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    /// A `\uXXXX` escape was truncated or contained a non-hex digit.
    #[error("malformed \\uxxxx encoding in logical line {line}")]
    MalformedUnicode { line: usize },
}

/// A flat string → string table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete table from text.
    pub fn parse_str(text: &str) -> Result<Self, PropertiesError> {
        let mut props = Self::new();
        parser::load_chars(&mut props, text.chars().map(Ok))?;
        Ok(props)
    }

    /// Read entries from an ISO-8859-1 byte stream into this table.
    ///
    /// On error the entries read before the failure are kept.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<(), PropertiesError> {
        parser::load_into(self, reader)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_accessors() {
        let mut props = Properties::new();
        assert!(props.is_empty());

        assert_eq!(props.insert("a.b", "1"), None);
        assert_eq!(props.insert("a.b", "2"), Some("1".to_string()));
        assert_eq!(props.get("a.b"), Some("2"));
        assert!(props.contains_key("a.b"));
        assert!(!props.contains_key("a.c"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let props: Properties = [("x", "1"), ("y", "2")].into_iter().collect();
        let mut pairs: Vec<_> = props.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("x", "1"), ("y", "2")]);
    }
}
