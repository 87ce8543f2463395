//! JSON decoder collaborator.
//!
//! A language file is a flat JSON object mapping text keys to template
//! strings. Decoding sits behind the [`Decode`] trait so tests can swap in
//! a failing decoder without writing malformed files.

use std::collections::HashMap;

use serde::Deserialize;

/// Decoded form of one language file: text key to template string.
///
/// Keys are unique and order is irrelevant. A fresh table is fetched on
/// every resolve call; nothing is cached between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    /// An empty table (used when a default-language decode failure is
    /// tolerated).
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the template for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parses raw language-file text into a [`TranslationTable`].
pub trait Decode {
    /// Decode `raw` or report why it is not a valid table.
    fn decode(
        &self,
        raw: &str,
    ) -> Result<TranslationTable, Box<dyn std::error::Error + Send + Sync>>;
}

/// Production decoder backed by serde_json.
///
/// Only a flat object of string values is accepted; nested objects, arrays
/// or non-string values are decode failures, not silently skipped entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decode for JsonDecoder {
    fn decode(
        &self,
        raw: &str,
    ) -> Result<TranslationTable, Box<dyn std::error::Error + Send + Sync>> {
        let table = serde_json::from_str(raw)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== JsonDecoder Tests ====================

    #[test]
    fn test_decode_flat_object() {
        let table = JsonDecoder
            .decode(r#"{"hi": "Hi", "bye": "Goodbye"}"#)
            .expect("valid table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("hi"), Some("Hi"));
        assert_eq!(table.get("bye"), Some("Goodbye"));
    }

    #[test]
    fn test_decode_empty_object() {
        let table = JsonDecoder.decode("{}").expect("empty object is valid");
        assert!(table.is_empty());
    }

    #[test]
    fn test_decode_invalid_json_fails() {
        assert!(JsonDecoder.decode("{not json").is_err());
    }

    #[test]
    fn test_decode_non_object_fails() {
        assert!(JsonDecoder.decode(r#"["hi", "bye"]"#).is_err());
    }

    #[test]
    fn test_decode_non_string_value_fails() {
        assert!(JsonDecoder.decode(r#"{"count": 3}"#).is_err());
    }

    #[test]
    fn test_decode_unicode_values() {
        let table = JsonDecoder
            .decode(r#"{"greet": "¡Hola, señor! 你好"}"#)
            .expect("unicode values are valid");
        assert_eq!(table.get("greet"), Some("¡Hola, señor! 你好"));
    }

    // ==================== TranslationTable Tests ====================

    #[test]
    fn test_table_from_iter() {
        let table: TranslationTable = [("hi", "Hi")].into_iter().collect();
        assert_eq!(table.get("hi"), Some("Hi"));
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_table_insert_overwrites() {
        let mut table = TranslationTable::new();
        table.insert("hi", "Hi");
        table.insert("hi", "Hello");
        assert_eq!(table.get("hi"), Some("Hello"));
        assert_eq!(table.len(), 1);
    }
}
