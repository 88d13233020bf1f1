//! Browser import map output.
//!
//! Serializes as `{"imports":{...}}` with entries in insertion order.

use crate::error::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An import map: specifier to URL, in insertion order.
///
/// Re-inserting an existing specifier keeps its position and replaces the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMap {
    pub imports: IndexMap<String, String>,
}

impl ImportMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the URL for a specifier.
    pub fn insert(&mut self, specifier: impl Into<String>, url: impl Into<String>) {
        self.imports.insert(specifier.into(), url.into());
    }

    #[must_use]
    pub fn get(&self, specifier: &str) -> Option<&str> {
        self.imports.get(specifier).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, specifier: &str) -> bool {
        self.imports.contains_key(specifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Specifiers in insertion order.
    pub fn specifiers(&self) -> impl Iterator<Item = &str> {
        self.imports.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fold another map's entries into this one. Entries from `other` win.
    pub fn merge(&mut self, other: ImportMap) {
        self.imports.extend(other.imports);
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::Serialize)
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }

    /// Render as an inline `<script type="importmap">` element.
    ///
    /// `<` is escaped as `\u003c` so no URL can close the element early.
    pub fn to_script_tag(&self) -> Result<String, Error> {
        let json = self.to_json_pretty()?.replace('<', "\\u003c");
        Ok(format!("<script type=\"importmap\">\n{json}\n</script>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_imports_key() {
        let mut map = ImportMap::new();
        map.insert("react", "https://esm.sh/react@18.2.0");
        assert_eq!(
            map.to_json().unwrap(),
            r#"{"imports":{"react":"https://esm.sh/react@18.2.0"}}"#
        );
    }

    #[test]
    fn test_empty_map_json() {
        assert_eq!(ImportMap::new().to_json().unwrap(), r#"{"imports":{}}"#);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = ImportMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "3");

        assert_eq!(map.specifiers().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some("3"));
    }

    #[test]
    fn test_merge_later_wins_first_order_kept() {
        let mut left = ImportMap::new();
        left.insert("a", "1");
        left.insert("b", "2");

        let mut right = ImportMap::new();
        right.insert("c", "3");
        right.insert("a", "4");

        left.merge(right);
        assert_eq!(left.specifiers().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(left.get("a"), Some("4"));
    }

    #[test]
    fn test_json_order_follows_insertion() {
        let mut map = ImportMap::new();
        map.insert("zeta", "z");
        map.insert("alpha", "a");
        assert_eq!(
            map.to_json().unwrap(),
            r#"{"imports":{"zeta":"z","alpha":"a"}}"#
        );
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut map = ImportMap::new();
        map.insert("x", "https://cdn/x");
        let parsed: ImportMap = serde_json::from_str(&map.to_json().unwrap()).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_script_tag_escapes_closing_tag() {
        let mut map = ImportMap::new();
        map.insert("evil", "https://cdn/</script><script>alert(1)</script>");

        let tag = map.to_script_tag().unwrap();
        assert!(tag.starts_with("<script type=\"importmap\">"));
        assert!(tag.ends_with("</script>"));
        assert_eq!(tag.matches("</script>").count(), 1);

        let body = tag
            .trim_start_matches("<script type=\"importmap\">")
            .trim_end_matches("</script>");
        let parsed: ImportMap = serde_json::from_str(body.trim()).unwrap();
        assert_eq!(parsed, map);
    }
}
