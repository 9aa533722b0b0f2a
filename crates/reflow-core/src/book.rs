//! Book descriptions — the per-book layout quirks the classifier needs.
//!
//! These are pure data. The built-in registry covers the books we ship
//! support for; config files can merge additional descriptions over it.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Layout description for one book.
///
/// Not intended to generalize to arbitrary PDFs; each description encodes
/// the known quirks of one specific edition.
#[derive(Debug, Clone, Deserialize)]
pub struct BookDescription {
    /// The first real content line starts with this text. Everything before
    /// it (cover, front matter) is discarded.
    pub start_text: String,

    /// Pages known to contain only an illustration. They have no page-marker
    /// line of their own, so the page counter skips over them.
    #[serde(default)]
    pub illustration_pages: Vec<u32>,

    /// Recurring header/footer lines, discarded wherever they appear.
    #[serde(default)]
    pub ignore_lines: Vec<String>,
}

impl BookDescription {
    pub fn is_illustration_page(&self, page: u32) -> bool {
        self.illustration_pages.contains(&page)
    }

    /// Exact match against the trimmed line content.
    pub fn is_ignored(&self, trimmed: &str) -> bool {
        self.ignore_lines.iter().any(|l| l == trimmed)
    }
}

/// Named book descriptions, selected at startup.
#[derive(Debug, Default)]
pub struct BookRegistry {
    books: BTreeMap<String, BookDescription>,
}

impl BookRegistry {
    /// Registry pre-populated with the built-in descriptions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        registry.insert("book1", book1());
        registry
    }

    /// Adds a description, replacing any existing one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, desc: BookDescription) {
        self.books.insert(name.into(), desc);
    }

    pub fn get(&self, name: &str) -> Option<&BookDescription> {
        self.books.get(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.books.keys().map(String::as_str).collect()
    }
}

/// The Three-Body Problem (三体), first book of the series.
fn book1() -> BookDescription {
    BookDescription {
        start_text: "汪淼觉得".to_string(),
        illustration_pages: vec![83, 104, 105, 158, 159, 208, 209],
        ignore_lines: vec![
            "中国科幻基石丛书".to_string(),
            "地球往事·三体".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_book1() {
        let registry = BookRegistry::with_builtins();
        let book = registry.get("book1").unwrap();
        assert_eq!(book.start_text, "汪淼觉得");
        assert_eq!(book.illustration_pages.len(), 7);
        assert!(book.is_illustration_page(83));
        assert!(!book.is_illustration_page(84));
        assert!(book.is_ignored("中国科幻基石丛书"));
        assert!(!book.is_ignored("汪淼觉得"));
    }

    #[test]
    fn test_unknown_name() {
        let registry = BookRegistry::with_builtins();
        assert!(registry.get("book2").is_none());
        assert_eq!(registry.names(), vec!["book1"]);
    }

    #[test]
    fn test_insert_overrides_builtin() {
        let mut registry = BookRegistry::with_builtins();
        registry.insert(
            "book1",
            BookDescription {
                start_text: "Chapter 1".to_string(),
                illustration_pages: vec![],
                ignore_lines: vec![],
            },
        );
        assert_eq!(registry.get("book1").unwrap().start_text, "Chapter 1");
        assert_eq!(registry.names().len(), 1);
    }

    #[test]
    fn test_description_from_toml() {
        let desc: BookDescription = toml::from_str(
            r#"
            start_text = "Chapter 1"
            illustration_pages = [12, 13]
            ignore_lines = ["SOME PRESS"]
            "#,
        )
        .unwrap();
        assert_eq!(desc.start_text, "Chapter 1");
        assert_eq!(desc.illustration_pages, vec![12, 13]);
        assert!(desc.is_ignored("SOME PRESS"));
    }

    #[test]
    fn test_description_from_toml_defaults() {
        let desc: BookDescription = toml::from_str(r#"start_text = "Once upon""#).unwrap();
        assert!(desc.illustration_pages.is_empty());
        assert!(desc.ignore_lines.is_empty());
    }
}
