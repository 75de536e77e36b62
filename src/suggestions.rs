//! Suggested prompt list
//!
//! An immutable ordered catalog of candidate prompts plus a cursor over it.
//! Activating an item requests a wholesale prompt replacement in the
//! composer; the list itself never mutates.

/// Catalog of suggested prompts with a navigation cursor
///
/// The catalog is fixed at startup. Duplicate strings are kept as
/// independent items. The cursor is `None` only when the catalog is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    catalog: Vec<String>,
    cursor: Option<usize>,
}

impl SuggestionList {
    pub fn new(catalog: Vec<String>) -> Self {
        let cursor = if catalog.is_empty() { None } else { Some(0) };
        Self { catalog, cursor }
    }

    pub fn items(&self) -> &[String] {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The focused item's index, if any
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Resolve the catalog entry at an index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.catalog.get(index).map(String::as_str)
    }

    /// Move the cursor to a specific item (pointer hover/click path)
    ///
    /// Out-of-range indices are ignored.
    pub fn set_cursor(&mut self, index: usize) {
        if index < self.catalog.len() {
            self.cursor = Some(index);
        }
    }

    /// Move the cursor down one item, wrapping at the bottom
    pub fn select_next(&mut self) {
        if let Some(cursor) = self.cursor {
            self.cursor = Some((cursor + 1) % self.catalog.len());
        }
    }

    /// Move the cursor up one item, wrapping at the top
    pub fn select_previous(&mut self) {
        if let Some(cursor) = self.cursor {
            self.cursor = Some(cursor.checked_sub(1).unwrap_or(self.catalog.len() - 1));
        }
    }
}
