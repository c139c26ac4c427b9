// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! The catalog is the fixed, ordered collection of gallery items. It is built
//! once from plain records and never mutated afterwards, so every
//! [`ItemIndex`] handed out stays valid for the catalog's lifetime.

use std::fmt;

// =============================================================================
// ItemIndex
// =============================================================================

/// Zero-based position of an item in the [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Creates an index from a raw zero-based position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw zero-based position.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Returns the human-facing, one-based item number.
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Category label attached to an item (e.g. `"nature"`).
///
/// Labels are compared verbatim; no case folding or trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ItemRecord / Item
// =============================================================================

/// Raw record supplied by the presentation layer or a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemRecord {
    pub category: String,
    pub image_source: String,
    pub alt_text: String,
    pub caption_text: String,
}

impl ItemRecord {
    /// Convenience constructor for a record with a category and image source only.
    #[must_use]
    pub fn new(category: impl Into<String>, image_source: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            image_source: image_source.into(),
            alt_text: String::new(),
            caption_text: String::new(),
        }
    }

    /// Sets the alternative text.
    #[must_use]
    pub fn with_alt(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }

    /// Sets the caption text.
    #[must_use]
    pub fn with_caption(mut self, caption_text: impl Into<String>) -> Self {
        self.caption_text = caption_text.into();
        self
    }
}

/// An immutable gallery item with its stable catalog index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    index: ItemIndex,
    category: Category,
    image_source: String,
    alt_text: String,
    caption_text: String,
}

impl Item {
    #[must_use]
    pub fn index(&self) -> ItemIndex {
        self.index
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// Returns the caption to display: the trimmed caption text, or the
    /// alternative text when the caption is blank.
    #[must_use]
    pub fn caption(&self) -> &str {
        let caption = self.caption_text.trim();
        if caption.is_empty() {
            &self.alt_text
        } else {
            caption
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Fixed, ordered collection of gallery items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from records, assigning indexes in record order.
    pub fn from_records(records: impl IntoIterator<Item = ItemRecord>) -> Self {
        let items = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Item {
                index: ItemIndex::new(i),
                category: Category::new(record.category),
                image_source: record.image_source,
                alt_text: record.alt_text,
                caption_text: record.caption_text,
            })
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if it is in range.
    #[must_use]
    pub fn get(&self, index: ItemIndex) -> Option<&Item> {
        self.items.get(index.value())
    }

    #[must_use]
    pub fn contains(&self, index: ItemIndex) -> bool {
        index.value() < self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns the distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen: Vec<&Category> = Vec::new();
        for item in &self.items {
            if !seen.contains(&&item.category) {
                seen.push(&item.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_records(vec![
            ItemRecord::new("nature", "forest.jpg").with_alt("Forest"),
            ItemRecord::new("city", "bridge.jpg").with_caption("  Golden Gate  "),
            ItemRecord::new("nature", "lake.jpg"),
        ])
    }

    #[test]
    fn indexes_follow_record_order() {
        let catalog = sample();
        let indexes: Vec<usize> = catalog.iter().map(|item| item.index().value()).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn get_out_of_range_returns_none() {
        let catalog = sample();
        assert!(catalog.get(ItemIndex::new(3)).is_none());
        assert!(!catalog.contains(ItemIndex::new(3)));
        assert!(catalog.contains(ItemIndex::new(2)));
    }

    #[test]
    fn caption_falls_back_to_alt_text() {
        let catalog = sample();
        let forest = catalog.get(ItemIndex::new(0)).unwrap();
        assert_eq!(forest.caption(), "Forest");
    }

    #[test]
    fn caption_is_trimmed() {
        let catalog = sample();
        let bridge = catalog.get(ItemIndex::new(1)).unwrap();
        assert_eq!(bridge.caption(), "Golden Gate");
    }

    #[test]
    fn caption_of_bare_record_is_empty() {
        let catalog = sample();
        let lake = catalog.get(ItemIndex::new(2)).unwrap();
        assert_eq!(lake.caption(), "");
    }

    #[test]
    fn categories_are_distinct_in_first_appearance_order() {
        let catalog = sample();
        let labels: Vec<&str> = catalog.categories().iter().map(|c| c.as_str()).collect();
        assert_eq!(labels, vec!["nature", "city"]);
    }

    #[test]
    fn item_number_is_one_based() {
        assert_eq!(ItemIndex::new(0).number(), 1);
        assert_eq!(ItemIndex::new(4).number(), 5);
    }
}
