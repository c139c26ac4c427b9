// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the gallery.
//!
//! # Available Types
//!
//! - [`CategoryFilter`]: the active category selection (`All` or one label)
//! - [`VisibleSet`]: the ordered catalog indexes matching a filter
//!
//! Labels that no item carries are accepted and simply match nothing.

use super::catalog::{Catalog, Category, ItemIndex};

/// Label that selects every item.
pub const ALL_LABEL: &str = "all";

// =============================================================================
// Category Filter
// =============================================================================

/// Active category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every item is visible.
    #[default]
    All,
    /// Only items whose category equals this label are visible.
    Only(Category),
}

impl CategoryFilter {
    /// Parses a filter control label. `"all"` selects everything; any other
    /// label, known or not, selects that category.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Only(Category::new(label))
        }
    }

    /// Returns `true` if an item with `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Returns `true` if this filter restricts the catalog (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Returns the control label this filter corresponds to.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }
}

// =============================================================================
// Visible Set
// =============================================================================

/// Ordered subsequence of catalog indexes that pass the active filter.
///
/// Indexes are strictly increasing, so membership is a binary search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleSet {
    indexes: Vec<ItemIndex>,
}

impl VisibleSet {
    /// Recomputes the visible indexes of `catalog` under `filter`.
    #[must_use]
    pub fn compute(catalog: &Catalog, filter: &CategoryFilter) -> Self {
        let indexes = catalog
            .iter()
            .filter(|item| filter.matches(item.category()))
            .map(super::catalog::Item::index)
            .collect();
        Self { indexes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<ItemIndex> {
        self.indexes.first().copied()
    }

    #[must_use]
    pub fn contains(&self, index: ItemIndex) -> bool {
        self.indexes.binary_search(&index).is_ok()
    }

    /// Returns the zero-based position of `index` within the set.
    #[must_use]
    pub fn position_of(&self, index: ItemIndex) -> Option<usize> {
        self.indexes.binary_search(&index).ok()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ItemIndex] {
        &self.indexes
    }

    /// Returns the index after `from`, wrapping to the first one.
    ///
    /// A `from` outside the set resolves to the first visible index.
    /// Returns `None` only when the set is empty.
    #[must_use]
    pub fn step_forward(&self, from: ItemIndex) -> Option<ItemIndex> {
        let len = self.indexes.len();
        match self.position_of(from) {
            Some(pos) => self.indexes.get((pos + 1) % len).copied(),
            None => self.first(),
        }
    }

    /// Returns the index before `from`, wrapping to the last one.
    ///
    /// A `from` outside the set resolves to the first visible index.
    /// Returns `None` only when the set is empty.
    #[must_use]
    pub fn step_backward(&self, from: ItemIndex) -> Option<ItemIndex> {
        let len = self.indexes.len();
        match self.position_of(from) {
            Some(pos) => self.indexes.get((pos + len - 1) % len).copied(),
            None => self.first(),
        }
    }
}
