// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation module for managing the catalog, filter and cursor.
//!
//! This module provides a `GalleryNavigator` that owns the catalog and is the
//! single source of truth for which items are visible and which one is
//! current. The viewer component drives it and renders from its snapshots.

use crate::domain::gallery::{Catalog, CategoryFilter, Item, ItemIndex, VisibleSet};
use std::fmt;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step to the next visible item.
    Next,
    /// Step to the previous visible item.
    Previous,
}

/// `"P / T"` indicator shown next to the viewer image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionIndicator {
    /// One-based position, `0` when the cursor is not visible.
    pub position: usize,
    /// Number of visible items, never below 1.
    pub total: usize,
}

impl fmt::Display for PositionIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.total)
    }
}

/// Navigation state information for UI rendering.
///
/// This struct contains all the information needed by the viewer to render
/// navigation controls without needing direct access to the catalog.
/// It acts as a snapshot of the current navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Current cursor (catalog index).
    pub cursor: ItemIndex,
    /// Zero-based position of the cursor among visible items, if visible.
    pub position: Option<usize>,
    /// Number of visible items.
    pub visible_count: usize,
    /// Total number of items in the catalog.
    pub total_count: usize,
    /// Whether a category filter is currently active.
    pub filter_active: bool,
}

impl NavigationInfo {
    /// Returns the `"P / T"` indicator, falling back to `0 / 1` when the
    /// cursor has no visible position.
    #[must_use]
    pub fn indicator(&self) -> PositionIndicator {
        PositionIndicator {
            position: self.position.map_or(0, |p| p + 1),
            total: self.visible_count.max(1),
        }
    }
}

/// Outcome of enforcing the cursor invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCheck {
    /// The cursor was already visible.
    Valid,
    /// The cursor was hidden and moved to the first visible item.
    Repaired(ItemIndex),
    /// Nothing is visible; the cursor keeps its stale value.
    NothingVisible,
}

/// Manages navigation through the filtered gallery catalog.
///
/// # Filtering
///
/// Changing the category recomputes the [`VisibleSet`] from scratch and then
/// enforces the cursor invariant: a cursor that is no longer visible moves to
/// the first visible item.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryNavigator {
    catalog: Catalog,
    filter: CategoryFilter,
    visible: VisibleSet,
    cursor: ItemIndex,
}

impl GalleryNavigator {
    /// Creates a navigator over `catalog` with every item visible and the
    /// cursor on the first item.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let filter = CategoryFilter::All;
        let visible = VisibleSet::compute(&catalog, &filter);
        Self {
            catalog,
            filter,
            visible,
            cursor: ItemIndex::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    #[must_use]
    pub fn cursor(&self) -> ItemIndex {
        self.cursor
    }

    /// Returns the item under the cursor, if the cursor is in range.
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.catalog.get(self.cursor)
    }

    #[must_use]
    pub fn is_cursor_visible(&self) -> bool {
        self.visible.contains(self.cursor)
    }

    // =========================================================================
    // Filter Methods
    // =========================================================================

    /// Sets the category filter, recomputes the visible set and enforces the
    /// cursor invariant.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> CursorCheck {
        self.visible = VisibleSet::compute(&self.catalog, &filter);
        self.filter = filter;
        self.ensure_cursor_visible()
    }

    /// Moves a hidden cursor to the first visible item.
    pub fn ensure_cursor_visible(&mut self) -> CursorCheck {
        if self.visible.contains(self.cursor) {
            return CursorCheck::Valid;
        }
        match self.visible.first() {
            Some(first) => {
                self.cursor = first;
                CursorCheck::Repaired(first)
            }
            None => CursorCheck::NothingVisible,
        }
    }

    // =========================================================================
    // Cursor Movement
    // =========================================================================

    /// Steps the cursor in `direction`, wrapping around the visible set.
    ///
    /// A hidden cursor jumps to the first visible item instead. Returns the
    /// new cursor, or `None` when nothing is visible (the cursor is left
    /// untouched).
    pub fn step(&mut self, direction: Direction) -> Option<ItemIndex> {
        let target = match direction {
            Direction::Next => self.visible.step_forward(self.cursor),
            Direction::Previous => self.visible.step_backward(self.cursor),
        }?;
        self.cursor = target;
        Some(target)
    }

    /// Steps to the next visible item. See [`GalleryNavigator::step`].
    pub fn next(&mut self) -> Option<ItemIndex> {
        self.step(Direction::Next)
    }

    /// Steps to the previous visible item. See [`GalleryNavigator::step`].
    pub fn previous(&mut self) -> Option<ItemIndex> {
        self.step(Direction::Previous)
    }

    /// Places the cursor on `index` regardless of its current value.
    ///
    /// Returns `false` and leaves the cursor untouched when `index` is out of
    /// range. The index is not required to be visible.
    pub fn activate(&mut self, index: ItemIndex) -> bool {
        if !self.catalog.contains(index) {
            return false;
        }
        self.cursor = index;
        true
    }

    /// Returns a snapshot of the current navigation state for UI rendering.
    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo {
            cursor: self.cursor,
            position: self.visible.position_of(self.cursor),
            visible_count: self.visible.len(),
            total_count: self.catalog.len(),
            filter_active: self.filter.is_active(),
        }
    }
}
