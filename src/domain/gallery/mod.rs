// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module contains the catalog, category filtering and image filter
//! types, independent of any presentation or storage concerns.

pub mod catalog;
pub mod filter;
pub mod image_filter;

// Re-export commonly used types
pub use catalog::{Catalog, Category, Item, ItemIndex, ItemRecord};
pub use filter::{CategoryFilter, VisibleSet, ALL_LABEL};
pub use image_filter::ImageFilter;
