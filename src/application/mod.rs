// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Navigation services over the gallery catalog
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation adapters implement application layer ports
//! - The viewer component drives application layer services
//!
//! # Example
//!
//! ```
//! use gallery_lens::application::query::GalleryNavigator;
//! use gallery_lens::domain::gallery::{Catalog, CategoryFilter, ItemRecord};
//!
//! let catalog = Catalog::from_records(vec![
//!     ItemRecord::new("A", "a.jpg"),
//!     ItemRecord::new("B", "b.jpg"),
//! ]);
//! let mut navigator = GalleryNavigator::new(catalog);
//! navigator.set_filter(CategoryFilter::parse("B"));
//! assert_eq!(navigator.cursor().value(), 1);
//! ```

pub mod port;
pub mod query;
