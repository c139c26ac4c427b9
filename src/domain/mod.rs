// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Catalog types ([`Catalog`](gallery::Catalog), [`Item`](gallery::Item)),
//!   category filtering ([`CategoryFilter`](gallery::CategoryFilter),
//!   [`VisibleSet`](gallery::VisibleSet)) and [`ImageFilter`](gallery::ImageFilter)
//! - [`ui`]: UI value objects ([`SwipeThreshold`](ui::SwipeThreshold),
//!   [`AnnounceDelay`](ui::AnnounceDelay)) and the [`ThemeFlag`](ui::ThemeFlag)

pub mod gallery;
pub mod ui;
