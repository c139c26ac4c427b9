// SPDX-License-Identifier: MPL-2.0
//! Query services.
//!
//! This module contains the services that own and navigate domain data.
//!
//! # Available Services
//!
//! - [`navigation`]: Filtered catalog navigation (`GalleryNavigator`)

pub mod navigation;

// Re-export main types
pub use navigation::{CursorCheck, Direction, GalleryNavigator, NavigationInfo, PositionIndicator};
