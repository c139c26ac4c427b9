// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains input-tracking state kept apart from the gallery
//! component, following the principle of separation of concerns.

pub mod swipe;

// Re-export commonly used types for convenience
pub use swipe::{SwipeState, TouchPoint};
