// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Range bounds live next to the newtypes that enforce them; this module
//! exposes them under configuration names.

use crate::domain::gallery::ALL_LABEL;
use crate::domain::ui::newtypes::{announce_bounds, swipe_bounds};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Category filter applied at startup.
pub const DEFAULT_CATEGORY: &str = ALL_LABEL;

/// Default minimum horizontal travel for a swipe (in pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::DEFAULT_PX;

/// Minimum swipe threshold (in pixels).
pub const MIN_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::MIN_PX;

/// Maximum swipe threshold (in pixels).
pub const MAX_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::MAX_PX;

// ==========================================================================
// Announcement Defaults
// ==========================================================================

/// Default delay before a live-region announcement is written (in milliseconds).
pub const DEFAULT_ANNOUNCE_DELAY_MS: u32 = announce_bounds::DEFAULT_MS;

/// Minimum announcement delay (in milliseconds).
pub const MIN_ANNOUNCE_DELAY_MS: u32 = announce_bounds::MIN_MS;

/// Maximum announcement delay (in milliseconds).
pub const MAX_ANNOUNCE_DELAY_MS: u32 = announce_bounds::MAX_MS;
