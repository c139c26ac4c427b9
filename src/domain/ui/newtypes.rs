// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Swipe threshold bounds, in pixels of horizontal travel.
pub mod swipe_bounds {
    /// Minimum swipe distance.
    pub const MIN_PX: f32 = 10.0;
    /// Maximum swipe distance.
    pub const MAX_PX: f32 = 400.0;
    /// Default swipe distance.
    pub const DEFAULT_PX: f32 = 40.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel for a touch gesture to count as a swipe.
///
/// Guaranteed to be within valid range (10px–400px). A travel must strictly
/// exceed the threshold to trigger navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_finite() {
            Self(pixels.clamp(swipe_bounds::MIN_PX, swipe_bounds::MAX_PX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` if a travel of `distance` pixels passes the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, distance: f32) -> bool {
        distance.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// Announcement Delay Bounds
// =============================================================================

/// Live-region announcement delay bounds (0 to 1000 milliseconds).
pub mod announce_bounds {
    /// Minimum delay in milliseconds (announce on the same update).
    pub const MIN_MS: u32 = 0;
    /// Maximum delay in milliseconds.
    pub const MAX_MS: u32 = 1000;
    /// Default delay in milliseconds.
    pub const DEFAULT_MS: u32 = 50;
}

// =============================================================================
// AnnounceDelay
// =============================================================================

/// Delay between clearing the live region and writing the new announcement.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–1000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceDelay(u32);

impl AnnounceDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(announce_bounds::MIN_MS, announce_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for AnnounceDelay {
    fn default() -> Self {
        Self(announce_bounds::DEFAULT_MS)
    }
}
