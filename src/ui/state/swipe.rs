// SPDX-License-Identifier: MPL-2.0
//! Swipe state management
//!
//! Tracks a single-finger touch on the viewer image and turns a completed,
//! horizontally dominant gesture into a navigation direction.

use crate::application::query::Direction;
use crate::domain::ui::SwipeThreshold;

/// A touch contact position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Manages swipe state
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    /// Position where the tracked touch started
    pub start_position: Option<TouchPoint>,
}

impl SwipeState {
    /// Starts tracking a touch. Multi-touch (or empty) starts are ignored and
    /// leave no gesture in progress.
    pub fn start(&mut self, touches: &[TouchPoint]) {
        self.start_position = match touches {
            [single] => Some(*single),
            _ => None,
        };
    }

    /// Returns whether a gesture is currently being tracked
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_position.is_some()
    }

    /// Ends the gesture and classifies it.
    ///
    /// Leftward travel (`dx < 0`) means next, rightward means previous. The
    /// horizontal travel must dominate the vertical travel and strictly
    /// exceed `threshold`.
    pub fn finish(&mut self, end: TouchPoint, threshold: SwipeThreshold) -> Option<Direction> {
        let start = self.start_position.take()?;

        let delta_x = end.x - start.x;
        let delta_y = end.y - start.y;

        if delta_x.abs() > delta_y.abs() && threshold.is_exceeded_by(delta_x) {
            Some(if delta_x < 0.0 {
                Direction::Next
            } else {
                Direction::Previous
            })
        } else {
            None
        }
    }

    /// Drops any gesture in progress
    pub fn cancel(&mut self) {
        self.start_position = None;
    }
}
