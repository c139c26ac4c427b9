// SPDX-License-Identifier: MPL-2.0
//! Lightbox viewer module: gallery component and its presentation state.

pub mod component;
pub mod state;

pub use component::{Announcement, Effect, Gallery, Key, Message};
pub use state::ViewerState;
