// SPDX-License-Identifier: MPL-2.0
//! Lightbox presentation state.

use crate::domain::gallery::ImageFilter;

/// Open/closed state of the viewer overlay and its applied image filter.
///
/// The image filter is independent of which item is shown: stepping between
/// items keeps it, closing the viewer resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    is_open: bool,
    image_filter: ImageFilter,
}

impl ViewerState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn image_filter(&self) -> ImageFilter {
        self.image_filter
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Closes the viewer and resets the image filter.
    pub fn close(&mut self) {
        self.is_open = false;
        self.image_filter = ImageFilter::None;
    }

    pub fn set_image_filter(&mut self, filter: ImageFilter) {
        self.image_filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_closed_without_filter() {
        let state = ViewerState::default();
        assert!(!state.is_open());
        assert_eq!(state.image_filter(), ImageFilter::None);
    }

    #[test]
    fn close_resets_image_filter() {
        let mut state = ViewerState::default();
        state.open();
        state.set_image_filter(ImageFilter::Sepia);
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.image_filter(), ImageFilter::None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = ViewerState::default();
        state.close();
        state.close();
        assert_eq!(state, ViewerState::default());
    }
}
