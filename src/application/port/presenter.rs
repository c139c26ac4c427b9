// SPDX-License-Identifier: MPL-2.0
//! Presentation port definition.
//!
//! This module defines the [`Presenter`] trait a rendering technology
//! implements to display the gallery. The gallery core never touches a
//! rendering API directly: every state transition is reported through this
//! port once the transition is complete.

use crate::application::query::PositionIndicator;
use crate::domain::gallery::{CategoryFilter, ImageFilter, ItemIndex};
use crate::domain::ui::ThemeFlag;

// =============================================================================
// Frame
// =============================================================================

/// Everything the viewer needs to show one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Catalog index of the shown item.
    pub index: ItemIndex,
    pub image_source: String,
    pub alt_text: String,
    /// Caption text (falls back to the alternative text).
    pub caption: String,
    /// `"P / T"` position among visible items.
    pub indicator: PositionIndicator,
    /// Image filter to apply to the shown image.
    pub image_filter: ImageFilter,
}

// =============================================================================
// Controls
// =============================================================================

/// Active states of the filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Controls {
    /// Category filter whose control is marked active.
    pub category: CategoryFilter,
    /// Image filter whose toggle is marked active.
    pub image_filter: ImageFilter,
}

impl Controls {
    /// Returns `true` if the category control labelled `label` is active.
    #[must_use]
    pub fn is_category_active(&self, label: &str) -> bool {
        self.category.label() == label
    }

    /// Returns `true` if the image filter toggle for `filter` is active.
    #[must_use]
    pub fn is_image_filter_active(&self, filter: ImageFilter) -> bool {
        self.image_filter == filter
    }
}

// =============================================================================
// Presenter Trait
// =============================================================================

/// Receives the output of the gallery.
///
/// Calls arrive in the order the state transitions happened, synchronously
/// inside the update that caused them.
pub trait Presenter {
    /// Shows `frame` in the viewer.
    fn render(&mut self, frame: &Frame);

    /// Updates the active/inactive state of the filter controls.
    fn sync_controls(&mut self, controls: &Controls);

    /// Shows or hides the viewer overlay.
    fn set_viewer_visible(&mut self, visible: bool);

    /// Moves keyboard focus to the viewer's close control.
    fn focus_close_control(&mut self);

    /// Writes `text` to the assistive-technology live region. An empty string
    /// clears the region.
    fn set_live_region(&mut self, text: &str);

    /// Applies the display theme; `toggle_label` is the accessible label of
    /// the theme toggle control.
    fn apply_theme(&mut self, theme: ThemeFlag, toggle_label: &str);
}
