// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating filter, navigation and viewer state.
//!
//! The component follows the "state down, messages up" pattern: every input
//! arrives as a [`Message`], is applied synchronously, and the resulting
//! presentation changes are returned as an ordered list of [`Effect`]s.

use crate::application::port::{Controls, Frame};
use crate::application::query::{CursorCheck, Direction, GalleryNavigator};
use crate::domain::gallery::{Catalog, CategoryFilter, ImageFilter, ItemIndex};
use crate::domain::ui::SwipeThreshold;
use crate::ui::state::{SwipeState, TouchPoint};
use crate::ui::viewer::state::ViewerState;
use tracing::debug;

/// Keys the gallery reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Maps a key name (as reported by keyboard events) to a [`Key`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            " " | "Space" | "Spacebar" => Self::Space,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    /// Returns true for the keys that activate a focused grid item.
    #[must_use]
    pub fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Messages emitted by gallery controls and input devices.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A grid item was clicked.
    ItemClicked(ItemIndex),
    /// A key was pressed while a grid item had focus.
    ItemKeyPressed { index: ItemIndex, key: Key },
    NextPressed,
    PreviousPressed,
    ClosePressed,
    /// A category filter control was selected.
    CategorySelected(CategoryFilter),
    /// An image filter toggle was selected.
    ImageFilterSelected(ImageFilter),
    /// The viewer backdrop (not its content) was clicked.
    BackdropClicked,
    /// The viewer image itself was clicked.
    ImageClicked,
    /// A key was pressed anywhere in the page.
    KeyPressed(Key),
    /// Touch contacts went down on the viewer image.
    TouchStarted(Vec<TouchPoint>),
    /// The tracked touch contact was lifted.
    TouchEnded(TouchPoint),
    /// Keyboard focus moved to an element outside the viewer.
    FocusLeftViewer,
}

/// Text to announce through the assistive-technology live region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// A new item is displayed.
    Showing {
        caption: String,
        position: usize,
        total: usize,
    },
    /// The viewer opened on the item with this one-based catalog number.
    Opened { number: usize },
    Closed,
    ImageFilterApplied(ImageFilter),
}

impl Announcement {
    /// Returns the i18n message key for this announcement.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Showing { .. } => "announce-showing",
            Self::Opened { .. } => "announce-opened",
            Self::Closed => "announce-closed",
            Self::ImageFilterApplied(ImageFilter::None) => "announce-filter-normal",
            Self::ImageFilterApplied(_) => "announce-filter-applied",
        }
    }

    /// Returns the message arguments for this announcement.
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Showing {
                caption,
                position,
                total,
            } => vec![
                ("caption", caption.clone()),
                ("position", position.to_string()),
                ("total", total.to_string()),
            ],
            Self::Opened { number } => vec![("number", number.to_string())],
            Self::ImageFilterApplied(filter) => vec![("name", filter.name().to_string())],
            Self::Closed => Vec::new(),
        }
    }
}

/// Effects produced by gallery changes, in the order they must be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show this frame in the viewer.
    Render(Frame),
    /// Update active states of the filter controls.
    SyncControls(Controls),
    /// Show or hide the viewer overlay.
    SetViewerVisible(bool),
    /// Move focus to the viewer's close control.
    FocusCloseControl,
    /// Announce a change to assistive technology.
    Announce(Announcement),
}

/// Complete gallery state: catalog navigation, viewer and touch tracking.
#[derive(Debug, Clone)]
pub struct Gallery {
    navigator: GalleryNavigator,
    viewer: ViewerState,
    swipe: SwipeState,
    swipe_threshold: SwipeThreshold,
}

impl Gallery {
    /// Creates a gallery over `catalog` with every item visible and the viewer closed.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            navigator: GalleryNavigator::new(catalog),
            viewer: ViewerState::default(),
            swipe: SwipeState::default(),
            swipe_threshold: SwipeThreshold::default(),
        }
    }

    /// Sets the minimum horizontal travel for swipe navigation.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    #[must_use]
    pub fn navigator(&self) -> &GalleryNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn cursor(&self) -> ItemIndex {
        self.navigator.cursor()
    }

    /// Returns the current active states of the filter controls.
    #[must_use]
    pub fn controls(&self) -> Controls {
        Controls {
            category: self.navigator.filter().clone(),
            image_filter: self.viewer.image_filter(),
        }
    }

    /// Builds the frame for the item under the cursor.
    #[must_use]
    pub fn current_frame(&self) -> Option<Frame> {
        let item = self.navigator.current_item()?;
        Some(Frame {
            index: item.index(),
            image_source: item.image_source().to_owned(),
            alt_text: item.alt_text().to_owned(),
            caption: item.caption().to_owned(),
            indicator: self.navigator.navigation_info().indicator(),
            image_filter: self.viewer.image_filter(),
        })
    }

    /// Handles a gallery message and returns the resulting effects in order.
    pub fn handle_message(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::ItemClicked(index) => self.open(index),
            Message::ItemKeyPressed { index, key } if key.activates() => self.open(index),
            Message::ItemKeyPressed { .. } => Vec::new(),
            Message::NextPressed => self.navigate(Direction::Next),
            Message::PreviousPressed => self.navigate(Direction::Previous),
            Message::ClosePressed => self.close(),
            Message::CategorySelected(filter) => self.set_category(filter),
            Message::ImageFilterSelected(filter) => self.set_image_filter(filter),
            Message::BackdropClicked => {
                if self.viewer.is_open() {
                    self.close()
                } else {
                    Vec::new()
                }
            }
            Message::ImageClicked => {
                if self.viewer.is_open() {
                    self.navigate(Direction::Next)
                } else {
                    Vec::new()
                }
            }
            Message::KeyPressed(key) => self.handle_key(key),
            Message::TouchStarted(touches) => {
                if self.viewer.is_open() {
                    self.swipe.start(&touches);
                }
                Vec::new()
            }
            Message::TouchEnded(point) => match self.swipe.finish(point, self.swipe_threshold) {
                Some(direction) if self.viewer.is_open() => self.navigate(direction),
                _ => Vec::new(),
            },
            Message::FocusLeftViewer => {
                if self.viewer.is_open() {
                    vec![Effect::FocusCloseControl]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Page-level keys only act while the viewer is open.
    fn handle_key(&mut self, key: Key) -> Vec<Effect> {
        if !self.viewer.is_open() {
            return Vec::new();
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowRight => self.navigate(Direction::Next),
            Key::ArrowLeft => self.navigate(Direction::Previous),
            Key::Enter | Key::Space | Key::Other => Vec::new(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Opens the viewer on the item at catalog `index`.
    ///
    /// An index hidden by the active filter opens the first visible item
    /// instead. Out-of-range indexes, or a filter that hides everything,
    /// leave the gallery untouched.
    pub fn open(&mut self, index: ItemIndex) -> Vec<Effect> {
        if !self.navigator.activate(index) {
            debug!(index = index.value(), "ignoring activation of unknown item");
            return Vec::new();
        }
        if self.navigator.ensure_cursor_visible() == CursorCheck::NothingVisible {
            debug!(index = index.value(), "nothing visible, viewer stays closed");
            return Vec::new();
        }

        self.viewer.open();
        let mut effects = Vec::new();
        self.push_render(&mut effects, true);
        effects.push(Effect::SetViewerVisible(true));
        effects.push(Effect::FocusCloseControl);
        effects.push(Effect::Announce(Announcement::Opened {
            number: self.navigator.cursor().number(),
        }));
        debug!(cursor = self.navigator.cursor().value(), "viewer opened");
        effects
    }

    /// Closes the viewer and resets the image filter.
    pub fn close(&mut self) -> Vec<Effect> {
        self.viewer.close();
        self.swipe.cancel();
        debug!("viewer closed");
        vec![
            Effect::SetViewerVisible(false),
            Effect::SyncControls(self.controls()),
            Effect::Announce(Announcement::Closed),
        ]
    }

    /// Steps the cursor. While the viewer is closed the cursor still moves
    /// but nothing is rendered.
    pub fn navigate(&mut self, direction: Direction) -> Vec<Effect> {
        let Some(cursor) = self.navigator.step(direction) else {
            debug!(?direction, "nothing visible, navigation ignored");
            return Vec::new();
        };
        debug!(?direction, cursor = cursor.value(), "navigated");

        let mut effects = Vec::new();
        if self.viewer.is_open() {
            self.push_render(&mut effects, true);
        }
        effects
    }

    /// Applies a category filter and enforces the cursor invariant.
    pub fn set_category(&mut self, filter: CategoryFilter) -> Vec<Effect> {
        let check = self.navigator.set_filter(filter);
        debug!(
            category = self.navigator.filter().label(),
            visible = self.navigator.visible().len(),
            ?check,
            "category filter applied"
        );

        let mut effects = vec![Effect::SyncControls(self.controls())];
        if self.viewer.is_open() {
            match check {
                CursorCheck::NothingVisible => effects.extend(self.close()),
                CursorCheck::Valid | CursorCheck::Repaired(_) => {
                    self.push_render(&mut effects, true);
                }
            }
        }
        effects
    }

    /// Applies an image filter to the viewer image.
    pub fn set_image_filter(&mut self, filter: ImageFilter) -> Vec<Effect> {
        self.viewer.set_image_filter(filter);

        let mut effects = Vec::new();
        if self.viewer.is_open() {
            self.push_render(&mut effects, false);
        }
        effects.push(Effect::SyncControls(self.controls()));
        effects.push(Effect::Announce(Announcement::ImageFilterApplied(filter)));
        effects
    }

    fn push_render(&self, effects: &mut Vec<Effect>, announce: bool) {
        let Some(frame) = self.current_frame() else {
            return;
        };
        if announce {
            effects.push(Effect::Render(frame.clone()));
            effects.push(Effect::Announce(Announcement::Showing {
                caption: frame.caption,
                position: frame.indicator.position,
                total: frame.indicator.total,
            }));
        } else {
            effects.push(Effect::Render(frame));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ItemRecord;

    fn gallery(categories: &[&str]) -> Gallery {
        Gallery::new(Catalog::from_records(
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| ItemRecord::new(*c, format!("img-{i}.jpg")).with_alt(format!("Item {i}"))),
        ))
    }

    fn idx(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn rendered(effects: &[Effect]) -> Option<&Frame> {
        effects.iter().find_map(|e| match e {
            Effect::Render(frame) => Some(frame),
            _ => None,
        })
    }

    #[test]
    fn scenario_filter_open_and_wrap() {
        let mut g = gallery(&["A", "B", "A", "C", "A"]);
        g.handle_message(Message::CategorySelected(CategoryFilter::parse("A")));
        let visible: Vec<usize> = g.navigator().visible().as_slice().iter().map(|i| i.value()).collect();
        assert_eq!(visible, vec![0, 2, 4]);

        let effects = g.handle_message(Message::ItemClicked(idx(2)));
        assert_eq!(g.cursor(), idx(2));
        assert_eq!(rendered(&effects).unwrap().indicator.to_string(), "2 / 3");

        let effects = g.handle_message(Message::NextPressed);
        assert_eq!(g.cursor(), idx(4));
        assert_eq!(rendered(&effects).unwrap().indicator.to_string(), "3 / 3");

        let effects = g.handle_message(Message::NextPressed);
        assert_eq!(g.cursor(), idx(0));
        assert_eq!(rendered(&effects).unwrap().indicator.to_string(), "1 / 3");
    }

    #[test]
    fn scenario_filter_change_repairs_cursor() {
        let mut g = gallery(&["A", "B", "A", "C", "A"]);
        g.set_category(CategoryFilter::parse("A"));
        g.open(idx(4));
        let effects = g.set_category(CategoryFilter::parse("B"));
        assert_eq!(g.cursor(), idx(1));
        assert!(g.is_open());
        assert_eq!(rendered(&effects).unwrap().index, idx(1));
    }

    #[test]
    fn scenario_empty_filter_closes_viewer() {
        let mut g = gallery(&["A", "B", "A", "C", "A"]);
        g.open(idx(0));
        let effects = g.set_category(CategoryFilter::parse("Z"));
        assert!(!g.is_open());
        assert!(effects.contains(&Effect::SetViewerVisible(false)));
        assert!(effects.contains(&Effect::Announce(Announcement::Closed)));

        let cursor = g.cursor();
        assert!(g.handle_message(Message::NextPressed).is_empty());
        assert!(g.handle_message(Message::PreviousPressed).is_empty());
        assert_eq!(g.cursor(), cursor);
    }

    #[test]
    fn open_emits_effects_in_order() {
        let mut g = gallery(&["A", "B"]);
        let effects = g.open(idx(1));
        assert!(matches!(effects[0], Effect::Render(_)));
        assert!(matches!(effects[1], Effect::Announce(Announcement::Showing { .. })));
        assert_eq!(effects[2], Effect::SetViewerVisible(true));
        assert_eq!(effects[3], Effect::FocusCloseControl);
        assert_eq!(
            effects[4],
            Effect::Announce(Announcement::Opened { number: 2 })
        );
    }

    #[test]
    fn close_on_closed_viewer_only_repeats_announcement() {
        let mut g = gallery(&["A", "B", "A"]);
        g.set_category(CategoryFilter::parse("A"));
        g.open(idx(2));
        g.set_image_filter(ImageFilter::parse("sepia"));
        let first = g.close();
        let cursor = g.cursor();
        let controls = g.controls();

        let second = g.close();
        assert_eq!(second, first);
        assert!(second.contains(&Effect::Announce(Announcement::Closed)));
        assert!(!g.is_open());
        assert_eq!(g.cursor(), cursor);
        assert_eq!(g.controls(), controls);
        assert_eq!(g.viewer().image_filter(), ImageFilter::None);
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut g = gallery(&["A"]);
        assert!(g.open(idx(5)).is_empty());
        assert!(!g.is_open());
    }

    #[test]
    fn open_hidden_item_shows_first_visible() {
        let mut g = gallery(&["A", "B", "A"]);
        g.set_category(CategoryFilter::parse("A"));
        let effects = g.open(idx(1));
        assert_eq!(g.cursor(), idx(0));
        assert_eq!(
            effects.last(),
            Some(&Effect::Announce(Announcement::Opened { number: 1 }))
        );
    }

    #[test]
    fn open_with_nothing_visible_stays_closed() {
        let mut g = gallery(&["A"]);
        g.set_category(CategoryFilter::parse("Z"));
        assert!(g.open(idx(0)).is_empty());
        assert!(!g.is_open());
    }

    #[test]
    fn image_filter_survives_navigation_and_resets_on_close() {
        let mut g = gallery(&["A", "A", "A"]);
        g.open(idx(0));
        g.handle_message(Message::ImageFilterSelected(ImageFilter::Sepia));

        let effects = g.handle_message(Message::NextPressed);
        assert_eq!(rendered(&effects).unwrap().image_filter, ImageFilter::Sepia);
        let effects = g.handle_message(Message::PreviousPressed);
        assert_eq!(rendered(&effects).unwrap().image_filter, ImageFilter::Sepia);

        g.handle_message(Message::ClosePressed);
        assert_eq!(g.viewer().image_filter(), ImageFilter::None);
    }

    #[test]
    fn image_filter_announcements() {
        let mut g = gallery(&["A"]);
        let effects = g.set_image_filter(ImageFilter::HighContrast);
        assert_eq!(
            effects.last(),
            Some(&Effect::Announce(Announcement::ImageFilterApplied(ImageFilter::HighContrast)))
        );
        assert_eq!(
            Announcement::ImageFilterApplied(ImageFilter::None).i18n_key(),
            "announce-filter-normal"
        );
    }

    #[test]
    fn escape_and_backdrop_only_close_when_open() {
        let mut g = gallery(&["A", "B"]);
        assert!(g.handle_message(Message::KeyPressed(Key::Escape)).is_empty());
        assert!(g.handle_message(Message::BackdropClicked).is_empty());

        g.open(idx(0));
        g.handle_message(Message::KeyPressed(Key::Escape));
        assert!(!g.is_open());

        g.open(idx(0));
        g.handle_message(Message::BackdropClicked);
        assert!(!g.is_open());
    }

    #[test]
    fn arrow_keys_navigate_only_when_open() {
        let mut g = gallery(&["A", "B", "C"]);
        assert!(g.handle_message(Message::KeyPressed(Key::ArrowRight)).is_empty());
        assert_eq!(g.cursor(), idx(0));

        g.open(idx(0));
        g.handle_message(Message::KeyPressed(Key::ArrowRight));
        assert_eq!(g.cursor(), idx(1));
        g.handle_message(Message::KeyPressed(Key::ArrowLeft));
        g.handle_message(Message::KeyPressed(Key::ArrowLeft));
        assert_eq!(g.cursor(), idx(2));
    }

    #[test]
    fn item_activation_keys() {
        let mut g = gallery(&["A", "B"]);
        assert!(g
            .handle_message(Message::ItemKeyPressed { index: idx(1), key: Key::Other })
            .is_empty());
        g.handle_message(Message::ItemKeyPressed { index: idx(1), key: Key::Space });
        assert!(g.is_open());
        assert_eq!(g.cursor(), idx(1));
    }

    #[test]
    fn swipe_left_goes_next() {
        let mut g = gallery(&["A", "B", "C"]);
        g.open(idx(0));
        g.handle_message(Message::TouchStarted(vec![TouchPoint::new(300.0, 200.0)]));
        g.handle_message(Message::TouchEnded(TouchPoint::new(200.0, 210.0)));
        assert_eq!(g.cursor(), idx(1));
    }

    #[test]
    fn swipe_is_ignored_when_closed() {
        let mut g = gallery(&["A", "B", "C"]);
        g.handle_message(Message::TouchStarted(vec![TouchPoint::new(300.0, 200.0)]));
        assert!(g
            .handle_message(Message::TouchEnded(TouchPoint::new(100.0, 200.0)))
            .is_empty());
        assert_eq!(g.cursor(), idx(0));
    }

    #[test]
    fn image_click_advances() {
        let mut g = gallery(&["A", "B"]);
        g.open(idx(1));
        g.handle_message(Message::ImageClicked);
        assert_eq!(g.cursor(), idx(0));
    }

    #[test]
    fn focus_trap_only_when_open() {
        let mut g = gallery(&["A"]);
        assert!(g.handle_message(Message::FocusLeftViewer).is_empty());
        g.open(idx(0));
        assert_eq!(
            g.handle_message(Message::FocusLeftViewer),
            vec![Effect::FocusCloseControl]
        );
    }

    #[test]
    fn filter_change_while_closed_repairs_silently() {
        let mut g = gallery(&["A", "B", "A"]);
        g.navigate(Direction::Next);
        assert_eq!(g.cursor(), idx(1));
        let effects = g.set_category(CategoryFilter::parse("A"));
        assert_eq!(g.cursor(), idx(0));
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::SyncControls(_)));
    }

    #[test]
    fn key_names() {
        assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("Tab"), Key::Other);
    }
}
