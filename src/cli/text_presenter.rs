// SPDX-License-Identifier: MPL-2.0
//! Presenter that records output as text lines for the shell.

use crate::application::port::{Controls, Frame, Presenter};
use crate::domain::ui::ThemeFlag;

/// Buffers one line per presenter call until [`TextPresenter::take_lines`].
#[derive(Debug, Default)]
pub struct TextPresenter {
    lines: Vec<String>,
}

impl TextPresenter {
    /// Returns and clears the buffered lines.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Presenter for TextPresenter {
    fn render(&mut self, frame: &Frame) {
        self.lines.push(format!(
            "show #{} {} \"{}\" [{}] filter={}",
            frame.index, frame.image_source, frame.caption, frame.indicator, frame.image_filter
        ));
    }

    fn sync_controls(&mut self, controls: &Controls) {
        self.lines.push(format!(
            "controls category={} image={}",
            controls.category.label(),
            controls.image_filter
        ));
    }

    fn set_viewer_visible(&mut self, visible: bool) {
        self.lines.push(
            if visible {
                "viewer open"
            } else {
                "viewer closed"
            }
            .to_string(),
        );
    }

    fn focus_close_control(&mut self) {
        self.lines.push("focus close".to_string());
    }

    fn set_live_region(&mut self, text: &str) {
        // Clears are not worth a line
        if !text.is_empty() {
            self.lines.push(format!("live: {text}"));
        }
    }

    fn apply_theme(&mut self, theme: ThemeFlag, toggle_label: &str) {
        self.lines
            .push(format!("theme {} ({toggle_label})", theme.name()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_lines_drains_buffer() {
        let mut presenter = TextPresenter::default();
        presenter.set_viewer_visible(true);
        presenter.set_live_region("");
        presenter.set_live_region("Closed preview");
        assert_eq!(
            presenter.take_lines(),
            vec!["viewer open".to_string(), "live: Closed preview".to_string()]
        );
        assert!(presenter.take_lines().is_empty());
    }
}
