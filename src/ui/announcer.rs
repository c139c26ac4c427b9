// SPDX-License-Identifier: MPL-2.0
//! Debounced assistive-technology announcements.
//!
//! Screen readers only re-read a live region when its content changes, so each
//! announcement first clears the region and the text is written after a short
//! delay. Scheduling a new announcement before the delay elapses replaces the
//! pending text: only the latest one is ever spoken.

use crate::domain::ui::AnnounceDelay;
use std::time::Instant;

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    due: Instant,
}

/// Holds at most one pending announcement.
#[derive(Debug, Clone, Default)]
pub struct Announcer {
    delay: AnnounceDelay,
    pending: Option<Pending>,
}

impl Announcer {
    #[must_use]
    pub fn new(delay: AnnounceDelay) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `text` to be released `delay` after `now`, replacing any
    /// pending announcement.
    pub fn schedule(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            text: text.into(),
            due: now + self.delay.as_duration(),
        });
    }

    /// Releases the pending text once its due time has been reached.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.text),
            _ => None,
        }
    }

    /// Releases the pending text regardless of its due time.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.text)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
