// SPDX-License-Identifier: MPL-2.0
//! User interface state: the gallery component, gesture tracking, theming and
//! live-region announcements.

pub mod announcer;
pub mod state;
pub mod theming;
pub mod viewer;
