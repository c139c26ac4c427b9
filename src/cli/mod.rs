// SPDX-License-Identifier: MPL-2.0
//! Line-driven command shell around [`App`](crate::app::App).
//!
//! - [`args`]: command-line flags
//! - [`command`]: one shell command per input line
//! - [`text_presenter`]: a [`Presenter`](crate::application::port::Presenter)
//!   that prints presenter calls as text lines

pub mod args;
pub mod command;
pub mod text_presenter;

pub use args::{Args, ArgsError};
pub use command::{Command, CommandError};
pub use text_presenter::TextPresenter;
