// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a filterable image gallery with a lightbox viewer.
//!
//! The gallery keeps an ordered catalog of captioned images, a category
//! filter, a navigation cursor that always points at a visible item, and a
//! viewer overlay with per-image visual filters. Rendering is delegated to a
//! [`Presenter`](application::port::Presenter) implementation; the crate ships
//! a line-driven command shell as its own presenter.

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.1.0")]

pub mod app;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
