// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that presentation adapters implement.
//!
//! # Available Ports
//!
//! - [`presenter`]: Rendering, focus, live-region and theme output
//!
//! # Design Notes
//!
//! - Ports carry plain data snapshots, never rendering handles
//! - Port methods are infallible: the gallery has no failure to report
//!
//! # Example
//!
//! ```ignore
//! use gallery_lens::application::port::{Frame, Presenter};
//!
//! struct Log(Vec<String>);
//! impl Presenter for Log {
//!     fn render(&mut self, frame: &Frame) {
//!         self.0.push(format!("{} {}", frame.image_source, frame.indicator));
//!     }
//!     // ...
//! }
//! ```

pub mod presenter;

// Re-export main types for convenience
pub use presenter::{Controls, Frame, Presenter};
