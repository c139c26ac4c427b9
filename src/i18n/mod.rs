// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization using the Fluent localization system:
//! announcement texts and the theme toggle label come from embedded `.ftl`
//! files.
//!
//! # Features
//!
//! - Locale selection from CLI, config, or system settings
//! - Fallback to `en-US` when no preferred locale is available
//! - Missing keys render as `MISSING: <key>` instead of failing

pub mod fluent;

pub use fluent::I18n;
