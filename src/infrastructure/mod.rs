// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters for external data sources.
//!
//! - [`catalog_file`]: TOML catalog files loaded into a [`Catalog`](crate::domain::gallery::Catalog)

pub mod catalog_file;
