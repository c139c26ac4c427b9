// SPDX-License-Identifier: MPL-2.0
//! TOML catalog files.
//!
//! A catalog file lists items in display order:
//!
//! ```toml
//! [[item]]
//! category = "nature"
//! image_source = "images/forest.jpg"
//! alt_text = "Forest"
//! caption_text = "Morning fog"
//! ```
//!
//! `alt_text` and `caption_text` may be omitted.

use crate::domain::gallery::{Catalog, ItemRecord};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "item", default)]
    items: Vec<ItemEntry>,
}

#[derive(Debug, Deserialize)]
struct ItemEntry {
    category: String,
    image_source: String,
    #[serde(default)]
    alt_text: String,
    #[serde(default)]
    caption_text: String,
}

impl From<ItemEntry> for ItemRecord {
    fn from(entry: ItemEntry) -> Self {
        ItemRecord::new(entry.category, entry.image_source)
            .with_alt(entry.alt_text)
            .with_caption(entry.caption_text)
    }
}

/// Parses catalog file content.
pub fn parse(content: &str) -> Result<Catalog> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
    Ok(Catalog::from_records(
        file.items.into_iter().map(ItemRecord::from),
    ))
}

/// Reads and parses the catalog file at `path`.
pub fn load(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog = parse(&content)?;
    tracing::info!(
        path = %path.display(),
        items = catalog.len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );
    Ok(catalog)
}
