//! Gallery configuration: compile-time defaults plus the TOML gallery file.
//!
//! A gallery file carries a `[gallery]` table of [`GalleryOptions`] and an
//! optional list of `[[items]]`:
//!
//! ```toml
//! [gallery]
//! infinite = false
//! slide-interval = "5s"
//! show-bullets = true
//!
//! [[items]]
//! original = "photos/a.jpg"
//! thumbnail = "photos/thumbs/a.jpg"
//! description = "Harbour at dawn"
//! ```
//!
//! Relative item sources resolve against the directory holding the file.

#[allow(clippy::module_inception)]
pub mod config;
pub mod options;

pub use options::{GalleryOptions, ThumbnailPosition};

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::item::GalleryItem;
use crate::error::Result;

/// Contents of a gallery TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryFile {
    pub gallery: GalleryOptions,
    pub items: Vec<GalleryItem>,
}

impl GalleryFile {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: GalleryFile = toml::from_str(raw)?;
        file.gallery.validate()?;
        Ok(file)
    }

    /// Rewrites relative local sources so they resolve against `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for item in &mut self.items {
            item.resolve_relative_to(base);
        }
        if let Some(error_image) = self.gallery.error_image.as_mut() {
            *error_image = crate::core::image_loader::resolve_source(error_image, base);
        }
    }
}

/// Loads and validates a gallery file from disk.
pub fn load_from_path(path: &Path) -> Result<GalleryFile> {
    let raw = fs::read_to_string(path)?;
    let mut file = GalleryFile::from_toml_str(&raw)?;
    if let Some(base) = path.parent() {
        file.resolve_relative_to(base);
    }
    debug!(
        path = %path.display(),
        items = file.items.len(),
        "loaded gallery file"
    );
    Ok(file)
}

/// Loads only the `[gallery]` table, ignoring any items.
pub fn load_options(path: &Path) -> Result<GalleryOptions> {
    Ok(load_from_path(path)?.gallery)
}
