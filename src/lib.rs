//! Carousel image gallery for egui.
//!
//! The state machine lives in [`core::gallery::GalleryState`] and is driven
//! by [`ui::ImageGallery`], an egui widget that draws slides, thumbnails,
//! bullets and controls and feeds pointer, keyboard and viewport input back
//! in.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod ui;

pub use config::{GalleryFile, GalleryOptions, ThumbnailPosition};
pub use crate::core::gallery::{GalleryCallbacks, GalleryState};
pub use crate::core::item::GalleryItem;
pub use error::{GalleryError, Result};
pub use ui::ImageGallery;
