use std::path::PathBuf;

use thiserror::Error;

/// Library error type for gallery setup and configuration.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML gallery file could not be parsed.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Options parsed but hold values the gallery cannot run with.
    #[error("invalid gallery configuration: {0}")]
    InvalidConfig(String),

    /// A scanned directory held no supported images.
    #[error("no images found in {}", .0.display())]
    EmptyDirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
