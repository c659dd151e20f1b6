use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::ColorImage;
use thiserror::Error;

use crate::config::config::{MAX_DECODE_HEIGHT, MAX_DECODE_WIDTH, THUMBNAIL_DECODE_SIZE};
use crate::core::image_format::ImageFormat;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("unsupported image source: {0}")]
    UnsupportedSource(String),
}

/// Which surface an image is decoded for; thumbnails decode smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Slide,
    Thumbnail,
}

impl ImageKind {
    fn bounds(self) -> (u32, u32) {
        match self {
            ImageKind::Slide => (MAX_DECODE_WIDTH, MAX_DECODE_HEIGHT),
            ImageKind::Thumbnail => (THUMBNAIL_DECODE_SIZE, THUMBNAIL_DECODE_SIZE),
        }
    }
}

/// One decode job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRequest {
    pub kind: ImageKind,
    pub source: String,
}

impl ImageRequest {
    pub fn new(kind: ImageKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

/// Local path behind a source string, if it names one.
pub fn local_path(source: &str) -> Option<PathBuf> {
    if let Some(rest) = source.strip_prefix("file://") {
        return Some(PathBuf::from(rest));
    }
    if source.contains("://") {
        return None;
    }
    Some(PathBuf::from(source))
}

/// Anchors a relative local source at `base`. URIs and absolute paths
/// pass through.
pub fn resolve_source(source: &str, base: &Path) -> String {
    if source.is_empty() || source.contains("://") || Path::new(source).is_absolute() {
        return source.to_string();
    }
    base.join(source).to_string_lossy().into_owned()
}

pub trait ImageLoader: Send + Sync {
    fn load(&self, request: &ImageRequest) -> Result<ColorImage, LoadError>;
    fn supports(&self, source: &str) -> bool;
}

/// Decodes local raster files, downscaling to the surface bounds.
pub struct RasterImageLoader;

impl ImageLoader for RasterImageLoader {
    fn load(&self, request: &ImageRequest) -> Result<ColorImage, LoadError> {
        use image::ImageReader;

        let path = local_path(&request.source)
            .ok_or_else(|| LoadError::UnsupportedSource(request.source.clone()))?;

        let mut reader = ImageReader::open(&path)?;
        match ImageFormat::from_path(&path) {
            Some(format) => reader.set_format(format.to_image_format()),
            None => {
                reader = reader.with_guessed_format()?;
                if reader.format().is_none() {
                    return Err(LoadError::UnsupportedFormat(request.source.clone()));
                }
            }
        }

        let img = reader
            .decode()
            .map_err(|e| LoadError::Decode(e.to_string()))?;

        let (max_w, max_h) = request.kind.bounds();
        let img = if img.width() > max_w || img.height() > max_h {
            img.resize(max_w, max_h, image::imageops::FilterType::Triangle)
        } else {
            img
        };

        let rgba = img.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
    }

    fn supports(&self, source: &str) -> bool {
        local_path(source).is_some()
    }
}

/// Picks the first loader that accepts a source.
#[derive(Clone)]
pub struct ImageLoaderFactory {
    loaders: Arc<Vec<Box<dyn ImageLoader>>>,
}

impl Default for ImageLoaderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoaderFactory {
    pub fn new() -> Self {
        Self::with_loaders(vec![Box::new(RasterImageLoader)])
    }

    pub fn with_loaders(loaders: Vec<Box<dyn ImageLoader>>) -> Self {
        Self {
            loaders: Arc::new(loaders),
        }
    }

    pub fn load(&self, request: &ImageRequest) -> Result<ColorImage, LoadError> {
        self.loaders
            .iter()
            .find(|loader| loader.supports(&request.source))
            .ok_or_else(|| LoadError::UnsupportedSource(request.source.clone()))?
            .load(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_sources_are_not_local() {
        assert!(local_path("https://example.com/a.jpg").is_none());
        assert_eq!(
            local_path("file:///tmp/a.jpg"),
            Some(PathBuf::from("/tmp/a.jpg"))
        );
        assert_eq!(local_path("a.jpg"), Some(PathBuf::from("a.jpg")));
    }

    #[test]
    fn resolves_only_relative_paths() {
        let base = Path::new("/gallery");
        assert_eq!(resolve_source("a.jpg", base), "/gallery/a.jpg");
        assert_eq!(resolve_source("/abs/a.jpg", base), "/abs/a.jpg");
        assert_eq!(
            resolve_source("http://host/a.jpg", base),
            "http://host/a.jpg"
        );
    }

    #[test]
    fn remote_request_fails_without_fetching() {
        let factory = ImageLoaderFactory::new();
        let err = factory
            .load(&ImageRequest::new(ImageKind::Slide, "https://host/a.jpg"))
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedSource(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let factory = ImageLoaderFactory::new();
        let err = factory
            .load(&ImageRequest::new(ImageKind::Slide, "/definitely/missing.png"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn decodes_and_bounds_thumbnails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbaImage::from_pixel(600, 300, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let factory = ImageLoaderFactory::new();
        let source = path.to_string_lossy().into_owned();
        let thumb = factory
            .load(&ImageRequest::new(ImageKind::Thumbnail, source.clone()))
            .unwrap();
        assert_eq!(thumb.size, [256, 128]);
        let slide = factory
            .load(&ImageRequest::new(ImageKind::Slide, source))
            .unwrap();
        assert_eq!(slide.size, [600, 300]);
    }
}
