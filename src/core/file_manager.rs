use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::image_format::ImageFormat;
use crate::core::item::GalleryItem;
use crate::error::{GalleryError, Result};

pub struct FileManager;

impl FileManager {
    pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut image_paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && ImageFormat::is_supported(p))
            .collect();

        image_paths.sort();
        Ok(image_paths)
    }

    pub fn find_index_of_file(paths: &[PathBuf], target: &Path) -> Option<usize> {
        paths.iter().position(|p| p == target)
    }

    pub fn supported_file_filter() -> (&'static str, Vec<&'static str>) {
        ("Image", ImageFormat::supported_extensions())
    }

    /// Builds gallery items from an image file (its folder, starting at the
    /// file) or from a folder (starting at the first image).
    pub fn items_for_path(path: &Path) -> Result<(Vec<GalleryItem>, usize)> {
        let (dir, selected) = if path.is_dir() {
            (path.to_path_buf(), None)
        } else {
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            (parent.to_path_buf(), Some(path))
        };

        let paths = Self::scan_directory(&dir)?;
        if paths.is_empty() {
            return Err(GalleryError::EmptyDirectory(dir));
        }
        let start = selected
            .and_then(|target| Self::find_index_of_file(&paths, target))
            .unwrap_or(0);
        info!(dir = %dir.display(), count = paths.len(), start, "scanned images");

        let items = paths
            .iter()
            .map(|p| {
                let mut item = GalleryItem::new(p.to_string_lossy());
                item.original_title = p.file_name().map(|n| n.to_string_lossy().into_owned());
                item
            })
            .collect();
        Ok((items, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_sorted_supported_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt", "c.WEBP"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let paths = FileManager::scan_directory(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.WEBP"]);
    }

    #[test]
    fn file_path_starts_at_that_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let (items, start) = FileManager::items_for_path(&dir.path().join("b.jpg")).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(start, 1);
        assert_eq!(items[1].original_title.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileManager::items_for_path(dir.path()).unwrap_err();
        assert!(matches!(err, GalleryError::EmptyDirectory(_)));
    }
}
