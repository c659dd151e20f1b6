use std::fs;
use std::time::Duration;

use image_gallery::config::{self, GalleryFile};
use image_gallery::{GalleryError, ThumbnailPosition};

#[test]
fn parse_kebab_case_gallery_file() {
    let file = GalleryFile::from_toml_str(
        r#"
[gallery]
infinite = false
show-bullets = true
thumbnail-position = "left"
slide-interval = "5s"
slide-duration = "250ms"

[[items]]
original = "a.jpg"
description = "First"

[[items]]
original = "b.jpg"
thumbnail = "thumbs/b.jpg"
"#,
    )
    .unwrap();
    assert!(!file.gallery.infinite);
    assert!(file.gallery.show_bullets);
    assert_eq!(file.gallery.thumbnail_position, ThumbnailPosition::Left);
    assert_eq!(file.gallery.slide_interval, Duration::from_secs(5));
    assert_eq!(file.gallery.slide_duration, Duration::from_millis(250));
    assert_eq!(file.items.len(), 2);
    assert_eq!(file.items[0].description.as_deref(), Some("First"));
    assert_eq!(file.items[1].thumbnail_source(), "thumbs/b.jpg");
}

#[test]
fn missing_table_uses_defaults() {
    let file = GalleryFile::from_toml_str("").unwrap();
    assert!(file.gallery.infinite);
    assert!(file.items.is_empty());
}

#[test]
fn invalid_values_are_rejected() {
    let err = GalleryFile::from_toml_str(
        r#"
[gallery]
swipe-threshold = 0.0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, GalleryError::InvalidConfig(_)));

    let err = GalleryFile::from_toml_str("[gallery]\ninfinite = 3\n").unwrap_err();
    assert!(matches!(err, GalleryError::Toml(_)));
}

#[test]
fn relative_sources_resolve_against_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.toml");
    fs::write(
        &path,
        r#"
[gallery]
error-image = "broken.png"

[[items]]
original = "photos/a.jpg"

[[items]]
original = "https://example.com/b.jpg"
"#,
    )
    .unwrap();

    let file = config::load_from_path(&path).unwrap();
    let expected = dir.path().join("photos/a.jpg");
    assert_eq!(file.items[0].original, expected.to_string_lossy());
    assert_eq!(file.items[1].original, "https://example.com/b.jpg");
    let broken = dir.path().join("broken.png").to_string_lossy().into_owned();
    assert_eq!(file.gallery.error_image.as_deref(), Some(broken.as_str()));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = config::load_from_path(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, GalleryError::Io(_)));
}
