pub mod bullets;
pub mod controls;
pub mod gallery_view;
pub mod icons;
pub mod image_store;
pub mod slides;
pub mod style;
pub mod thumbnails;
pub mod viewer;

pub use gallery_view::ImageGallery;
