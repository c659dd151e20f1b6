pub mod autoplay;
pub mod file_manager;
pub mod fullscreen;
pub mod gallery;
pub mod image_cache;
pub mod image_format;
pub mod image_loader;
pub mod item;
pub mod keyboard;
pub mod navigation;
pub mod preload_manager;
pub mod swipe;
pub mod transition;
