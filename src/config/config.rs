use std::time::Duration;

pub const APP_NAME: &str = "Image Gallery";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_millis(3000);
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(450);
pub const DEFAULT_INDEX_SEPARATOR: &str = " / ";

/// Percentage of the gallery width a drag must cover to change slides.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 30.0;
/// Release velocity, in points per millisecond, that counts as a flick.
pub const DEFAULT_FLICK_THRESHOLD: f32 = 0.4;
/// Distance in points before a drag commits to an axis.
pub const SWIPE_DEAD_ZONE: f32 = 10.0;

pub const THUMBNAIL_HOVER_DELAY: Duration = Duration::from_millis(300);

pub const DEFAULT_CACHE_SIZE: usize = 16;
/// Slides kept decoded at minimum: the current one and both neighbours.
pub const MIN_SLIDE_CACHE: usize = 3;
/// Frames to wait for the viewport to confirm a fullscreen command before
/// taking its reported state as final.
pub const NATIVE_CONFIRM_FRAMES: u32 = 30;
pub const MAX_DECODE_WIDTH: u32 = 1920;
pub const MAX_DECODE_HEIGHT: u32 = 1080;
pub const THUMBNAIL_DECODE_SIZE: u32 = 256;

pub const THUMBNAIL_SIZE: f32 = 92.0;
pub const BULLET_RADIUS: f32 = 5.0;
pub const NAV_ICON_SIZE: f32 = 48.0;
pub const CONTROL_ICON_SIZE: f32 = 28.0;
