use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::*;
use crate::error::{GalleryError, Result};
use crate::ui::style::GalleryStyle;

/// Where the thumbnail strip sits relative to the slides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThumbnailPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

impl ThumbnailPosition {
    pub fn is_vertical(self) -> bool {
        matches!(self, ThumbnailPosition::Left | ThumbnailPosition::Right)
    }
}

/// Behaviour and presentation switches for one gallery instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GalleryOptions {
    /// Wrap past the first and last slide.
    pub infinite: bool,
    /// Only decode slides once they have been near the current one.
    pub lazy_load: bool,
    pub show_nav: bool,
    pub show_thumbnails: bool,
    pub thumbnail_position: ThumbnailPosition,
    pub show_fullscreen_button: bool,
    /// Use the viewport fullscreen mode; the in-window overlay is used otherwise.
    pub use_native_fullscreen: bool,
    pub show_play_button: bool,
    pub show_bullets: bool,
    pub show_index: bool,
    pub is_rtl: bool,
    pub autoplay: bool,
    pub disable_thumbnail_scroll: bool,
    pub disable_keyboard: bool,
    pub disable_swipe: bool,
    pub disable_thumbnail_swipe: bool,
    pub slide_on_thumbnail_over: bool,
    /// Source swapped in when an image fails to load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_image: Option<String>,
    pub index_separator: String,
    #[serde(with = "humantime_serde")]
    pub slide_duration: Duration,
    #[serde(with = "humantime_serde")]
    pub slide_interval: Duration,
    /// Percent of the gallery width.
    pub swipe_threshold: f32,
    /// Points per millisecond.
    pub flick_threshold: f32,
    pub start_index: usize,
    /// Number of decoded textures kept alive.
    pub cache_size: usize,
    pub style: GalleryStyle,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            infinite: true,
            lazy_load: false,
            show_nav: true,
            show_thumbnails: true,
            thumbnail_position: ThumbnailPosition::default(),
            show_fullscreen_button: true,
            use_native_fullscreen: true,
            show_play_button: true,
            show_bullets: false,
            show_index: false,
            is_rtl: false,
            autoplay: false,
            disable_thumbnail_scroll: false,
            disable_keyboard: false,
            disable_swipe: false,
            disable_thumbnail_swipe: false,
            slide_on_thumbnail_over: false,
            error_image: None,
            index_separator: DEFAULT_INDEX_SEPARATOR.to_string(),
            slide_duration: DEFAULT_SLIDE_DURATION,
            slide_interval: DEFAULT_SLIDE_INTERVAL,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            flick_threshold: DEFAULT_FLICK_THRESHOLD,
            start_index: 0,
            cache_size: DEFAULT_CACHE_SIZE,
            style: GalleryStyle::default(),
        }
    }
}

impl GalleryOptions {
    /// Rejects values that would make navigation or autoplay misbehave.
    pub fn validate(&self) -> Result<()> {
        if !(self.swipe_threshold > 0.0 && self.swipe_threshold <= 100.0) {
            return Err(GalleryError::InvalidConfig(format!(
                "swipe-threshold must be within (0, 100], got {}",
                self.swipe_threshold
            )));
        }
        if self.flick_threshold.is_nan() || self.flick_threshold < 0.0 {
            return Err(GalleryError::InvalidConfig(format!(
                "flick-threshold must not be negative, got {}",
                self.flick_threshold
            )));
        }
        if self.slide_interval.is_zero() {
            return Err(GalleryError::InvalidConfig(
                "slide-interval must be greater than zero".to_string(),
            ));
        }
        if self.cache_size == 0 {
            return Err(GalleryError::InvalidConfig(
                "cache-size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Autoplay period: a tick never outruns the slide animation.
    pub fn autoplay_period(&self) -> Duration {
        self.slide_interval.max(self.slide_duration)
    }
}
