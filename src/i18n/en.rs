pub const BTN_OPEN: &str = "Open folder";
pub const BTN_ABOUT: &str = "About";
pub const BTN_CLOSE: &str = "Close";

pub const LABEL_PREVIOUS_SLIDE: &str = "Previous Slide";
pub const LABEL_NEXT_SLIDE: &str = "Next Slide";
pub const LABEL_GO_TO_SLIDE: &str = "Go to Slide";
pub const LABEL_PLAY_PAUSE: &str = "Play or Pause Slideshow";
pub const LABEL_OPEN_FULLSCREEN: &str = "Open Fullscreen";
pub const LABEL_EXIT_FULLSCREEN: &str = "Exit Fullscreen";
pub const LABEL_THUMBNAIL: &str = "Go to Slide";

pub const TEXT_EMPTY_GALLERY: &str = "No images to show";
pub const TEXT_OPEN_HINT: &str = "Open a folder of images to start";
pub const TEXT_KEYS_HINT: &str = "Arrow keys or swipe to navigate, F11 for fullscreen";
pub const TEXT_LOADING: &str = "Loading...";
pub const TEXT_BROKEN_IMAGE: &str = "Image unavailable";
pub const TEXT_LICENSE: &str = "License: MIT";
pub const TEXT_ABOUT: &str = "A carousel gallery with thumbnails, autoplay and fullscreen.";
