use tracing::debug;

use crate::config::config::NATIVE_CONFIRM_FRAMES;

/// How the gallery goes fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenMode {
    /// The viewport itself switches to fullscreen.
    Native,
    /// An overlay covering the window stands in for fullscreen.
    Modal,
}

/// Viewport command sent and not yet reflected in the reported state.
#[derive(Debug, Clone, Copy)]
struct Awaiting {
    target: bool,
    misses: u32,
}

/// Fullscreen flag, mirrored from the viewport when native fullscreen is
/// in use and tracked locally otherwise.
#[derive(Debug)]
pub struct FullscreenController {
    use_native: bool,
    native_supported: bool,
    is_fullscreen: bool,
    modal: bool,
    last_reported: Option<bool>,
    pending_native: Option<bool>,
    awaiting: Option<Awaiting>,
}

impl FullscreenController {
    pub fn new(use_native: bool) -> Self {
        Self {
            use_native,
            native_supported: true,
            is_fullscreen: false,
            modal: false,
            last_reported: None,
            pending_native: None,
            awaiting: None,
        }
    }

    /// Records whether the viewport can report and change its fullscreen
    /// state. Unsupported viewports fall back to the modal overlay.
    pub fn set_native_supported(&mut self, supported: bool) {
        if self.native_supported != supported {
            debug!(supported, "native fullscreen support changed");
        }
        self.native_supported = supported;
    }

    pub fn set_use_native(&mut self, use_native: bool) {
        self.use_native = use_native;
    }

    pub fn mode(&self) -> FullscreenMode {
        if self.use_native && self.native_supported {
            FullscreenMode::Native
        } else {
            FullscreenMode::Modal
        }
    }

    /// Returns true when the state changed.
    pub fn enter(&mut self) -> bool {
        if self.is_fullscreen {
            return false;
        }
        match self.mode() {
            FullscreenMode::Native => self.request_native(true),
            FullscreenMode::Modal => self.modal = true,
        }
        self.is_fullscreen = true;
        true
    }

    /// Returns true when the state changed.
    pub fn exit(&mut self) -> bool {
        if !self.is_fullscreen {
            return false;
        }
        if self.modal {
            self.modal = false;
        } else {
            self.request_native(false);
        }
        self.is_fullscreen = false;
        true
    }

    fn request_native(&mut self, target: bool) {
        self.pending_native = Some(target);
        self.awaiting = Some(Awaiting { target, misses: 0 });
    }

    /// Flips the state; returns the new flag.
    pub fn toggle(&mut self) -> bool {
        if self.is_fullscreen {
            self.exit();
        } else {
            self.enter();
        }
        self.is_fullscreen
    }

    /// Feeds the fullscreen state the viewport reports each frame. Only
    /// transitions of the reported value count; returns true when the
    /// gallery's flag changed as a result.
    ///
    /// After a command, reports that contradict it are treated as stale for
    /// a few frames; if the viewport never follows, its state wins.
    pub fn on_native_change(&mut self, reported: bool) -> bool {
        if let Some(wait) = self.awaiting.as_mut() {
            if reported == wait.target {
                self.awaiting = None;
                self.last_reported = Some(reported);
                return false;
            }
            wait.misses += 1;
            if wait.misses < NATIVE_CONFIRM_FRAMES {
                return false;
            }
            debug!(requested = wait.target, "viewport ignored fullscreen command");
            self.awaiting = None;
            self.last_reported = None;
        }
        if self.last_reported == Some(reported) {
            return false;
        }
        self.last_reported = Some(reported);
        if self.mode() != FullscreenMode::Native || self.modal {
            return false;
        }
        if self.is_fullscreen == reported {
            return false;
        }
        debug!(fullscreen = reported, "viewport fullscreen changed");
        self.is_fullscreen = reported;
        true
    }

    /// Whether a sent command still waits for the viewport to follow.
    pub fn is_awaiting_viewport(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Viewport command waiting to be sent, if any.
    pub fn take_native_request(&mut self) -> Option<bool> {
        self.pending_native.take()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_enter_requests_viewport_change() {
        let mut fs = FullscreenController::new(true);
        assert!(fs.enter());
        assert!(!fs.enter());
        assert_eq!(fs.take_native_request(), Some(true));
        assert_eq!(fs.take_native_request(), None);
        assert!(fs.is_fullscreen());
        assert!(!fs.is_modal());
    }

    #[test]
    fn falls_back_to_modal_when_native_unsupported() {
        let mut fs = FullscreenController::new(true);
        fs.set_native_supported(false);
        assert_eq!(fs.mode(), FullscreenMode::Modal);
        assert!(fs.enter());
        assert!(fs.is_modal());
        assert_eq!(fs.take_native_request(), None);
        assert!(fs.exit());
        assert!(!fs.is_modal());
        assert!(!fs.exit());
    }

    #[test]
    fn mirrors_viewport_reports() {
        let mut fs = FullscreenController::new(true);
        assert!(!fs.on_native_change(false));
        fs.enter();
        // stale report from before the command took effect
        assert!(!fs.on_native_change(false));
        assert!(fs.is_fullscreen());
        assert!(!fs.on_native_change(true));
        // user left fullscreen through the window manager
        assert!(fs.on_native_change(false));
        assert!(!fs.is_fullscreen());
    }

    #[test]
    fn refused_command_falls_back_to_reported_state() {
        let mut fs = FullscreenController::new(true);
        assert!(!fs.on_native_change(false));
        assert!(fs.enter());
        assert!(fs.is_awaiting_viewport());
        for _ in 1..NATIVE_CONFIRM_FRAMES {
            assert!(!fs.on_native_change(false));
            assert!(fs.is_fullscreen());
        }
        assert!(fs.on_native_change(false));
        assert!(!fs.is_fullscreen());
        assert!(!fs.is_awaiting_viewport());
        // a later attempt that the viewport honours still works
        assert!(fs.enter());
        assert!(!fs.on_native_change(true));
        assert!(fs.is_fullscreen());
    }

    #[test]
    fn modal_ignores_viewport_reports() {
        let mut fs = FullscreenController::new(false);
        fs.enter();
        assert!(!fs.on_native_change(false));
        assert!(!fs.on_native_change(true));
        assert!(fs.is_fullscreen());
    }

    #[test]
    fn toggle_flips() {
        let mut fs = FullscreenController::new(false);
        assert!(fs.toggle());
        assert!(!fs.toggle());
    }
}
