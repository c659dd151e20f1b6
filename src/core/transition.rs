//! Slide placement and the animated move between slides.
//!
//! Positions are percentages of the gallery width, measured in index order
//! from the current slide: the next slide sits at `100`, the previous one at
//! `-100`. Right-to-left galleries mirror these when drawing.

use std::time::{Duration, Instant};

/// Resting position of slide `index` while `current` is shown. With `wrap`
/// the first and last slides sit next to each other.
pub fn base_position(index: usize, current: usize, total: usize, wrap: bool) -> f32 {
    if total == 0 {
        return 0.0;
    }
    let last = total - 1;
    if wrap && total > 2 {
        if current == 0 && index == last {
            return -100.0;
        }
        if current == last && index == 0 {
            return 100.0;
        }
    }
    100.0 * (index as f32 - current as f32)
}

/// Cubic ease-out over `t` in `[0, 1]`.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy)]
struct Running {
    started: Instant,
    from_offset: f32,
}

/// Offset animation applied to the whole strip after an index change.
#[derive(Debug)]
pub struct SlideTransition {
    duration: Duration,
    running: Option<Running>,
}

impl SlideTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            running: None,
        }
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts animating from `from_offset` back to rest. A running
    /// animation is replaced.
    pub fn start(&mut self, from_offset: f32, now: Instant) {
        self.running = Some(Running {
            started: now,
            from_offset,
        });
    }

    fn progress(&self, running: &Running, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(running.started);
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    /// Current strip offset in percent.
    pub fn offset(&self, now: Instant) -> f32 {
        match &self.running {
            Some(running) => {
                let eased = ease_out(self.progress(running, now));
                running.from_offset * (1.0 - eased)
            }
            None => 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Ends a finished animation; true when one just ended.
    pub fn finish_if_done(&mut self, now: Instant) -> bool {
        let Some(running) = self.running else {
            return false;
        };
        if self.progress(&running, now) < 1.0 {
            return false;
        }
        self.running = None;
        true
    }

    /// Stops immediately, leaving the strip at rest.
    pub fn cancel(&mut self) {
        self.running = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_wrap_in_infinite_mode() {
        assert_eq!(base_position(4, 0, 5, true), -100.0);
        assert_eq!(base_position(0, 4, 5, true), 100.0);
        assert_eq!(base_position(4, 0, 5, false), 400.0);
        assert_eq!(base_position(2, 1, 5, true), 100.0);
    }

    #[test]
    fn two_items_do_not_wrap_positions() {
        assert_eq!(base_position(1, 0, 2, true), 100.0);
        assert_eq!(base_position(0, 1, 2, true), -100.0);
    }

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn offset_decays_to_rest() {
        let t0 = Instant::now();
        let mut tr = SlideTransition::new(Duration::from_millis(400));
        tr.start(100.0, t0);
        assert_eq!(tr.offset(t0), 100.0);
        let mid = tr.offset(t0 + Duration::from_millis(200));
        assert!(mid > 0.0 && mid < 100.0);
        assert!(!tr.finish_if_done(t0 + Duration::from_millis(200)));
        assert!(tr.finish_if_done(t0 + Duration::from_millis(400)));
        assert!(!tr.is_running());
        assert_eq!(tr.offset(t0 + Duration::from_millis(500)), 0.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t0 = Instant::now();
        let mut tr = SlideTransition::new(Duration::ZERO);
        tr.start(-100.0, t0);
        assert_eq!(tr.offset(t0), 0.0);
        assert!(tr.finish_if_done(t0));
    }
}
