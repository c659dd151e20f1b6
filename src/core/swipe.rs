use crate::config::config::SWIPE_DEAD_ZONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeAxis {
    #[default]
    Undecided,
    Horizontal,
    Vertical,
}

/// What a released drag asks the gallery to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Next,
    Previous,
    /// Not far or fast enough; snap back.
    Cancel,
}

/// Tracks one horizontal drag over the slides.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    flick_threshold: f32,
    axis: SwipeAxis,
    offset: f32,
    active: bool,
}

impl SwipeTracker {
    /// `threshold` is a percentage of the gallery width and
    /// `flick_threshold` a release speed in points per millisecond.
    pub fn new(threshold: f32, flick_threshold: f32) -> Self {
        Self {
            threshold,
            flick_threshold,
            axis: SwipeAxis::Undecided,
            offset: 0.0,
            active: false,
        }
    }

    pub fn set_thresholds(&mut self, threshold: f32, flick_threshold: f32) {
        self.threshold = threshold;
        self.flick_threshold = flick_threshold;
    }

    pub fn begin(&mut self) {
        self.active = true;
        self.axis = SwipeAxis::Undecided;
        self.offset = 0.0;
    }

    /// Feeds the total drag distance since `begin` and returns the slide
    /// offset as a percentage of `width`, clamped to ±100.
    pub fn update(&mut self, dx: f32, dy: f32, width: f32) -> f32 {
        if !self.active {
            return 0.0;
        }
        if self.axis == SwipeAxis::Undecided {
            if dx.abs() < SWIPE_DEAD_ZONE && dy.abs() < SWIPE_DEAD_ZONE {
                return 0.0;
            }
            self.axis = if dx.abs() >= dy.abs() {
                SwipeAxis::Horizontal
            } else {
                SwipeAxis::Vertical
            };
        }
        if self.axis != SwipeAxis::Horizontal || width <= 0.0 {
            return 0.0;
        }
        self.offset = (dx / width * 100.0).clamp(-100.0, 100.0);
        self.offset
    }

    /// Ends the drag. `velocity_x` is in points per second, as egui
    /// reports pointer velocity.
    pub fn finish(&mut self, velocity_x: f32, rtl: bool) -> SwipeOutcome {
        let was_horizontal = self.active && self.axis == SwipeAxis::Horizontal;
        let offset = self.offset;
        self.active = false;
        self.axis = SwipeAxis::Undecided;
        self.offset = 0.0;
        if !was_horizontal {
            return SwipeOutcome::Cancel;
        }

        let speed = velocity_x.abs() / 1000.0;
        let is_flick = speed > self.flick_threshold && velocity_x.signum() == offset.signum();
        if offset.abs() <= self.threshold && !is_flick {
            return SwipeOutcome::Cancel;
        }
        // content dragged left reveals the slide to the right
        let towards_right = offset < 0.0;
        match (towards_right, rtl) {
            (true, false) | (false, true) => SwipeOutcome::Next,
            (false, false) | (true, true) => SwipeOutcome::Previous,
        }
    }

    /// Drops the gesture without an outcome.
    pub fn cancel(&mut self) {
        self.active = false;
        self.axis = SwipeAxis::Undecided;
        self.offset = 0.0;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn axis(&self) -> SwipeAxis {
        self.axis
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SwipeTracker {
        SwipeTracker::new(30.0, 0.4)
    }

    #[test]
    fn small_drags_stay_undecided() {
        let mut swipe = tracker();
        swipe.begin();
        assert_eq!(swipe.update(4.0, 3.0, 400.0), 0.0);
        assert_eq!(swipe.axis(), SwipeAxis::Undecided);
    }

    #[test]
    fn long_left_drag_goes_next() {
        let mut swipe = tracker();
        swipe.begin();
        assert_eq!(swipe.update(-200.0, 5.0, 400.0), -50.0);
        assert_eq!(swipe.finish(0.0, false), SwipeOutcome::Next);
        assert_eq!(swipe.offset(), 0.0);
    }

    #[test]
    fn rtl_mirrors_outcome() {
        let mut swipe = tracker();
        swipe.begin();
        swipe.update(-200.0, 0.0, 400.0);
        assert_eq!(swipe.finish(0.0, true), SwipeOutcome::Previous);
    }

    #[test]
    fn short_slow_drag_snaps_back() {
        let mut swipe = tracker();
        swipe.begin();
        swipe.update(60.0, 0.0, 400.0);
        assert_eq!(swipe.finish(100.0, false), SwipeOutcome::Cancel);
    }

    #[test]
    fn short_fast_drag_is_a_flick() {
        let mut swipe = tracker();
        swipe.begin();
        swipe.update(60.0, 0.0, 400.0);
        assert_eq!(swipe.finish(900.0, false), SwipeOutcome::Previous);
    }

    #[test]
    fn vertical_drag_never_slides() {
        let mut swipe = tracker();
        swipe.begin();
        assert_eq!(swipe.update(30.0, 200.0, 400.0), 0.0);
        assert_eq!(swipe.update(300.0, 200.0, 400.0), 0.0);
        assert_eq!(swipe.axis(), SwipeAxis::Vertical);
        assert_eq!(swipe.finish(5000.0, false), SwipeOutcome::Cancel);
    }

    #[test]
    fn offset_is_clamped() {
        let mut swipe = tracker();
        swipe.begin();
        assert_eq!(swipe.update(900.0, 0.0, 400.0), 100.0);
    }
}
