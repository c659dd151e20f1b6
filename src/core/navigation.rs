/// Which way the last move went through the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// A completed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideMove {
    pub from: usize,
    pub to: usize,
    /// Signed distance in slides used to animate the move. Wrapping with
    /// next/previous is a single step once there are three or more slides.
    pub step: isize,
    pub direction: Direction,
}

/// Current slide index over a fixed-size item list.
#[derive(Debug, Clone)]
pub struct NavigationManager {
    total: usize,
    current_index: usize,
    previous_index: usize,
    direction: Direction,
    infinite: bool,
}

impl NavigationManager {
    pub fn new(total: usize, start_index: usize, infinite: bool) -> Self {
        let current_index = start_index.min(total.saturating_sub(1));
        Self {
            total,
            current_index,
            previous_index: current_index,
            direction: Direction::Forward,
            infinite,
        }
    }

    /// Replaces the item count, pulling the index back into range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        let last = total.saturating_sub(1);
        self.current_index = self.current_index.min(last);
        self.previous_index = self.previous_index.min(last);
    }

    pub fn set_infinite(&mut self, infinite: bool) {
        self.infinite = infinite;
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn next(&mut self) -> Option<SlideMove> {
        if !self.can_go_next() {
            return None;
        }
        let to = (self.current_index + 1) % self.total;
        Some(self.apply(to, self.single_step(to, 1), Direction::Forward))
    }

    pub fn previous(&mut self) -> Option<SlideMove> {
        if !self.can_go_previous() {
            return None;
        }
        let to = (self.current_index + self.total - 1) % self.total;
        Some(self.apply(to, self.single_step(to, -1), Direction::Backward))
    }

    /// Jumps to `index`. Requests before the first item land on the last
    /// one and requests past the last item land on the first.
    pub fn go_to(&mut self, index: isize) -> Option<SlideMove> {
        if self.total < 2 {
            return None;
        }
        let last = self.total - 1;
        let to = if index < 0 {
            last
        } else if index as usize > last {
            0
        } else {
            index as usize
        };
        if to == self.current_index {
            return None;
        }
        let step = to as isize - self.current_index as isize;
        let direction = if step < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        Some(self.apply(to, step, direction))
    }

    // Two slides never sit on both sides of each other, so a wrapping step
    // between them animates as a plain jump.
    fn single_step(&self, to: usize, step: isize) -> isize {
        if self.total == 2 {
            to as isize - self.current_index as isize
        } else {
            step
        }
    }

    fn apply(&mut self, to: usize, step: isize, direction: Direction) -> SlideMove {
        let from = self.current_index;
        self.previous_index = from;
        self.current_index = to;
        self.direction = direction;
        SlideMove {
            from,
            to,
            step,
            direction: self.direction,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        if self.total < 2 {
            return false;
        }
        self.infinite || self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        if self.total < 2 {
            return false;
        }
        self.infinite || self.current_index + 1 < self.total
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// The current slide and its neighbours, wrapping in infinite mode.
    pub fn visible_window(&self) -> Vec<usize> {
        if self.total == 0 {
            return Vec::new();
        }
        let mut window = vec![self.current_index];
        let last = self.total - 1;
        let before = match self.current_index {
            0 if self.infinite => Some(last),
            0 => None,
            i => Some(i - 1),
        };
        let after = match self.current_index {
            i if i == last && self.infinite => Some(0),
            i if i == last => None,
            i => Some(i + 1),
        };
        for idx in [before, after].into_iter().flatten() {
            if !window.contains(&idx) {
                window.push(idx);
            }
        }
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_navigation_stops_at_bounds() {
        let mut nav = NavigationManager::new(3, 0, false);
        assert!(!nav.can_go_previous());
        assert!(nav.previous().is_none());
        assert_eq!(nav.next().map(|m| m.to), Some(1));
        assert_eq!(nav.next().map(|m| m.to), Some(2));
        assert!(!nav.can_go_next());
        assert!(nav.next().is_none());
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn infinite_navigation_wraps_with_single_steps() {
        let mut nav = NavigationManager::new(3, 2, true);
        let m = nav.next().unwrap();
        assert_eq!((m.from, m.to, m.step), (2, 0, 1));
        let m = nav.previous().unwrap();
        assert_eq!((m.from, m.to, m.step), (0, 2, -1));
        assert_eq!(nav.direction(), Direction::Backward);
    }

    #[test]
    fn two_item_wrap_keeps_direction() {
        let mut nav = NavigationManager::new(2, 1, true);
        let m = nav.next().unwrap();
        assert_eq!((m.to, m.step, m.direction), (0, -1, Direction::Forward));
    }

    #[test]
    fn go_to_wraps_out_of_range_requests() {
        let mut nav = NavigationManager::new(4, 1, false);
        assert_eq!(nav.go_to(-1).map(|m| m.to), Some(3));
        assert_eq!(nav.go_to(9).map(|m| m.to), Some(0));
        assert!(nav.go_to(0).is_none());
        let m = nav.go_to(3).unwrap();
        assert_eq!(m.step, 3);
        assert_eq!(nav.previous_index(), 0);
    }

    #[test]
    fn start_index_is_clamped() {
        let nav = NavigationManager::new(3, 10, true);
        assert_eq!(nav.current_index(), 2);
        let empty = NavigationManager::new(0, 4, true);
        assert_eq!(empty.current_index(), 0);
    }

    #[test]
    fn single_item_never_moves() {
        let mut nav = NavigationManager::new(1, 0, true);
        assert!(nav.next().is_none());
        assert!(nav.previous().is_none());
        assert!(nav.go_to(3).is_none());
        assert!(!nav.can_go_next());
    }

    #[test]
    fn shrinking_total_clamps_index() {
        let mut nav = NavigationManager::new(5, 4, false);
        nav.set_total(2);
        assert_eq!(nav.current_index(), 1);
        nav.set_total(0);
        assert_eq!(nav.current_index(), 0);
        assert!(nav.visible_window().is_empty());
    }

    #[test]
    fn visible_window_wraps_only_when_infinite() {
        let nav = NavigationManager::new(5, 0, true);
        assert_eq!(nav.visible_window(), vec![0, 4, 1]);
        let nav = NavigationManager::new(5, 0, false);
        assert_eq!(nav.visible_window(), vec![0, 1]);
        let nav = NavigationManager::new(2, 1, true);
        assert_eq!(nav.visible_window(), vec![1, 0]);
    }
}
