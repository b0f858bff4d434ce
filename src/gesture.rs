use tracing::trace;

/// Minimum horizontal travel, in touch coordinates, that counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    Tracking { start_x: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left; advances to the next slide.
    Left,
    /// Finger moved left-to-right; returns to the previous slide.
    Right,
}

/// Classifies a single touch drag as at most one swipe.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    state: GestureState,
    last_start_x: f32,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self {
            state: GestureState::Idle,
            last_start_x: 0.0,
        }
    }
}

impl GestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    /// X coordinate recorded by the most recent touch start.
    pub fn touch_start_x(&self) -> f32 {
        self.last_start_x
    }

    pub fn touch_start(&mut self, x: f32) {
        self.state = GestureState::Tracking { start_x: x };
        self.last_start_x = x;
    }

    /// Returns a swipe once the drag crosses the threshold, then goes idle so
    /// further movement of the same finger is ignored.
    pub fn touch_move(&mut self, x: f32) -> Option<Swipe> {
        let GestureState::Tracking { start_x } = self.state else {
            return None;
        };
        let diff = start_x - x;
        if diff.abs() <= SWIPE_THRESHOLD {
            trace!(diff, "touch move below swipe threshold");
            return None;
        }
        self.state = GestureState::Idle;
        Some(if diff > 0.0 { Swipe::Left } else { Swipe::Right })
    }

    pub fn touch_end(&mut self) {
        self.state = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_left_drag_is_one_swipe() {
        let mut g = GestureDetector::new();
        g.touch_start(100.0);
        assert!(g.is_tracking());
        assert_eq!(g.touch_move(40.0), Some(Swipe::Left));
        assert!(!g.is_tracking());
        // same finger keeps moving: no second navigation
        assert_eq!(g.touch_move(0.0), None);
        assert_eq!(g.touch_move(-200.0), None);
    }

    #[test]
    fn short_drag_is_jitter() {
        let mut g = GestureDetector::new();
        g.touch_start(100.0);
        assert_eq!(g.touch_move(70.0), None);
        assert!(g.is_tracking());
        g.touch_end();
        assert!(!g.is_tracking());
    }

    #[test]
    fn exactly_threshold_does_not_swipe() {
        let mut g = GestureDetector::new();
        g.touch_start(100.0);
        assert_eq!(g.touch_move(50.0), None);
        assert_eq!(g.touch_move(150.0), None);
    }

    #[test]
    fn right_drag_goes_back() {
        let mut g = GestureDetector::new();
        g.touch_start(10.0);
        assert_eq!(g.touch_move(80.0), Some(Swipe::Right));
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut g = GestureDetector::new();
        assert_eq!(g.touch_move(500.0), None);
    }

    #[test]
    fn records_start_position() {
        let mut g = GestureDetector::new();
        g.touch_start(123.5);
        g.touch_end();
        assert_eq!(g.touch_start_x(), 123.5);
    }
}
