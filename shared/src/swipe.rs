#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide.
    Next,
    /// Finger moved right: show the previous slide.
    Previous,
}

/// Horizontal swipe detection over one touch interaction at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: f64,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: 0.0,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn touch_started(&mut self, x: f64) {
        self.start_x = x;
    }

    /// Displacement strictly above the threshold counts as a swipe; anything
    /// shorter is a tap.
    pub fn touch_ended(&mut self, x: f64) -> Option<SwipeDirection> {
        let diff = self.start_x - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_swipe_past_threshold_goes_next() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.touch_started(200.0);
        assert_eq!(tracker.touch_ended(149.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn rightward_swipe_past_threshold_goes_previous() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.touch_started(100.0);
        assert_eq!(tracker.touch_ended(151.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn short_moves_are_taps() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.touch_started(100.0);
        assert_eq!(tracker.touch_ended(51.0), None);
        tracker.touch_started(100.0);
        assert_eq!(tracker.touch_ended(150.0), None);
    }

    #[test]
    fn each_gesture_uses_its_own_start() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.touch_started(300.0);
        assert_eq!(tracker.touch_ended(100.0), Some(SwipeDirection::Next));
        tracker.touch_started(100.0);
        assert_eq!(tracker.touch_ended(120.0), None);
    }
}
