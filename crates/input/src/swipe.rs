//! Pointer swipes: a press followed by a release, classified into a direction.
//!
//! Works for touch screens and for mouse drags in a terminal alike; the
//! caller decides what a unit of distance is (pixels, terminal cells).

use crate::types::{Direction, DEFAULT_SWIPE_THRESHOLD};

/// Classify the gesture from `start` to `end`.
///
/// The axis with the larger travel wins (ties go to the vertical axis). A
/// gesture shorter than `threshold` along that axis registers nothing.
///
/// ```
/// use tui_2048_input::classify_swipe;
/// use tui_2048_types::Direction;
///
/// assert_eq!(classify_swipe((50, 10), (10, 12), 20), Some(Direction::Left));
/// assert_eq!(classify_swipe((10, 10), (15, 12), 20), None);
/// ```
pub fn classify_swipe(start: (u16, u16), end: (u16, u16), threshold: u16) -> Option<Direction> {
    let dx = i32::from(start.0) - i32::from(end.0);
    let dy = i32::from(start.1) - i32::from(end.1);
    let threshold = i32::from(threshold);

    if dx.abs() > dy.abs() {
        if dx.abs() < threshold {
            return None;
        }
        Some(if dx > 0 { Direction::Left } else { Direction::Right })
    } else {
        if dy.abs() < threshold || dy == 0 {
            return None;
        }
        Some(if dy > 0 { Direction::Up } else { Direction::Down })
    }
}

/// Tracks one press at a time and reports a direction on release.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    threshold: u16,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: u16) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn press(&mut self, x: u16, y: u16) {
        self.start = Some((x, y));
    }

    /// Finish the gesture. A release without a press yields nothing.
    ///
    /// A release too short to count keeps the press so a later release can still complete it.
    pub fn release(&mut self, x: u16, y: u16) -> Option<Direction> {
        let start = self.start?;
        let direction = classify_swipe(start, (x, y), self.threshold)?;
        self.start = None;
        Some(direction)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(classify_swipe((100, 100), (40, 80), 20), Some(Direction::Left));
        assert_eq!(classify_swipe((100, 100), (160, 80), 20), Some(Direction::Right));
        assert_eq!(classify_swipe((100, 100), (90, 40), 20), Some(Direction::Up));
        assert_eq!(classify_swipe((100, 100), (110, 170), 20), Some(Direction::Down));
    }

    #[test]
    fn short_gestures_are_ignored() {
        assert_eq!(classify_swipe((100, 100), (81, 100), 20), None);
        assert_eq!(classify_swipe((100, 100), (100, 119), 20), None);
        assert_eq!(classify_swipe((100, 100), (80, 100), 20), Some(Direction::Left));
        assert_eq!(classify_swipe((5, 5), (5, 5), 0), None);
    }

    #[test]
    fn tracker_needs_a_press() {
        let mut tracker = SwipeTracker::with_threshold(2);
        assert_eq!(tracker.release(10, 10), None);

        tracker.press(10, 10);
        assert!(tracker.is_pressed());
        assert_eq!(tracker.release(10, 4), Some(Direction::Up));
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn tracker_keeps_press_after_short_release() {
        let mut tracker = SwipeTracker::with_threshold(3);
        tracker.press(0, 0);
        assert_eq!(tracker.release(1, 0), None);
        assert!(tracker.is_pressed());
        assert_eq!(tracker.release(6, 0), Some(Direction::Right));

        tracker.press(0, 0);
        tracker.cancel();
        assert_eq!(tracker.release(6, 0), None);
    }

    #[test]
    fn default_threshold() {
        assert_eq!(SwipeTracker::default().threshold(), DEFAULT_SWIPE_THRESHOLD);
    }
}
