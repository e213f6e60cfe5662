//! Mouse-wheel gestures for scroll columns.
//!
//! A terminal reports the wheel as discrete notches with no momentum phase.
//! Notches arriving close together are treated as one drag; the gesture
//! ends, like a momentum end on a touch surface, once no notch has arrived
//! for the quiet period.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut wheel = WheelGesture::new(4.0, Duration::from_millis(120));
//!
//! // On a wheel notch over column 1:
//! let update = wheel.accumulate(1, -1, Instant::now());
//!
//! // Every frame:
//! if let Some(column) = wheel.poll(Instant::now()) {
//!     columns[column].release();
//! }
//! ```

use std::time::{Duration, Instant};

/// What the host must do for one wheel notch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelUpdate {
    /// A gesture on another column ended and must be released first.
    pub release: Option<usize>,
    /// A new gesture started; the column must begin a drag.
    pub begin: bool,
    /// Offset to drag the column by.
    pub delta: f64,
}

/// Tracks the wheel gesture in progress, if any.
#[derive(Debug, Clone)]
pub struct WheelGesture {
    /// Column receiving the current gesture
    column: Option<usize>,
    /// Time of last notch
    last_event: Option<Instant>,
    /// Offset units per notch
    step: f64,
    /// Pause that ends a gesture
    quiet: Duration,
}

impl Default for WheelGesture {
    fn default() -> Self {
        Self::new(4.0, Duration::from_millis(120))
    }
}

impl WheelGesture {
    pub fn new(step: f64, quiet: Duration) -> Self {
        Self {
            column: None,
            last_event: None,
            step,
            quiet,
        }
    }

    pub fn active_column(&self) -> Option<usize> {
        self.column
    }

    /// Register `notches` (positive = down) over `column`.
    pub fn accumulate(&mut self, column: usize, notches: i32, now: Instant) -> WheelUpdate {
        let mut release = None;
        let mut begin = false;

        match self.column {
            Some(active) if active == column => {}
            Some(active) => {
                release = Some(active);
                begin = true;
            }
            None => begin = true,
        }

        self.column = Some(column);
        self.last_event = Some(now);

        WheelUpdate {
            release,
            begin,
            delta: f64::from(notches) * self.step,
        }
    }

    /// End the gesture if the quiet period has passed. Returns the column to
    /// release.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        let last = self.last_event?;
        if now.saturating_duration_since(last) < self.quiet {
            return None;
        }
        self.last_event = None;
        self.column.take()
    }

    /// Forget the gesture without releasing, e.g. when the picker closes.
    pub fn reset(&mut self) {
        self.column = None;
        self.last_event = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_notch_begins_gesture() {
        let mut wheel = WheelGesture::new(4.0, Duration::from_millis(100));
        let now = Instant::now();
        let update = wheel.accumulate(0, 1, now);
        assert!(update.begin);
        assert_eq!(update.release, None);
        assert_eq!(update.delta, 4.0);

        let update = wheel.accumulate(0, -2, now + Duration::from_millis(10));
        assert!(!update.begin);
        assert_eq!(update.delta, -8.0);
    }

    #[test]
    fn test_gesture_ends_after_quiet_period() {
        let mut wheel = WheelGesture::new(4.0, Duration::from_millis(100));
        let now = Instant::now();
        wheel.accumulate(2, 1, now);

        assert_eq!(wheel.poll(now + Duration::from_millis(50)), None);
        assert_eq!(wheel.poll(now + Duration::from_millis(100)), Some(2));
        assert_eq!(wheel.poll(now + Duration::from_millis(300)), None);
        assert_eq!(wheel.active_column(), None);
    }

    #[test]
    fn test_switching_column_releases_previous() {
        let mut wheel = WheelGesture::default();
        let now = Instant::now();
        wheel.accumulate(0, 1, now);
        let update = wheel.accumulate(1, 1, now);
        assert_eq!(update.release, Some(0));
        assert!(update.begin);
        assert_eq!(wheel.active_column(), Some(1));
    }
}
