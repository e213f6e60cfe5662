//! Snap targets and the animation that carries a column to them.

use std::time::Duration;

use super::domain::WrapMode;
use super::resolver::Geometry;

/// Default length of a snap animation.
pub const SNAP_DURATION: Duration = Duration::from_millis(200);

/// Nearest restable item boundary for a released offset.
pub fn snap_target(geometry: &Geometry, offset: f64) -> f64 {
    let (lo, hi) = geometry.rest_range();
    let extended = geometry.index_at(offset).clamp(lo, hi);
    geometry.offset_of(extended)
}

/// Offset for `occurrences` (extended indices holding the tapped value)
/// nearest to `current`. Ties keep the earlier candidate, so callers list
/// the canonical copy first.
pub fn tap_target(geometry: &Geometry, occurrences: &[usize], current: f64) -> Option<f64> {
    occurrences
        .iter()
        .map(|&i| geometry.offset_of(i as i64))
        .fold(None, |best: Option<f64>, candidate| match best {
            Some(b) if (b - current).abs() <= (candidate - current).abs() => Some(b),
            _ => Some(candidate),
        })
}

/// Target `steps` items away from `from`, kept inside the rest range.
pub fn step_target(geometry: &Geometry, from: f64, steps: i64) -> f64 {
    let (lo, hi) = geometry.rest_range();
    let extended = (geometry.index_at(from) + steps).clamp(lo, hi);
    geometry.offset_of(extended)
}

/// Whole-loop shift that lands a step from `from` on the canonical copy of
/// a wrapping domain. Zero for fixed domains.
///
/// Copies of a value are identical, so a host can apply the shift to the
/// live offset and any running animation without a visible jump.
pub fn wrap_shift(geometry: &Geometry, from: f64, steps: i64) -> f64 {
    if geometry.mode != WrapMode::Wrap || geometry.len == 0 {
        return 0.0;
    }
    let n = geometry.len as i64;
    let k = geometry.margin as i64;
    let target = geometry.index_at(from) + steps;
    let canonical = (target - k).rem_euclid(n) + k;
    geometry.offset_of(canonical - target)
}

/// Eased movement between two offsets over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub from: f64,
    pub to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl Animation {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the clock by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current offset on a cubic ease-out curve. Exactly `to` once finished.
    pub fn sample(&self) -> f64 {
        if self.finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> Geometry {
        Geometry {
            item_height: 10.0,
            margin: 3,
            len: 12,
            center: 2,
            mode: WrapMode::Wrap,
        }
    }

    #[test]
    fn test_wrap_shift_lands_on_canonical_copy() {
        let g = hours();
        // 12 sits at extended 14; five steps on reach extended 19.
        assert_eq!(wrap_shift(&g, 140.0, 5), -120.0);
        assert_eq!(wrap_shift(&g, 30.0, -5), 120.0);
        assert_eq!(wrap_shift(&g, 50.0, 1), 0.0);

        let fixed = Geometry {
            mode: WrapMode::Fixed,
            ..g
        };
        assert_eq!(wrap_shift(&fixed, 140.0, 5), 0.0);
    }

    #[test]
    fn test_snap_target_rounds() {
        let g = hours();
        assert_eq!(snap_target(&g, 113.0), 110.0);
        assert_eq!(snap_target(&g, 116.0), 120.0);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let g = hours();
        for raw in [0.0, 4.9, 57.3, 110.0, 171.0] {
            let once = snap_target(&g, raw);
            assert_eq!(snap_target(&g, once), once);
        }
    }

    #[test]
    fn test_fixed_snap_stays_off_blanks() {
        let g = Geometry {
            margin: 2,
            len: 2,
            mode: WrapMode::Fixed,
            ..hours()
        };
        assert_eq!(snap_target(&g, 0.0), 20.0);
        assert_eq!(snap_target(&g, 50.0), 30.0);
    }

    #[test]
    fn test_tap_prefers_nearest_copy() {
        let g = hours();
        // Value 1 lives at extended 3 and 15.
        assert_eq!(tap_target(&g, &[3, 15], 140.0), Some(150.0));
        assert_eq!(tap_target(&g, &[3, 15], 40.0), Some(30.0));
        assert_eq!(tap_target(&g, &[], 40.0), None);
    }

    #[test]
    fn test_step_target_clamps() {
        let g = hours();
        assert_eq!(step_target(&g, 110.0, 1), 120.0);
        assert_eq!(step_target(&g, 170.0, 3), 170.0);
        assert_eq!(step_target(&g, 10.0, -4), 0.0);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, 100.0, Duration::from_millis(200));
        assert_eq!(anim.sample(), 0.0);
        anim.advance(Duration::from_millis(100));
        let mid = anim.sample();
        assert!(mid > 50.0 && mid < 100.0, "ease-out runs ahead: {mid}");
        anim.advance(Duration::from_millis(150));
        assert!(anim.finished());
        assert_eq!(anim.sample(), 100.0);
    }
}
