//! Silent re-centering after a column settles inside a duplicated margin.

use super::domain::WrapMode;
use super::resolver::Geometry;

/// A non-animated jump that keeps the displayed value in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapCorrection {
    /// Offset the correction was computed for.
    pub from: f64,
    /// Offset to jump to.
    pub to: f64,
}

impl WrapCorrection {
    pub fn delta(&self) -> f64 {
        self.to - self.from
    }
}

/// Correction needed at a settled `offset`, if any.
///
/// Resting at extended index `K - 1` or lower means the front margin is
/// showing, so the offset moves one domain length forward; resting at
/// `N + K` or higher moves it one length back. The copies are identical,
/// so the user sees no change. Fixed domains never wrap.
pub fn correction(geometry: &Geometry, offset: f64) -> Option<WrapCorrection> {
    if geometry.mode != WrapMode::Wrap || geometry.len < 2 {
        return None;
    }
    let extended = geometry.index_at(offset);
    let margin = geometry.margin as i64;
    let n = geometry.len as i64;
    let span = n as f64 * geometry.item_height;

    let to = if extended < margin {
        offset + span
    } else if extended >= n + margin {
        offset - span
    } else {
        return None;
    };
    Some(WrapCorrection { from: offset, to })
}
