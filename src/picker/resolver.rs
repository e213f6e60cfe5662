//! Offset arithmetic shared by the wrap and snap logic.
//!
//! An offset of `i * item_height` places extended index `i` in the center
//! slot. Everything here is a pure function of a [`Geometry`].

use super::domain::WrapMode;

/// Layout facts of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Height of one item, in the host's pixel unit.
    pub item_height: f64,
    /// Items padded onto each end.
    pub margin: usize,
    /// Number of real values.
    pub len: usize,
    /// Visible slot that holds the selection.
    pub center: usize,
    pub mode: WrapMode,
}

impl Geometry {
    /// Center slot for a viewport of `visible_slots` rows.
    pub fn center_for(visible_slots: usize) -> usize {
        visible_slots.saturating_sub(1) / 2
    }

    /// Length of the padded sequence.
    pub fn padded_len(&self) -> usize {
        self.len + 2 * self.margin
    }

    /// Nearest extended index for an offset.
    pub fn index_at(&self, offset: f64) -> i64 {
        (offset / self.item_height).round() as i64
    }

    /// Offset that centers an extended index.
    pub fn offset_of(&self, extended: i64) -> f64 {
        extended as f64 * self.item_height
    }

    /// Domain position shown at an extended index.
    ///
    /// Wrapping domains reduce modulo the length; fixed domains clamp, so a
    /// blank margin resolves to the nearest real value. `None` only for an
    /// empty domain.
    pub fn domain_index_at(&self, extended: i64) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let n = self.len as i64;
        let shifted = extended - self.margin as i64;
        let index = match self.mode {
            WrapMode::Wrap => shifted.rem_euclid(n),
            WrapMode::Fixed => shifted.clamp(0, n - 1),
        };
        Some(index as usize)
    }

    /// Domain position under the center slot at `offset`.
    pub fn domain_index_at_offset(&self, offset: f64) -> Option<usize> {
        self.domain_index_at(self.index_at(offset))
    }

    /// Visible slot that `render_index` occupies at `offset`.
    pub fn slot(&self, render_index: i64, offset: f64) -> i64 {
        render_index - self.index_at(offset) + self.center as i64
    }

    /// Signed number of slots between `render_index` and the center.
    pub fn distance(&self, render_index: i64, offset: f64) -> i64 {
        self.slot(render_index, offset) - self.center as i64
    }

    /// Extended indices a column may come to rest on.
    pub fn rest_range(&self) -> (i64, i64) {
        match self.mode {
            WrapMode::Wrap => (0, self.padded_len() as i64 - 1),
            WrapMode::Fixed => (
                self.margin as i64,
                (self.margin + self.len) as i64 - 1,
            ),
        }
    }

    /// Offsets the host surface can scroll between.
    pub fn content_bounds(&self) -> (f64, f64) {
        let last = self.padded_len().saturating_sub(1) as i64;
        (0.0, self.offset_of(last))
    }

    /// Clamp an offset into the scrollable content.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        let (lo, hi) = self.content_bounds();
        offset.clamp(lo, hi)
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
    fn test_index_at_rounds_to_nearest() {
        let g = hours();
        assert_eq!(g.index_at(110.0), 11);
        assert_eq!(g.index_at(114.9), 11);
        assert_eq!(g.index_at(115.0), 12);
        assert_eq!(g.index_at(0.0), 0);
    }

    #[test]
    fn test_domain_index_wraps_negative_forward() {
        let g = hours();
        assert_eq!(g.domain_index_at(0), Some(9));
        assert_eq!(g.domain_index_at(3), Some(0));
        assert_eq!(g.domain_index_at(15), Some(0));
        assert_eq!(g.domain_index_at(-1), Some(8));
    }

    #[test]
    fn test_fixed_domain_clamps() {
        let g = Geometry {
            margin: 2,
            len: 2,
            mode: WrapMode::Fixed,
            ..hours()
        };
        assert_eq!(g.domain_index_at(0), Some(0));
        assert_eq!(g.domain_index_at(3), Some(1));
        assert_eq!(g.domain_index_at(5), Some(1));
        assert_eq!(g.rest_range(), (2, 3));
    }

    #[test]
    fn test_empty_domain_has_no_selection() {
        let g = Geometry { len: 0, ..hours() };
        assert_eq!(g.domain_index_at(4), None);
    }

    #[test]
    fn test_distance_symmetry() {
        let g = hours();
        for settled in [0.0, 30.0, 110.0, 170.0] {
            let at = g.index_at(settled);
            for d in -3..=3 {
                assert_eq!(g.distance(at + d, settled), d);
                assert_eq!(g.slot(at + d, settled), 2 + d);
            }
        }
    }

    #[test]
    fn test_center_for() {
        assert_eq!(Geometry::center_for(5), 2);
        assert_eq!(Geometry::center_for(6), 2);
        assert_eq!(Geometry::center_for(7), 3);
        assert_eq!(Geometry::center_for(1), 0);
    }
}
