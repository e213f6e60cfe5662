//! Multi-column pickers.
//!
//! [`Column`] erases the value type of a [`ScrollColumn`] so a host can
//! route input and render any column the same way. [`ColumnGroup`] is
//! implemented by each composed picker; it hands out its columns and builds
//! a combined value only when asked.

use std::fmt::Display;
use std::time::Duration;

use super::column::{ColumnState, ScrollColumn, TickOutcome};

/// Rendered form of one visible slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub slot: usize,
    pub label: String,
    pub distance: i64,
}

/// Type-erased handle to a column.
pub trait Column {
    fn name(&self) -> &'static str;
    fn is_disabled(&self) -> bool;
    fn state(&self) -> ColumnState;
    fn item_height(&self) -> f64;
    fn begin_drag(&mut self);
    fn drag_by(&mut self, delta: f64);
    fn release(&mut self);
    fn step(&mut self, steps: i64);
    fn tap_slot(&mut self, slot: usize) -> bool;
    fn tick(&mut self, elapsed: Duration) -> TickOutcome;
    fn flush_deferred(&mut self) -> bool;
    fn cancel_pending(&mut self);
    fn row_views(&self) -> Vec<RowView>;
    fn current_label(&self) -> Option<String>;
}

impl<T: Clone + PartialEq + Display> Column for ScrollColumn<T> {
    fn name(&self) -> &'static str {
        ScrollColumn::name(self)
    }

    fn is_disabled(&self) -> bool {
        ScrollColumn::is_disabled(self)
    }

    fn state(&self) -> ColumnState {
        ScrollColumn::state(self)
    }

    fn item_height(&self) -> f64 {
        self.spec().item_height
    }

    fn begin_drag(&mut self) {
        ScrollColumn::begin_drag(self)
    }

    fn drag_by(&mut self, delta: f64) {
        ScrollColumn::drag_by(self, delta)
    }

    fn release(&mut self) {
        ScrollColumn::release(self)
    }

    fn step(&mut self, steps: i64) {
        ScrollColumn::step(self, steps)
    }

    fn tap_slot(&mut self, slot: usize) -> bool {
        ScrollColumn::tap_slot(self, slot)
    }

    fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        ScrollColumn::tick(self, elapsed)
    }

    fn flush_deferred(&mut self) -> bool {
        ScrollColumn::flush_deferred(self)
    }

    fn cancel_pending(&mut self) {
        ScrollColumn::cancel_pending(self)
    }

    fn row_views(&self) -> Vec<RowView> {
        self.rows()
            .into_iter()
            .map(|row| RowView {
                slot: row.slot,
                label: row
                    .entry
                    .and_then(|entry| entry.value().map(ToString::to_string))
                    .unwrap_or_default(),
                distance: row.distance,
            })
            .collect()
    }

    fn current_label(&self) -> Option<String> {
        self.current_value().map(ToString::to_string)
    }
}

/// A picker made of side-by-side columns.
pub trait ColumnGroup {
    /// Combined value of all columns.
    type Value;

    fn title(&self) -> &'static str;

    fn columns(&self) -> Vec<&dyn Column>;

    fn columns_mut(&mut self) -> Vec<&mut dyn Column>;

    /// Read every column at once. `None` if any column has no value.
    fn value(&self) -> Option<Self::Value>;

    /// Human-readable form of [`ColumnGroup::value`].
    fn describe(&self) -> Option<String>;

    /// Called after column `index` committed a new value during a tick.
    fn column_committed(&mut self, _index: usize) {}

    fn column_count(&self) -> usize {
        self.columns().len()
    }

    /// Advance all columns; columns settle independently.
    fn tick_all(&mut self, elapsed: Duration) -> TickOutcome {
        let mut total = TickOutcome::default();
        let mut committed = vec![];
        for (index, column) in self.columns_mut().into_iter().enumerate() {
            let outcome = column.tick(elapsed);
            total.moved |= outcome.moved;
            if outcome.committed {
                committed.push(index);
            }
        }
        for index in committed {
            total.committed = true;
            self.column_committed(index);
        }
        total
    }

    /// Apply queued wrap corrections after a frame was painted.
    fn flush_all(&mut self) -> bool {
        self.columns_mut()
            .into_iter()
            .fold(false, |any, column| column.flush_deferred() | any)
    }

    /// Drop queued work on every column.
    fn cancel_all(&mut self) {
        for column in self.columns_mut() {
            column.cancel_pending();
        }
    }

    fn is_animating(&self) -> bool {
        self.columns()
            .iter()
            .any(|column| column.state() != ColumnState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{ColumnSpec, WrapMode};

    struct Pair {
        left: ScrollColumn<u8>,
        right: ScrollColumn<u8>,
        commits: Vec<usize>,
    }

    impl ColumnGroup for Pair {
        type Value = (u8, u8);

        fn title(&self) -> &'static str {
            "pair"
        }

        fn columns(&self) -> Vec<&dyn Column> {
            vec![&self.left as &dyn Column, &self.right]
        }

        fn columns_mut(&mut self) -> Vec<&mut dyn Column> {
            vec![&mut self.left as &mut dyn Column, &mut self.right]
        }

        fn value(&self) -> Option<(u8, u8)> {
            Some((*self.left.current_value()?, *self.right.current_value()?))
        }

        fn describe(&self) -> Option<String> {
            self.value().map(|(a, b)| format!("{a}/{b}"))
        }

        fn column_committed(&mut self, index: usize) {
            self.commits.push(index);
        }
    }

    fn pair() -> Pair {
        let column = |name| {
            let values: Vec<u8> = (0..10).collect();
            ScrollColumn::new(name, values, WrapMode::Wrap, ColumnSpec::default(), None).unwrap()
        };
        Pair {
            left: column("left"),
            right: column("right"),
            commits: vec![],
        }
    }

    #[test]
    fn test_columns_settle_independently() {
        let mut group = pair();
        group.left.step(2);
        for _ in 0..20 {
            group.tick_all(Duration::from_millis(16));
        }
        assert!(!group.is_animating());
        assert_eq!(group.commits, vec![0]);
        assert_eq!(group.value(), Some((2, 0)));
        assert_eq!(group.describe().as_deref(), Some("2/0"));
    }

    #[test]
    fn test_row_views_label_blank_filler() {
        let spec = ColumnSpec::default().with_margin(2);
        let column =
            ScrollColumn::new("period", vec!["AM", "PM"], WrapMode::Fixed, spec, None).unwrap();
        let views = Column::row_views(&column);
        let labels: Vec<&str> = views.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["", "", "AM", "PM", ""]);
        assert_eq!(views[2].distance, 0);
    }
}
