//! Per-column selection state machine.
//!
//! ```text
//!   Idle --begin_drag--> Dragging --release--> Settling --tick..--> Idle
//!     \______________select_value / step (animated)_____^
//! ```
//!
//! The host reports drag offsets and drives [`ScrollColumn::tick`] from its
//! frame clock. After painting a frame it calls
//! [`ScrollColumn::flush_deferred`], which applies any silent wrap
//! correction queued by the last settle.

use std::fmt;
use std::time::Duration;

use crate::error::{PickerError, PickerResult};
use crate::log;

use super::deferred::Deferred;
use super::domain::{ValueDomain, WrapMode};
use super::padded::{Entry, PaddedSequence};
use super::resolver::Geometry;
use super::snap::{self, Animation, SNAP_DURATION};
use super::wrap;

/// Margin used by every picker in the app.
pub const DEFAULT_MARGIN: usize = 3;

/// Layout and timing of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub item_height: f64,
    pub visible_slots: usize,
    pub margin: usize,
    pub snap_duration: Duration,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            item_height: 10.0,
            visible_slots: 5,
            margin: DEFAULT_MARGIN,
            snap_duration: SNAP_DURATION,
        }
    }
}

impl ColumnSpec {
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    fn validate(&self) -> PickerResult<()> {
        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            return Err(PickerError::InvalidItemHeight(self.item_height));
        }
        if self.visible_slots == 0 {
            return Err(PickerError::NoVisibleSlots);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnState {
    Idle,
    Dragging,
    Settling,
}

/// What a frame tick did to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The offset moved this tick.
    pub moved: bool,
    /// The column settled on a value different from the last committed one.
    pub committed: bool,
}

/// One visible slot, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a, T> {
    pub slot: usize,
    pub extended: i64,
    /// Signed distance from the center slot.
    pub distance: i64,
    /// `None` when the slot lies past the padded content.
    pub entry: Option<Entry<'a, T>>,
}

type Listener<T> = Box<dyn FnMut(&T)>;

/// A single scroll-selection column over values of type `T`.
pub struct ScrollColumn<T> {
    name: &'static str,
    sequence: PaddedSequence<T>,
    spec: ColumnSpec,
    offset: f64,
    state: ColumnState,
    animation: Option<Animation>,
    deferred: Deferred,
    committed: Option<T>,
    listener: Option<Listener<T>>,
}

impl<T: fmt::Debug> fmt::Debug for ScrollColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollColumn")
            .field("name", &self.name)
            .field("sequence", &self.sequence)
            .field("offset", &self.offset)
            .field("state", &self.state)
            .field("animation", &self.animation)
            .field("committed", &self.committed)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq> ScrollColumn<T> {
    /// Build a column resting on `initial`, or on the first value.
    pub fn new(
        name: &'static str,
        values: Vec<T>,
        mode: WrapMode,
        spec: ColumnSpec,
        initial: Option<&T>,
    ) -> PickerResult<Self> {
        spec.validate()?;
        let domain = ValueDomain::new(values, mode)?;
        let start = match initial {
            Some(value) => domain.index_of(value).ok_or(PickerError::UnknownValue)?,
            None => 0,
        };
        let sequence = PaddedSequence::build(domain, spec.margin)?;
        let mut column = Self {
            name,
            sequence,
            spec,
            offset: 0.0,
            state: ColumnState::Idle,
            animation: None,
            deferred: Deferred::new(),
            committed: None,
            listener: None,
        };
        column.place(start);
        Ok(column)
    }

    /// Register the settle listener. It fires only when a settle lands on
    /// a value different from the last committed one.
    pub fn on_value_change(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn geometry(&self) -> Geometry {
        let domain = self.sequence.domain();
        Geometry {
            item_height: self.spec.item_height,
            margin: self.sequence.margin(),
            len: domain.len(),
            center: Geometry::center_for(self.spec.visible_slots),
            mode: domain.mode(),
        }
    }

    pub fn sequence(&self) -> &PaddedSequence<T> {
        &self.sequence
    }

    pub fn spec(&self) -> &ColumnSpec {
        &self.spec
    }

    pub fn state(&self) -> ColumnState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_disabled(&self) -> bool {
        self.sequence.domain().is_disabled()
    }

    #[cfg(test)]
    pub fn has_pending_correction(&self) -> bool {
        self.deferred.is_pending()
    }

    /// Value under the center slot right now, mid-drag included.
    pub fn current_value(&self) -> Option<&T> {
        if self.is_disabled() {
            return None;
        }
        let index = self.geometry().domain_index_at_offset(self.offset)?;
        self.sequence.domain().get(index)
    }

    /// Value reported by the last settle or programmatic placement.
    pub fn committed_value(&self) -> Option<&T> {
        self.committed.as_ref()
    }

    pub fn begin_drag(&mut self) {
        if self.is_disabled() {
            return;
        }
        self.deferred.invalidate();
        self.animation = None;
        self.state = ColumnState::Dragging;
    }

    /// Report an absolute offset from the host surface.
    pub fn drag_to(&mut self, offset: f64) {
        if self.state != ColumnState::Dragging || !offset.is_finite() {
            return;
        }
        self.offset = self.geometry().clamp_offset(offset);
    }

    pub fn drag_by(&mut self, delta: f64) {
        self.drag_to(self.offset + delta);
    }

    /// Finger lifted or momentum ended; snap to the nearest item.
    pub fn release(&mut self) {
        if self.state != ColumnState::Dragging {
            return;
        }
        let target = snap::snap_target(&self.geometry(), self.offset);
        self.settle_toward(target);
    }

    /// Move `steps` items from the current target, animated.
    pub fn step(&mut self, steps: i64) {
        if self.is_disabled() || self.state == ColumnState::Dragging {
            return;
        }
        if steps == 0 {
            return;
        }
        let geometry = self.geometry();
        let mut from = self.animation.map_or(self.offset, |anim| anim.to);
        let shift = snap::wrap_shift(&geometry, from, steps);
        if shift != 0.0 {
            self.offset += shift;
            from += shift;
            if let Some(anim) = self.animation.as_mut() {
                anim.from += shift;
                anim.to += shift;
            }
        }
        let target = snap::step_target(&geometry, from, steps);
        if target == from && self.animation.is_none() {
            return;
        }
        self.deferred.invalidate();
        self.settle_toward(target);
    }

    /// Select `value` at the copy nearest the current offset.
    ///
    /// Returns `false` when the column is disabled or the value is not in
    /// the domain. A non-animated selection commits silently, so a host can
    /// initialize columns without hearing its own changes back.
    pub fn select_value(&mut self, value: &T, animated: bool) -> bool {
        if self.is_disabled() {
            return false;
        }
        let Some(index) = self.sequence.domain().index_of(value) else {
            return false;
        };
        let canonical = index + self.sequence.margin();
        let mut occurrences = self.sequence.occurrences(index);
        occurrences.sort_by_key(|&i| i != canonical);
        let geometry = self.geometry();
        let Some(target) = snap::tap_target(&geometry, &occurrences, self.offset) else {
            return false;
        };

        self.deferred.invalidate();
        if !animated {
            self.animation = None;
            self.state = ColumnState::Idle;
            self.offset = target;
            self.committed = Some(value.clone());
            return true;
        }
        if target == self.offset && self.state == ColumnState::Idle {
            return true;
        }
        self.settle_toward(target);
        true
    }

    /// Tap the item shown in visible slot `slot`. Blank filler is ignored.
    pub fn tap_slot(&mut self, slot: usize) -> bool {
        let geometry = self.geometry();
        let extended = geometry.index_at(self.offset) - geometry.center as i64 + slot as i64;
        let value = usize::try_from(extended)
            .ok()
            .and_then(|i| self.sequence.get(i))
            .and_then(|entry| entry.value().cloned());
        match value {
            Some(value) => self.select_value(&value, true),
            None => false,
        }
    }

    /// Advance a running snap animation by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        let Some(mut anim) = self.animation else {
            return TickOutcome::default();
        };
        anim.advance(elapsed);
        let before = self.offset;
        self.offset = anim.sample();
        let moved = self.offset != before;
        if !anim.finished() {
            self.animation = Some(anim);
            return TickOutcome {
                moved,
                committed: false,
            };
        }
        self.animation = None;
        let committed = self.settle();
        TickOutcome { moved, committed }
    }

    /// Apply the wrap correction queued by the last settle, if it is still
    /// valid. Call after the host has painted a frame.
    pub fn flush_deferred(&mut self) -> bool {
        let Some(correction) = self.deferred.take(self.offset) else {
            return false;
        };
        if self.state != ColumnState::Idle {
            return false;
        }
        log::log_event(&format!(
            "{}: wrap {} -> {}",
            self.name, correction.from, correction.to
        ));
        self.offset = correction.to;
        true
    }

    /// Drop queued work, e.g. when the column is unmounted.
    pub fn cancel_pending(&mut self) {
        self.deferred.invalidate();
    }

    /// Swap in a new list of values, keeping the current value when it is
    /// still present and otherwise the nearest position. Fires the listener
    /// when the resulting value differs from the committed one.
    pub fn set_domain(&mut self, values: Vec<T>) -> PickerResult<bool> {
        let current = self.current_value().cloned();
        let position = self.geometry().domain_index_at_offset(self.offset);
        let domain = ValueDomain::new(values, self.sequence.domain().mode())?;
        let start = current
            .as_ref()
            .and_then(|value| domain.index_of(value))
            .or(position)
            .unwrap_or(0)
            .min(domain.len().saturating_sub(1));
        self.sequence = PaddedSequence::build(domain, self.spec.margin)?;
        self.deferred.invalidate();
        self.animation = None;
        self.state = ColumnState::Idle;
        self.offset = self.geometry().offset_of((start + self.sequence.margin()) as i64);
        Ok(self.commit())
    }

    /// Visible slots for rendering, top to bottom.
    pub fn rows(&self) -> Vec<Row<'_, T>> {
        let geometry = self.geometry();
        let top = geometry.index_at(self.offset) - geometry.center as i64;
        (0..self.spec.visible_slots)
            .map(|slot| {
                let extended = top + slot as i64;
                let entry = usize::try_from(extended)
                    .ok()
                    .and_then(|i| self.sequence.get(i));
                Row {
                    slot,
                    extended,
                    distance: geometry.distance(extended, self.offset),
                    entry,
                }
            })
            .collect()
    }

    fn place(&mut self, domain_index: usize) {
        let extended = (domain_index + self.sequence.margin()) as i64;
        self.offset = self.geometry().offset_of(extended);
        self.committed = self.current_value().cloned();
    }

    fn settle_toward(&mut self, target: f64) {
        self.animation = Some(Animation::new(self.offset, target, self.spec.snap_duration));
        self.state = ColumnState::Settling;
    }

    fn settle(&mut self) -> bool {
        self.state = ColumnState::Idle;
        if let Some(correction) = wrap::correction(&self.geometry(), self.offset) {
            self.deferred.schedule(correction);
        }
        self.commit()
    }

    fn commit(&mut self) -> bool {
        let value = self.current_value().cloned();
        if value == self.committed {
            return false;
        }
        self.committed = value;
        if let Some(value) = &self.committed {
            log::log_event(&format!("{}: committed at offset {}", self.name, self.offset));
            if let Some(listener) = self.listener.as_mut() {
                listener(value);
            }
        }
        true
    }
}
