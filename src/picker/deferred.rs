//! Corrections held back until the host has painted the current frame.
//!
//! A wrap correction computed at settle time must not land in the same
//! frame that shows the settled position, and it must never overwrite an
//! offset that changed after it was computed. Each scheduled correction
//! remembers the generation and offset it was made for; any newer
//! programmatic move bumps the generation and the stale entry is dropped.

use super::wrap::WrapCorrection;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    generation: u64,
    correction: WrapCorrection,
}

/// Single-slot queue of post-render corrections for one column.
#[derive(Debug, Clone, Default)]
pub struct Deferred {
    generation: u64,
    pending: Option<Pending>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Queue a correction, replacing any older one.
    pub fn schedule(&mut self, correction: WrapCorrection) {
        self.pending = Some(Pending {
            generation: self.generation,
            correction,
        });
    }

    /// Discard whatever is queued. Called on programmatic moves, new drags
    /// and unmount.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    /// Take the queued correction if it still applies to `offset`.
    pub fn take(&mut self, offset: f64) -> Option<WrapCorrection> {
        let pending = self.pending.take()?;
        let fresh = pending.generation == self.generation && pending.correction.from == offset;
        fresh.then_some(pending.correction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix() -> WrapCorrection {
        WrapCorrection { from: 630.0, to: 30.0 }
    }

    #[test]
    fn test_take_applies_once() {
        let mut deferred = Deferred::new();
        deferred.schedule(fix());
        assert!(deferred.is_pending());
        assert_eq!(deferred.take(630.0), Some(fix()));
        assert_eq!(deferred.take(630.0), None);
    }

    #[test]
    fn test_invalidate_drops_pending() {
        let mut deferred = Deferred::new();
        deferred.schedule(fix());
        deferred.invalidate();
        assert!(!deferred.is_pending());
        assert_eq!(deferred.take(630.0), None);
    }

    #[test]
    fn test_moved_offset_discards_correction() {
        let mut deferred = Deferred::new();
        deferred.schedule(fix());
        assert_eq!(deferred.take(200.0), None);
        assert!(!deferred.is_pending());
    }
}
