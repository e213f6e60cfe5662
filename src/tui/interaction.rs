//! Component-level mouse interactivity system.
//!
//! Column widgets register their bounds during render, and mouse events are
//! routed to the column under the pointer. The registry is rebuilt every
//! frame, so hit testing always matches what is on screen.
//!
//! # Example
//!
//! ```ignore
//! // During render, register a column body:
//! registry.register(InteractiveRegion::column("hour", 0, bounds, first_row, 5));
//!
//! // A popup drawn on top blocks everything below it:
//! registry.register(InteractiveRegion::blocker("help", popup_bounds).with_priority(10));
//! ```

use ratatui::layout::Rect;

use crate::events::Action;

/// Screen rectangle used for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// Rows of a column widget that map to picker slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnTarget {
    pub column: usize,
    /// Screen row of slot 0
    pub first_row: u16,
    pub slots: usize,
}

impl ColumnTarget {
    /// Slot under screen row `y`, if any.
    pub fn slot_at(&self, y: u16) -> Option<usize> {
        let slot = usize::from(y.checked_sub(self.first_row)?);
        (slot < self.slots).then_some(slot)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Column receiving presses and wheel notches (None = swallows events)
    pub target: Option<ColumnTarget>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// A column body that accepts presses, drags and wheel notches
    pub fn column(
        id: &'static str,
        column: usize,
        bounds: ClickRegion,
        first_row: u16,
        slots: usize,
    ) -> Self {
        Self {
            id,
            bounds,
            target: Some(ColumnTarget {
                column,
                first_row,
                slots,
            }),
            priority: 0,
        }
    }

    /// A region that captures mouse events without acting on them
    pub fn blocker(id: &'static str, bounds: ClickRegion) -> Self {
        Self {
            id,
            bounds,
            target: None,
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Highest-priority region under (x, y)
    fn hit(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .max_by_key(|r| r.priority)
    }

    /// Action for a left-button press at (x, y)
    pub fn handle_press(&self, x: u16, y: u16) -> Action {
        self.hit(x, y)
            .and_then(|r| r.target)
            .and_then(|t| {
                t.slot_at(y).map(|slot| Action::DragStart {
                    column: t.column,
                    slot,
                    row: y,
                })
            })
            .unwrap_or(Action::None)
    }

    /// Action for wheel notches at (x, y)
    pub fn handle_scroll(&self, x: u16, y: u16, notches: i32) -> Action {
        self.hit(x, y)
            .and_then(|r| r.target)
            .map(|t| Action::Wheel {
                column: t.column,
                notches,
            })
            .unwrap_or(Action::None)
    }
}
