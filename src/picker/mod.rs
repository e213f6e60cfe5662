//! Circular scroll-selection engine
//!
//! Lets a user pick one value from a short ordered list by dragging, while a
//! finite padded list stands in for an endless loop.
//!
//! - `domain` - the values of one column and whether they wrap
//! - `padded` - backing sequence with duplicated (or blank) margins
//! - `resolver` - offset to index, value and visual distance
//! - `wrap` - silent re-centering out of the margins
//! - `snap` - snap targets and the settle animation
//! - `deferred` - post-render correction queue
//! - `column` - the per-column state machine
//! - `group` - type-erased columns and multi-column pickers

#![allow(dead_code)]

mod column;
mod deferred;
mod domain;
mod group;
mod padded;
mod resolver;
mod snap;
mod wrap;

pub use column::{ColumnSpec, ColumnState, ScrollColumn, TickOutcome, DEFAULT_MARGIN};
pub use domain::WrapMode;
pub use group::{Column, ColumnGroup};
pub use snap::SNAP_DURATION;
#[allow(unused_imports)]
pub use column::Row;
#[allow(unused_imports)]
pub use domain::ValueDomain;
#[allow(unused_imports)]
pub use group::RowView;
#[allow(unused_imports)]
pub use padded::{Entry, PaddedSequence};
#[allow(unused_imports)]
pub use resolver::Geometry;
