//! Domain error types for wheelpick
//!
//! Provides structured error types for different domains:
//! - `PickerError` for building scroll columns
//! - `AppError` as the top-level error type of the terminal host

use thiserror::Error;

/// Top-level error type for wheelpick
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Picker error: {0}")]
    Picker(#[from] PickerError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while constructing a column.
///
/// A running column never fails; everything past construction degrades to
/// "disabled" or "clamped".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    #[error("Value at position {0} appears more than once in the domain")]
    DuplicateValue(usize),

    #[error("Margin {margin} must be smaller than the domain length {len}")]
    MarginTooLarge { margin: usize, len: usize },

    #[error("Item height must be positive and finite, got {0}")]
    InvalidItemHeight(f64),

    #[error("A column needs at least one visible slot")]
    NoVisibleSlots,

    #[error("Initial value is not part of the domain")]
    UnknownValue,
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for PickerError
pub type PickerResult<T> = std::result::Result<T, PickerError>;

