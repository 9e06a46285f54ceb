//! Error types for the Life engine

use thiserror::Error;

/// Errors raised by coordinate-indexed grid operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The coordinate pair falls outside `[0, width) x [0, height)`.
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
