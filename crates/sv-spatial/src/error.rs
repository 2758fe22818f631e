//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `sv-spatial`.
///
/// These cover construction only: queries against a built grid never error —
/// out-of-bounds lookups return the `CellIndex::INVALID` sentinel and
/// flood fills from an invalid start return the empty set.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: u32, rows: u32 },

    #[error("cell size must be positive (got {0})")]
    BadCellSize(f32),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
