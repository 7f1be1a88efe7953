//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Cell ({row}, {col}) is outside the {rows}x{columns} grid.
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },
    /// Grid dimensions must be positive, got {rows}x{columns}.
    InvalidDimensions { rows: usize, columns: usize },
    /// A {width}x{height} viewport is too small to give every cell at least one pixel.
    InvalidViewport { width: i32, height: i32 },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
