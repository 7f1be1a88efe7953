// patterns.rs - Startup seed

use crate::grid::Grid;
use log::debug;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// The cells alive when the program starts, as `(row, col)`.
///
/// A diagonal pair near the top-left corner plus a six-cell cluster around
/// `(10, 10)`. It has no special meaning as a Life pattern.
#[rustfmt::skip]
pub const DEMO_SEED: Pattern = Pattern {
    name: "Demo seed",
    cells: &[
        (2, 2), (1, 1),
        (9, 9), (9, 11), (10, 9), (10, 10), (11, 10), (11, 11),
    ],
};

/// Sets every cell of `pattern` alive on top of the current contents.
///
/// Cells that fall outside `grid` are skipped. Returns how many were placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> usize {
    let mut placed = 0;
    for &(row, col) in pattern.cells {
        if grid.set(row, col, true).is_ok() {
            placed += 1;
        }
    }
    if placed < pattern.cells.len() {
        debug!(
            "{}: {} of {} cells do not fit a {}x{} grid",
            pattern.name,
            pattern.cells.len() - placed,
            pattern.cells.len(),
            grid.rows(),
            grid.columns()
        );
    }
    placed
}
