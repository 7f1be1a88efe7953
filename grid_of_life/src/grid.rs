// grid.rs - Cell storage and the generation update for Conway's Game of Life

use crate::error::{Error, Result};

/// Offsets of the eight Moore neighbours, row first.
#[rustfmt::skip]
const NEIGHBOURHOOD: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// One grid position.
///
/// `prev_alive` and `neighbor_count` are only meaningful after the grid has
/// advanced at least once; they describe the generation the current `alive`
/// value was computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    prev_alive: bool,
    neighbor_count: u8,
}

impl Cell {
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn prev_alive(&self) -> bool {
        self.prev_alive
    }

    pub fn neighbor_count(&self) -> u8 {
        self.neighbor_count
    }

    fn toggle(&mut self) {
        self.alive = !self.alive
    }
}

/// Conway's rule applied to the snapshot of a single cell.
#[rustfmt::skip]
fn next_state(prev_alive: bool, neighbor_count: u8) -> bool {
    match (prev_alive, neighbor_count) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// A fixed `rows x columns` board without wraparound.
///
/// Cells live in one row-major buffer: `(row, col)` is stored at
/// `row * columns + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let size = rows
            .checked_mul(columns)
            .filter(|&size| size > 0)
            .ok_or(Error::InvalidDimensions { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::default(); size],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.columns {
            Ok(row * self.columns + col)
        } else {
            Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// The full cell record at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Whether the cell at `(row, col)` is alive in the current generation.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.cell(row, col).map(|cell| cell.alive)
    }

    /// State of `(row, col)` at the start of the last update pass.
    pub fn prev_alive(&self, row: usize, col: usize) -> Result<bool> {
        self.cell(row, col).map(|cell| cell.prev_alive)
    }

    /// Live neighbours of `(row, col)` counted during the last update pass.
    pub fn neighbor_count(&self, row: usize, col: usize) -> Result<u8> {
        self.cell(row, col).map(|cell| cell.neighbor_count)
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx].alive = alive;
        Ok(())
    }

    /// Flips the cell at `(row, col)` between alive and dead.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx].toggle();
        Ok(())
    }

    /// Kills every cell and forgets the cached update state.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Iterates over `(row, col, alive)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx / columns, idx % columns, cell.alive))
    }

    /// Advances the whole board by one generation.
    ///
    /// Every cell is first snapshotted into `prev_alive`, then neighbour
    /// counts are taken from the snapshot, and only then is the rule written
    /// back into `alive`. No cell ever sees a neighbour's new state.
    pub fn advance_generation(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.prev_alive = cell.alive;
        }

        self.update_neighbour_count();

        for cell in self.cells.iter_mut() {
            cell.alive = next_state(cell.prev_alive, cell.neighbor_count);
        }
    }

    /// Recounts the live Moore neighbours of every cell from `prev_alive`.
    /// Positions past the edges are skipped, there is no wraparound.
    fn update_neighbour_count(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let count = self.count_prev_neighbours(row, col);
                self.cells[row * self.columns + col].neighbor_count = count;
            }
        }
    }

    fn count_prev_neighbours(&self, row: usize, col: usize) -> u8 {
        NEIGHBOURHOOD
            .iter()
            .filter_map(|&(dr, dc)| {
                let n_r = row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
                let n_c = col.checked_add_signed(dc).filter(|&c| c < self.columns)?;
                Some(self.cells[n_r * self.columns + n_c].prev_alive)
            })
            .filter(|&alive| alive)
            .count() as u8
    }
}
