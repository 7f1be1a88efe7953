// controller.rs - The single owner of the grid, driven by input events

use egui::Color32;
use log::{debug, info};

use crate::error::Result;
use crate::grid::Grid;
use crate::layout::{CellRect, Layout};
use crate::patterns::{self, DEMO_SEED};

/// Colours used to draw the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
    pub background: Color32,
    pub lines: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color32::from_rgb(255, 255, 0),
            dead: Color32::from_rgb(128, 128, 128),
            background: Color32::WHITE,
            lines: Color32::BLACK,
        }
    }
}

impl Palette {
    pub fn cell_color(&self, alive: bool) -> Color32 {
        if alive { self.alive } else { self.dead }
    }
}

/// Applies pointer and advance events to a [`Grid`] laid out by a [`Layout`].
///
/// `generation` counts advances since construction or the last
/// [`clear`](Self::clear); it is informational only.
#[derive(Clone, Debug)]
pub struct Controller {
    grid: Grid,
    layout: Layout,
    palette: Palette,
    generation: u64,
}

impl Controller {
    /// An empty board with the dimensions of `layout`.
    pub fn new(layout: Layout) -> Result<Self> {
        let grid = Grid::new(layout.rows(), layout.columns())?;
        info!(
            "{}x{} grid in viewport {:?}",
            grid.rows(),
            grid.columns(),
            layout.viewport()
        );
        Ok(Self {
            grid,
            layout,
            palette: Palette::default(),
            generation: 0,
        })
    }

    /// A board holding the startup demo pattern.
    pub fn seeded(layout: Layout) -> Result<Self> {
        let mut controller = Self::new(layout)?;
        patterns::apply_pattern(&mut controller.grid, &DEMO_SEED);
        Ok(controller)
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Toggles the cell under pixel `(x, y)`, if any, and returns it.
    pub fn on_pointer_release(&mut self, x: i32, y: i32) -> Result<Option<(usize, usize)>> {
        match self.layout.cell_for_point(x, y) {
            Some((row, col)) => {
                self.grid.toggle(row, col)?;
                debug!("pointer at ({x}, {y}) toggled r: {row} c: {col}");
                Ok(Some((row, col)))
            }
            None => {
                debug!("pointer at ({x}, {y}) is outside the grid");
                Ok(None)
            }
        }
    }

    /// Advances the board one generation.
    pub fn on_advance_command(&mut self) {
        self.grid.advance_generation();
        self.generation += 1;
        info!(
            "generation {}, population {}",
            self.generation,
            self.grid.population()
        );
    }

    /// Every cell's rectangle with the colour for its current state.
    pub fn render_snapshot(&self) -> Vec<(CellRect, Color32)> {
        self.grid
            .iter()
            .map(|(row, col, alive)| {
                (
                    self.layout.cell_rect(row, col),
                    self.palette.cell_color(alive),
                )
            })
            .collect()
    }

    /// Kills every cell and restarts the generation count.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        info!("grid cleared");
    }

    /// Clears the board and puts the demo pattern back.
    pub fn reseed(&mut self) {
        self.clear();
        patterns::apply_pattern(&mut self.grid, &DEMO_SEED);
    }
}
