// config.rs - Startup parameters supplied by the presentation layer

use crate::controller::Controller;
use crate::error::Result;
use crate::layout::{CellRect, Layout};

/// Grid and window dimensions fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub columns: usize,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            window_width: 800,
            window_height: 600,
        }
    }
}

impl Config {
    /// A `rows x columns` grid in the default window.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::default().with_grid(rows, columns)
    }

    pub fn with_grid(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_window(mut self, width: i32, height: i32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn background(&self) -> CellRect {
        CellRect::new(0, 0, self.window_width, self.window_height)
    }

    /// Checks the parameters without building anything.
    pub fn validate(&self) -> Result<()> {
        self.layout().map(|_| ())
    }

    pub fn layout(&self) -> Result<Layout> {
        Layout::from_background(self.background(), self.rows, self.columns)
    }

    /// The seeded controller the program starts with.
    pub fn controller(&self) -> Result<Controller> {
        Controller::seeded(self.layout()?)
    }
}
