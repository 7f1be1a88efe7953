//! Conway's Game of Life on a fixed grid, with the mapping between window
//! pixels and cells that a click-to-toggle front end needs.
//!
//! [`Controller`] is the entry point: it owns a [`Grid`], lays it out with a
//! [`Layout`], toggles cells on pointer release and advances generations on
//! request. Drawing is left to the caller through
//! [`Controller::render_snapshot`] and [`Layout::grid_lines`].

mod config;
mod controller;
mod error;
mod grid;
mod layout;
pub mod patterns;

pub use config::Config;
pub use controller::{Controller, Palette};
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use layout::{CellRect, Layout, LineSegment};
