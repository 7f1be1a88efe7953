// main.rs - Game of Life window: click cells to toggle, right arrow to advance

use eframe::egui;
use grid_of_life::Controller;
use log::error;
use std::process;
use std::time::{Duration, Instant};

mod args; // Command-line parsing
mod ui; // eframe::App implementation

use args::Args;

/// Room above the drawing area for the control panel.
const PANEL_HEIGHT: f32 = 80.0;

fn main() {
    env_logger::init();
    let args = Args::parse();

    let controller = match args.config.controller() {
        Ok(controller) => controller,
        Err(e) => {
            error!("invalid configuration: {}", e);
            process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            args.config.window_width as f32,
            args.config.window_height as f32 + PANEL_HEIGHT,
        ]),
        ..Default::default()
    };

    let app = GridOfLifeApp::new(controller, args.interval);
    if let Err(e) = eframe::run_native(
        "Grid of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    ) {
        error!("eframe::run_native() failed: {}", e);
        process::exit(1);
    }
}

/// Front end state around the one [`Controller`].
pub struct GridOfLifeApp {
    controller: Controller,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
}

impl GridOfLifeApp {
    pub fn new(controller: Controller, update_interval: Duration) -> Self {
        Self {
            controller,
            is_running: false,
            last_update: Instant::now(),
            update_interval,
        }
    }
}
