//! Parsing command-line arguments.

use clap::{Arg, Command, value_parser};
use grid_of_life::Config;
use std::time::Duration;

/// The parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) interval: Duration,
}

impl Args {
    pub(crate) fn parse() -> Self {
        Self::from_matches(command().get_matches())
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        let rows = matches.get_one::<u32>("ROWS").copied().unwrap_or(20);
        let columns = matches.get_one::<u32>("COLUMNS").copied().unwrap_or(20);
        let width = matches.get_one::<i32>("WIDTH").copied().unwrap_or(800);
        let height = matches.get_one::<i32>("HEIGHT").copied().unwrap_or(600);
        let interval = matches.get_one::<u64>("INTERVAL").copied().unwrap_or(200);

        Self {
            config: Config::new(rows as usize, columns as usize).with_window(width, height),
            interval: Duration::from_millis(interval),
        }
    }
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .long_about(
            "Conway's Game of Life on a fixed grid\n\
             \n\
             Click a cell to toggle it, press the right arrow key to advance \n\
             one generation, or use Start to advance continuously.",
        )
        .arg(
            Arg::new("ROWS")
                .long("rows")
                .short('r')
                .help("Number of grid rows")
                .default_value("20")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("COLUMNS")
                .long("columns")
                .short('c')
                .help("Number of grid columns")
                .default_value("20")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("WIDTH")
                .long("width")
                .help("Width of the drawing area in pixels")
                .default_value("800")
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("HEIGHT")
                .long("height")
                .help("Height of the drawing area in pixels")
                .default_value("600")
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("INTERVAL")
                .long("interval-ms")
                .short('i')
                .help("Milliseconds between generations while running")
                .default_value("200")
                .value_parser(value_parser!(u64).range(1..)),
        )
}
