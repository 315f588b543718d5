//! aoc-grid - command-line inspector for character grids

mod cli;
mod commands;
mod config;
mod error;
mod logger;
mod output;

use chrono::TimeDelta;
use clap::Parser;
use cli::Args;
use config::{Config, Task};
use error::CliError;
use output::OutputFormatter;
use std::time::Instant;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logger::init(config.log_level)?;
    log::debug!("resolved config: {:?}", config);

    let formatter = OutputFormatter::new(config.quiet);

    let started = Instant::now();
    let mut grid = commands::load_grid(&config.source)?;
    let load_time = elapsed(started);

    let started = Instant::now();
    match &config.task {
        Task::Show => formatter.print_grid(&grid),
        Task::Regions { top } => {
            let (total, regions) = commands::region_summaries(&mut grid, *top);
            formatter.print_regions(total, &regions);
        }
        Task::Distances { from, to, walls } => {
            let report = commands::distances(&mut grid, *from, *to, walls, config.diagonals)?;
            formatter.print_distances(&report.rendered, report.reached, report.farthest);
            if let Some((rendered, steps)) = &report.path {
                formatter.print_path(rendered, *steps);
            }
        }
        Task::Bitmap {
            output,
            scale,
            on,
            palette,
        } => {
            commands::bitmap(&mut grid, output, *scale, on, *palette)?;
            formatter.print_bitmap(output, grid.width(), grid.height(), *scale);
        }
    }
    formatter.print_timing(load_time, elapsed(started));

    Ok(())
}

/// Wall-clock time since `start` as a chrono delta
fn elapsed(start: Instant) -> TimeDelta {
    TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX)
}
