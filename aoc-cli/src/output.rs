//! Output formatting for grid reports

use aoc_grid::Grid;
use chrono::{Local, TimeDelta};
use std::path::Path;

/// Size and origin of one region, for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSummary {
    pub value: char,
    pub size: usize,
    pub first: (i32, i32),
}

/// Output formatter for command results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a heading line, suppressed in quiet mode
    fn heading(&self, text: &str) {
        if !self.quiet {
            println!("{}", text);
        }
    }

    /// Print the grid with its dimensions
    pub fn print_grid(&self, grid: &Grid<char>) {
        self.heading(&format!("{}x{} grid", grid.width(), grid.height()));
        print!("{}", grid);
    }

    /// Print regions, largest first
    pub fn print_regions(&self, total: usize, regions: &[RegionSummary]) {
        self.heading(&format!(
            "{} region(s), showing {}",
            total,
            regions.len()
        ));
        for region in regions {
            if self.quiet {
                println!("{} {}", region.value, region.size);
            } else {
                println!(
                    "'{}' x{} starting at {},{}",
                    region.value, region.size, region.first.0, region.first.1
                );
            }
        }
    }

    /// Print the distance map and how much of the grid was reached
    pub fn print_distances(&self, rendered: &str, reached: usize, farthest: Option<i64>) {
        print!("{}", rendered);
        if self.quiet {
            return;
        }
        match farthest {
            Some(steps) => println!("{} cell(s) reached, farthest {} step(s)", reached, steps),
            None => println!("No cells reached"),
        }
    }

    /// Print a traced path drawn over the grid
    pub fn print_path(&self, rendered: &str, steps: usize) {
        self.heading(&format!("Path of {} step(s):", steps));
        print!("{}", rendered);
    }

    /// Report a written image
    pub fn print_bitmap(&self, path: &Path, width: usize, height: usize, scale: u32) {
        self.heading(&format!(
            "Wrote {}x{} cells at scale {} to {}",
            width,
            height,
            scale,
            path.display()
        ));
    }

    /// Print how long loading and the command took
    pub fn print_timing(&self, load: TimeDelta, compute: TimeDelta) {
        if self.quiet {
            return;
        }
        println!();
        println!(
            "load: {}, compute: {}, finished {}",
            format_duration(load),
            format_duration(compute),
            Local::now().format("%H:%M:%S")
        );
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    match micros {
        0..1_000 => format!("{}µs", micros),
        1_000..1_000_000 => format!("{:.2}ms", micros as f64 / 1_000.0),
        _ => format!("{:.2}s", micros as f64 / 1_000_000.0),
    }
}
