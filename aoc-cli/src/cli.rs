//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How bitmap pixels are colored
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Palette {
    /// White for "on" characters, black for everything else (default)
    #[default]
    Mono,
    /// One color per same-character region
    Regions,
}

/// Character grid inspector
#[derive(Parser, Debug)]
#[command(
    name = "aoc-grid",
    about = "Inspect character grids from puzzle input",
    version
)]
pub struct Args {
    /// Input file (reads stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Allow diagonal steps when measuring distances
    #[arg(long)]
    pub diagonals: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    pub quiet: bool,

    /// Log verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the grid and its size
    Show,

    /// List same-character regions, largest first
    Regions {
        /// Only print the N largest regions
        #[arg(long)]
        top: Option<usize>,
    },

    /// Print every cell's step distance to a target cell
    Distances {
        /// Target cell as X,Y
        #[arg(long)]
        from: String,

        /// Also trace a shortest path from this cell, as X,Y
        #[arg(long)]
        to: Option<String>,

        /// Characters that cannot be walked through (repeatable)
        #[arg(long = "wall")]
        walls: Vec<char>,
    },

    /// Write the grid as a 24-bit BMP image
    Bitmap {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Pixels per cell along each axis
        #[arg(long, default_value_t = 1)]
        scale: u32,

        /// Characters drawn white in the mono palette (repeatable; default: anything but '.')
        #[arg(long = "on")]
        on: Vec<char>,

        /// Pixel coloring
        #[arg(long, value_enum, default_value = "mono")]
        palette: Palette,
    },
}
