//! Configuration resolution from CLI args

use crate::cli::{Args, Command, Palette};
use crate::error::CliError;
use aoc_common::InputSource;
use log::LevelFilter;
use std::path::PathBuf;

/// What to do with the grid, with validated arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Show,
    Regions {
        top: Option<usize>,
    },
    Distances {
        from: (i32, i32),
        to: Option<(i32, i32)>,
        walls: Vec<char>,
    },
    Bitmap {
        output: PathBuf,
        scale: u32,
        on: Vec<char>,
        palette: Palette,
    },
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Where the grid is read from
    pub source: InputSource,
    /// Whether neighbor links include diagonals
    pub diagonals: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Most detailed log level shown on stderr
    pub log_level: LevelFilter,
    /// Selected command
    pub task: Task,
}

impl Config {
    /// Build config from CLI args, validating command arguments
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let source = match args.input {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        };

        let task = match args.command {
            Command::Show => Task::Show,
            Command::Regions { top } => Task::Regions { top },
            Command::Distances { from, to, walls } => Task::Distances {
                from: parse_point(&from)?,
                to: to.as_deref().map(parse_point).transpose()?,
                walls,
            },
            Command::Bitmap {
                output,
                scale,
                on,
                palette,
            } => {
                if scale == 0 {
                    return Err(CliError::Config("Scale must be at least 1".to_string()));
                }
                Task::Bitmap {
                    output,
                    scale,
                    on,
                    palette,
                }
            }
        };

        Ok(Config {
            source,
            diagonals: args.diagonals,
            quiet: args.quiet,
            log_level: log_level(args.verbose),
            task,
        })
    }
}

/// Map the number of `-v` flags to a log level
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Parse a cell written as `X,Y`
pub fn parse_point(text: &str) -> Result<(i32, i32), CliError> {
    let invalid = || CliError::Config(format!("Invalid cell '{}': expected X,Y", text));
    let (x, y) = text.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(argv).unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4").unwrap(), (3, 4));
        assert_eq!(parse_point(" 0 , -2 ").unwrap(), (0, -2));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_defaults_to_stdin() {
        let config = config(&["aoc-grid", "show"]).unwrap();
        assert_eq!(config.source, InputSource::Stdin);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.task, Task::Show);
        assert!(!config.diagonals);
    }

    #[test]
    fn test_distances_arguments() {
        let config = config(&[
            "aoc-grid", "-i", "day10.txt", "-vv", "distances", "--from", "1,2", "--to", "5,5",
            "--wall", "#", "--wall", "|",
        ])
        .unwrap();
        assert_eq!(config.source, InputSource::File(PathBuf::from("day10.txt")));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(
            config.task,
            Task::Distances {
                from: (1, 2),
                to: Some((5, 5)),
                walls: vec!['#', '|'],
            }
        );
    }

    #[test]
    fn test_invalid_point_rejected() {
        let result = config(&["aoc-grid", "distances", "--from", "12"]);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let result = config(&["aoc-grid", "bitmap", "--output", "out.bmp", "--scale", "0"]);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_bitmap_palette() {
        let config = config(&[
            "aoc-grid", "bitmap", "-o", "out.bmp", "--palette", "regions", "--on", "#",
        ])
        .unwrap();
        assert_eq!(
            config.task,
            Task::Bitmap {
                output: PathBuf::from("out.bmp"),
                scale: 1,
                on: vec!['#'],
                palette: Palette::Regions,
            }
        );
    }
}
