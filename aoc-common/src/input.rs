//! Puzzle input loading and line-oriented readers.
//!
//! A program reads its input from the file named by its first command-line
//! argument, or from stdin when there is none. [`Input`] holds the whole
//! text and hands out views over its lines.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use itertools::Itertools;

use crate::error::CommonError;

/// Where puzzle input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Picks the source from process arguments, program name first.
    ///
    /// The first argument after the program name is taken as a file path;
    /// a missing or empty argument means stdin.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathBuf>,
    {
        match args.into_iter().nth(1).map(Into::into) {
            Some(path) if !path.as_os_str().is_empty() => Self::File(path),
            _ => Self::Stdin,
        }
    }

    /// [`InputSource::from_args`] over the current process arguments.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args_os())
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "stdin"),
        }
    }
}

/// Whole puzzle input, read once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    text: String,
}

impl Input {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads everything from `source`.
    pub fn load(source: &InputSource) -> Result<Self, CommonError> {
        let input = match source {
            InputSource::File(path) => Self::new(fs::read_to_string(path)?),
            InputSource::Stdin => Self::from_reader(io::stdin().lock())?,
        };
        log::debug!("read {} bytes from {}", input.text.len(), source);
        Ok(input)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, CommonError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every line, blank ones included.
    pub fn all_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.lines()
    }

    /// Lines that contain something other than whitespace.
    pub fn non_blank_lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.all_lines().filter(|line| !line.trim().is_empty())
    }

    /// Lines up to, not including, the first empty line.
    pub fn until_blank(&self) -> impl Iterator<Item = &str> + '_ {
        self.all_lines().take_while(|line| !line.is_empty())
    }

    /// Groups of consecutive non-blank lines, split on blank lines.
    pub fn records(&self) -> Vec<Vec<&str>> {
        let chunks = self
            .all_lines()
            .chunk_by(|line| line.trim().is_empty());
        chunks
            .into_iter()
            .filter(|(blank, _)| !blank)
            .map(|(_, lines)| lines.collect())
            .collect()
    }

    /// One integer per line, up to the first empty line.
    pub fn integers(&self) -> Result<Vec<i64>, CommonError> {
        self.until_blank()
            .enumerate()
            .map(|(index, line)| {
                line.trim()
                    .parse()
                    .map_err(|e| CommonError::parse(index + 1, format!("{:?}: {}", line, e)))
            })
            .collect()
    }

    /// Rows of single digits, up to the first empty line.
    pub fn digit_rows(&self) -> Result<Vec<Vec<u8>>, CommonError> {
        self.until_blank()
            .enumerate()
            .map(|(index, line)| {
                line.chars()
                    .map(|c| {
                        c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                            CommonError::parse(index + 1, format!("{:?} is not a digit", c))
                        })
                    })
                    .collect()
            })
            .collect()
    }

    /// Whitespace-separated integers on every non-blank line.
    pub fn int_rows(&self) -> Result<Vec<Vec<i64>>, CommonError> {
        self.all_lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                parse_integers(line, ' ').map_err(|e| CommonError::parse(index + 1, e.to_string()))
            })
            .collect()
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Integers in `line` separated by `delimiter` or whitespace.
///
/// Empty fields are skipped, so `"1,,2"` with `,` gives `[1, 2]`.
pub fn parse_integers(line: &str, delimiter: char) -> Result<Vec<i64>, CommonError> {
    line.split(|c: char| c == delimiter || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse()
                .map_err(|_| CommonError::InvalidInput(format!("{:?} is not an integer", field)))
        })
        .collect()
}
