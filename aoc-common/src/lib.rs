//! Shared helpers for Advent of Code programs
//!
//! Everything a day's program needs besides the grid: reading the puzzle
//! input, pulling numbers out of lines, and a few small data types that
//! keep coming back.
//!
//! # Example
//!
//! ```
//! use aoc_common::{Input, Line, parse_integers};
//!
//! let input = Input::from("0,9 -> 2,9\n\n3 4 5");
//! let line: Line = input.all_lines().next().unwrap_or_default().parse()?;
//! assert_eq!(line.path().count(), 3);
//! assert_eq!(parse_integers("3 4 5", ' ')?, vec![3, 4, 5]);
//! # Ok::<(), aoc_common::CommonError>(())
//! ```

pub mod cards;
pub mod circular;
pub mod combinatorics;
pub mod cycle;
mod error;
pub mod input;
pub mod line;
pub mod parsing;

pub use cards::{Card, Deck, Rank, Suit};
pub use circular::CircularRange;
pub use combinatorics::{combinations, permutations};
pub use cycle::Cycle;
pub use error::CommonError;
pub use input::{Input, InputSource, parse_integers};
pub use line::Line;
pub use parsing::{bits_to_int, bools_to_int, first_int, ints_after, parts_after, product};
