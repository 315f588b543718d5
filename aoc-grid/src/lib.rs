//! Grid toolkit for puzzle solving
//!
//! Two-dimensional grids of [`Node`]s, each carrying a value, its position and
//! some scratch state used by the traversal algorithms.
//!
//! # Overview
//!
//! This library provides:
//! - A dense rectangular [`Grid`] with O(1) bounds-checked lookup
//! - Neighbor enumeration in a fixed order, with or without diagonals
//! - Breadth-first distance fill over explicit neighbor links
//! - Flood fill of same-value regions
//! - Ray casts in all eight directions and end-relative slicing
//! - A growable [`SparseGrid`] for unbounded, mostly empty worlds
//! - Text rendering and 24-bit BMP export
//!
//! # Quick Example
//!
//! ```
//! use aoc_grid::{Grid, NodeArena};
//!
//! let mut grid: Grid<char> = "..#\n...\n#..".parse()?;
//!
//! // Link every node to the open cells around it, then measure from the
//! // top-left corner.
//! grid.set_neighbors(false, |node| *node.value() != '#');
//! grid.fill_distances(0)?;
//! assert_eq!(grid.get(2, 2).map(|node| node.distance()), Some(4));
//!
//! let sizes: Vec<usize> = grid.regions().map(|region| region.len()).collect();
//! assert_eq!(sizes, vec![7, 1, 1]);
//! # Ok::<(), aoc_grid::GridError>(())
//! ```
//!
//! # Key Concepts
//!
//! ## Coordinates
//!
//! `x` grows to the right and `y` grows downward, so "up" is `y - 1`. A dense
//! grid stores node `(x, y)` at [`NodeId`] `y * width + x`.
//!
//! ## Neighbor links
//!
//! Geometric neighbors are computed on demand by [`Grid::neighbors`]. The
//! graph algorithms on [`NodeArena`] instead follow the links stored on each
//! node, which callers fill with [`Grid::set_neighbors`] or by hand. Links may
//! be one-way.

mod arena;
mod bitmap;
mod direction;
mod error;
mod grid;
mod node;
mod render;
mod sparse;

pub use arena::{DEFAULT_REVISIT_LIMIT, NodeArena};
pub use bitmap::{PIXEL_DATA_OFFSET, Rgb, row_stride};
pub use direction::{Direction, NEIGHBOR_ORDER, neighbor_positions};
pub use error::GridError;
pub use grid::{AxisRange, Grid, Ray, Regions};
pub use node::{Node, NodeId, UNREACHABLE};
pub use sparse::{BoundingBox, SparseGrid};
