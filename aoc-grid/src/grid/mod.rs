//! Dense rectangular grid of [`Node`]s.
//!
//! Nodes are stored row-major: the node at `(x, y)` lives at index
//! `y * width + x`, and that index is its [`NodeId`]. Every positional
//! operation (neighbors, rays, slices, single steps) resolves coordinates
//! through [`Grid::index_of`], so an out-of-bounds position simply yields
//! nothing.

mod ray;
mod regions;
mod slice;


use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::arena::NodeArena;
use crate::direction::{Direction, neighbor_positions};
use crate::error::GridError;
use crate::node::{Node, NodeId};

pub use ray::Ray;
pub use regions::Regions;
pub use slice::AxisRange;

/// A `width × height` grid of nodes with fixed shape and mutable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    nodes: Vec<Node<T>>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Builds a grid from rows of values.
    ///
    /// The width is the length of the first row and the height is the
    /// number of rows. Every row must have the same length.
    ///
    /// # Errors
    ///
    /// * [`GridError::RaggedRow`] if a row's length differs from the first
    /// * [`GridError::InvalidInput`] if a coordinate does not fit in `i32`
    pub fn from_rows<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        Self::from_rows_with(rows, |_| {})
    }

    /// Like [`Grid::from_rows`], calling `on_create` on each node right
    /// after it is created.
    pub fn from_rows_with<R, I, F>(rows: R, mut on_create: F) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Node<T>),
    {
        let mut nodes = Vec::new();
        let mut width = None;
        let mut height = 0usize;

        for (row_index, row) in rows.into_iter().enumerate() {
            let y = coordinate(row_index)?;
            let row_start = nodes.len();
            for (column, value) in row.into_iter().enumerate() {
                let mut node = Node::new(coordinate(column)?, y, value);
                on_create(&mut node);
                nodes.push(node);
            }

            let found = nodes.len() - row_start;
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::RaggedRow {
                    row: row_index,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        log::trace!("built {}x{} grid", width, height);
        Ok(Self {
            nodes,
            width,
            height,
        })
    }

    /// Builds a grid from text lines, mapping every character with `factory`.
    pub fn from_chars<L, S, F>(lines: L, mut factory: F) -> Result<Self, GridError>
    where
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(char) -> T,
    {
        let rows: Vec<Vec<T>> = lines
            .into_iter()
            .map(|line| line.as_ref().chars().map(&mut factory).collect())
            .collect();
        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Storage index of `(x, y)`, or `None` when outside the grid.
    ///
    /// This is the only bounds check in the grid.
    pub fn index_of(&self, x: i32, y: i32) -> Option<NodeId> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Node<T>> {
        self.index_of(x, y).map(|id| &self.nodes[id])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Node<T>> {
        self.index_of(x, y).map(|id| &mut self.nodes[id])
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id)
    }

    /// Id of a node held by this grid.
    pub fn id(&self, node: &Node<T>) -> Option<NodeId> {
        self.index_of(node.x(), node.y())
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node<T>> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> std::slice::IterMut<'_, Node<T>> {
        self.nodes.iter_mut()
    }

    /// In-bounds neighbors of `of`, in [`NEIGHBOR_ORDER`](crate::NEIGHBOR_ORDER).
    pub fn neighbor_ids(
        &self,
        of: &Node<T>,
        with_diagonals: bool,
    ) -> impl Iterator<Item = NodeId> + '_ {
        neighbor_positions(of.position(), with_diagonals).filter_map(|(x, y)| self.index_of(x, y))
    }

    pub fn neighbors(
        &self,
        of: &Node<T>,
        with_diagonals: bool,
    ) -> impl Iterator<Item = &Node<T>> + '_ {
        self.neighbor_ids(of, with_diagonals)
            .map(|id| &self.nodes[id])
    }

    /// The node one step from `from` in `direction`.
    pub fn step(&self, from: &Node<T>, direction: Direction) -> Option<&Node<T>> {
        let (x, y) = direction.apply(from.position());
        self.get(x, y)
    }

    pub fn up(&self, from: &Node<T>) -> Option<&Node<T>> {
        self.step(from, Direction::Up)
    }

    pub fn down(&self, from: &Node<T>) -> Option<&Node<T>> {
        self.step(from, Direction::Down)
    }

    pub fn left(&self, from: &Node<T>) -> Option<&Node<T>> {
        self.step(from, Direction::Left)
    }

    pub fn right(&self, from: &Node<T>) -> Option<&Node<T>> {
        self.step(from, Direction::Right)
    }

    /// Rows top to bottom, each as a slice of nodes left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Node<T>]> + '_ {
        // chunks() panics on a zero size; a zero-width grid has no nodes anyway
        self.nodes.chunks(self.width.max(1))
    }

    /// Nodes of row `y`, left to right. Empty when `y` is out of range.
    pub fn row(&self, y: i32) -> impl Iterator<Item = &Node<T>> + '_ {
        (0..self.width as i32).filter_map(move |x| self.get(x, y))
    }

    /// Nodes of column `x`, top to bottom. Empty when `x` is out of range.
    pub fn column(&self, x: i32) -> impl Iterator<Item = &Node<T>> + '_ {
        (0..self.height as i32).filter_map(move |y| self.get(x, y))
    }

    /// Re-links every node to its in-bounds grid neighbors accepted by
    /// `include`. Existing links are dropped first.
    ///
    /// `include` receives the candidate neighbor, so filtering on the
    /// neighbor's value can produce one-way links.
    pub fn set_neighbors<F>(&mut self, with_diagonals: bool, include: F)
    where
        F: Fn(&Node<T>) -> bool,
    {
        let links: Vec<Vec<NodeId>> = self
            .nodes
            .iter()
            .map(|node| {
                self.neighbor_ids(node, with_diagonals)
                    .filter(|&id| include(&self.nodes[id]))
                    .collect()
            })
            .collect();

        for (node, neighbors) in self.nodes.iter_mut().zip(links) {
            node.clear_neighbors();
            node.add_neighbors(neighbors);
        }
    }

    /// Number of nodes for which `predicate(grid, node)` holds.
    pub fn count<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&Self, &Node<T>) -> bool,
    {
        self.nodes.iter().filter(|node| predicate(self, node)).count()
    }

    /// Applies `action` to every node in storage order.
    pub fn each<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut(&mut Node<T>),
    {
        self.nodes.iter_mut().for_each(action);
        self
    }

    /// Runs `operation` until it returns `false`.
    pub fn while_true<F>(&mut self, mut operation: F) -> &mut Self
    where
        F: FnMut(&mut Self) -> bool,
    {
        while operation(self) {}
        self
    }

    /// Runs `operation` until it returns `true`.
    pub fn until<F>(&mut self, mut operation: F) -> &mut Self
    where
        F: FnMut(&mut Self) -> bool,
    {
        while !operation(self) {}
        self
    }

    /// Walks from `start` with `next` and compares each visited value with
    /// `sequence` using `are_equal`.
    ///
    /// `start` is compared with the first element. Returns `false` as soon
    /// as a comparison fails or the walk runs out of nodes before the
    /// sequence is exhausted.
    pub fn sequence_matches_by<'a, N, E>(
        &'a self,
        sequence: &[T],
        start: &'a Node<T>,
        mut next: N,
        mut are_equal: E,
    ) -> bool
    where
        N: FnMut(&'a Node<T>) -> Option<&'a Node<T>>,
        E: FnMut(&T, &T) -> bool,
    {
        let mut current = Some(start);
        for expected in sequence {
            let Some(node) = current else {
                return false;
            };
            if !are_equal(node.value(), expected) {
                return false;
            }
            current = next(node);
        }
        true
    }
}

impl<T: PartialEq> Grid<T> {
    /// [`Grid::sequence_matches_by`] with `==`.
    pub fn sequence_matches<'a, N>(&'a self, sequence: &[T], start: &'a Node<T>, next: N) -> bool
    where
        N: FnMut(&'a Node<T>) -> Option<&'a Node<T>>,
    {
        self.sequence_matches_by(sequence, start, next, |a, b| a == b)
    }
}

impl<T> NodeArena<T> for Grid<T> {
    fn arena_mut(&mut self) -> &mut [Node<T>] {
        &mut self.nodes
    }
}

impl<T> Index<NodeId> for Grid<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }
}

impl<T> IndexMut<NodeId> for Grid<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a Node<T>;
    type IntoIter = std::slice::Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    /// Parses lines up to the first blank line, one node per character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chars(s.lines().take_while(|line| !line.is_empty()), |c| c)
    }
}

fn coordinate(index: usize) -> Result<i32, GridError> {
    i32::try_from(index)
        .map_err(|_| GridError::InvalidInput(format!("coordinate {} does not fit in i32", index)))
}
