//! Straight walks from a node to the edge of the grid.

use std::iter::FusedIterator;

use super::Grid;
use crate::direction::Direction;
use crate::node::Node;

/// Nodes met walking from a start node in one direction, excluding the start.
///
/// Ends before the first position outside the grid. Read-only; to walk again,
/// ask the grid for a new ray.
#[derive(Debug, Clone)]
pub struct Ray<'a, T> {
    grid: &'a Grid<T>,
    position: (i32, i32),
    direction: Direction,
    done: bool,
}

impl<'a, T> Iterator for Ray<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.position = self.direction.apply(self.position);
        let (x, y) = self.position;
        let node = self.grid.get(x, y);
        self.done = node.is_none();
        node
    }
}

impl<T> FusedIterator for Ray<'_, T> {}

impl<T> Grid<T> {
    /// Ray cast from `from` towards `direction`.
    pub fn ray(&self, from: &Node<T>, direction: Direction) -> Ray<'_, T> {
        Ray {
            grid: self,
            position: from.position(),
            direction,
            done: false,
        }
    }

    pub fn up_from(&self, from: &Node<T>) -> Ray<'_, T> {
        self.ray(from, Direction::Up)
    }

    pub fn down_from(&self, from: &Node<T>) -> Ray<'_, T> {
        self.ray(from, Direction::Down)
    }

    pub fn left_from(&self, from: &Node<T>) -> Ray<'_, T> {
        self.ray(from, Direction::Left)
    }

    pub fn right_from(&self, from: &Node<T>) -> Ray<'_, T> {
        self.ray(from, Direction::Right)
    }

    pub fn up_left_from(&self, from: &Node<T>) -> Ray<'_, T> {
        self.ray(from, Direction::UpLeft)
    }

    pub fn up_right_from(&self, from: &Node<T>) -> Ray<'_, T> {
        self.ray(from, Direction::UpRight)
    }

    pub fn down_left_from(&self, from: &Node<T>) -> Ray<'_, T> {
        self.ray(from, Direction::DownLeft)
    }

    pub fn down_right_from(&self, from: &Node<T>) -> Ray<'_, T> {
        self.ray(from, Direction::DownRight)
    }
}
