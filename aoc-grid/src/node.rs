//! A single positioned cell with traversal scratch state.

use std::fmt;

/// Index of a node inside the storage of the container that owns it.
pub type NodeId = usize;

/// Distance held by a node that no traversal has reached.
pub const UNREACHABLE: i64 = i32::MAX as i64;

/// One cell of a 2D lattice, or a vertex of an arbitrary graph when its
/// neighbor list is filled by hand.
///
/// `distance` and `visited` are scratch state for the traversal algorithms;
/// they are not part of the node's identity and must be reset between runs
/// (the grid algorithms that need a clean slate do this themselves).
///
/// Neighbor links are [`NodeId`]s into the same container, so mutual links
/// are allowed and no node owns another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    x: i32,
    y: i32,
    value: T,
    distance: i64,
    visited: u32,
    neighbors: Vec<NodeId>,
}

impl<T> Node<T> {
    /// Creates an unvisited, unreached node with no neighbors.
    pub fn new(x: i32, y: i32, value: T) -> Self {
        Self {
            x,
            y,
            value,
            distance: UNREACHABLE,
            visited: 0,
            neighbors: Vec::new(),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Moves the node. Dense grids never call this; their lookup relies on
    /// positions matching storage order.
    pub fn set_position(&mut self, (x, y): (i32, i32)) {
        self.x = x;
        self.y = y;
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the value, returning the previous one.
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Replaces the value with `f(current)`.
    pub fn update_value<F>(&mut self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.value = f(&self.value);
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Records a distance. Setting a distance counts as a visit.
    pub fn set_distance(&mut self, distance: i64) -> i64 {
        self.visit();
        self.distance = distance;
        distance
    }

    pub fn reset_distance(&mut self) {
        self.distance = UNREACHABLE;
    }

    pub fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Number of times the node has been visited since the last reset.
    pub fn visited(&self) -> u32 {
        self.visited
    }

    pub fn is_visited(&self) -> bool {
        self.visited > 0
    }

    /// Bumps the visit counter and returns the new count.
    pub fn visit(&mut self) -> u32 {
        self.visited += 1;
        self.visited
    }

    pub fn reset_visited(&mut self) {
        self.visited = 0;
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn add_neighbor(&mut self, neighbor: NodeId) {
        self.neighbors.push(neighbor);
    }

    pub fn add_neighbors<I>(&mut self, neighbors: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.neighbors.extend(neighbors);
    }

    pub fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }

    pub fn manhattan_distance(&self, other: &Node<T>) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}", self.x, self.y, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_unvisited_and_unreached() {
        let node = Node::new(3, 4, 'a');
        assert_eq!(node.position(), (3, 4));
        assert_eq!(*node.value(), 'a');
        assert_eq!(node.distance(), UNREACHABLE);
        assert!(!node.is_reached());
        assert!(!node.is_visited());
        assert!(node.neighbors().is_empty());
    }

    #[test]
    fn test_set_distance_counts_as_visit() {
        let mut node = Node::new(0, 0, ());
        node.set_distance(7);
        node.set_distance(3);
        assert_eq!(node.distance(), 3);
        assert_eq!(node.visited(), 2);

        node.reset_visited();
        node.reset_distance();
        assert_eq!(node.visited(), 0);
        assert_eq!(node.distance(), UNREACHABLE);
    }

    #[test]
    fn test_value_setters() {
        let mut node = Node::new(0, 0, 10);
        assert_eq!(node.set_value(11), 10);
        node.update_value(|v| v * 2);
        assert_eq!(*node.value(), 22);
        *node.value_mut() += 1;
        assert_eq!(node.into_value(), 23);
    }

    #[test]
    fn test_display_and_manhattan() {
        let a = Node::new(1, 2, '#');
        let b = Node::new(-2, 6, '.');
        assert_eq!(a.to_string(), "1,2 #");
        assert_eq!(a.manhattan_distance(&b), 7);
    }

    #[test]
    fn test_neighbor_list_keeps_order() {
        let mut node = Node::new(0, 0, ());
        node.add_neighbor(4);
        node.add_neighbors([1, 9]);
        assert_eq!(node.neighbors(), &[4, 1, 9]);
        node.clear_neighbors();
        assert!(node.neighbors().is_empty());
    }
}
