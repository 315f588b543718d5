//! Traversal algorithms over explicit neighbor links.
//!
//! Both [`Grid`](crate::Grid) and [`SparseGrid`](crate::SparseGrid) store
//! their nodes in a single vector and link neighbors by index. The
//! algorithms here only need that vector, so they are provided once on the
//! [`NodeArena`] trait.

use std::collections::VecDeque;

use crate::error::GridError;
use crate::node::{Node, NodeId};

/// Cut-off for [`NodeArena::relax_from`]: a node's remaining neighbors are
/// skipped once one of them has been visited more often than this.
pub const DEFAULT_REVISIT_LIMIT: u32 = 5;

/// A container whose nodes live in one indexable slice.
pub trait NodeArena<T> {
    /// All nodes in storage order, mutably.
    fn arena_mut(&mut self) -> &mut [Node<T>];

    fn reset_visited(&mut self) {
        self.arena_mut().iter_mut().for_each(Node::reset_visited);
    }

    fn reset_distances(&mut self) {
        self.arena_mut().iter_mut().for_each(Node::reset_distance);
    }

    fn clear_neighbors(&mut self) {
        self.arena_mut().iter_mut().for_each(Node::clear_neighbors);
    }

    /// Breadth-first distance fill from `source` over explicit neighbor links.
    ///
    /// Resets visited and distance state first. A dequeued node `c` relaxes
    /// every node that lists `c` among its neighbors and is not waiting in
    /// the queue: when `c.distance + 1` beats the recorded distance, the node
    /// is updated and enqueued again. The result is the number of hops needed
    /// to walk from each node to `source` along neighbor links; nodes with no
    /// such walk stay at [`UNREACHABLE`](crate::UNREACHABLE).
    ///
    /// Nothing beyond the source is reached unless links were populated, for
    /// example with [`Grid::set_neighbors`](crate::Grid::set_neighbors).
    fn fill_distances(&mut self, source: NodeId) -> Result<(), GridError> {
        fill_distances(self.arena_mut(), source)
    }

    /// Depth-first relaxation from `source`, starting at distance 0.
    ///
    /// Visits each linked neighbor that is unvisited or whose distance can be
    /// lowered, recursively. While scanning a node's neighbors the scan stops
    /// once a neighbor has been visited more than `revisit_limit` times.
    /// Scratch state is not reset, so repeated calls accumulate visits.
    fn relax_from(&mut self, source: NodeId, revisit_limit: u32) -> Result<(), GridError> {
        let nodes = self.arena_mut();
        check_id(nodes, source)?;
        relax(nodes, source, 0, revisit_limit);
        Ok(())
    }

    /// Greedy walk from `from` to `to` after a distance fill.
    ///
    /// Each step moves to the unvisited neighbor with the smallest distance,
    /// ties broken by neighbor-list order. Visited state is reset before the
    /// walk and every step is marked visited. The returned path excludes
    /// `from` and ends with `to`.
    fn descend_path(&mut self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>, GridError> {
        let nodes = self.arena_mut();
        check_id(nodes, from)?;
        check_id(nodes, to)?;
        nodes.iter_mut().for_each(Node::reset_visited);

        let mut path = Vec::new();
        let mut current = from;
        while current != to {
            let next = nodes[current]
                .neighbors()
                .iter()
                .copied()
                .filter(|&id| nodes.get(id).is_some_and(|n| !n.is_visited()))
                .min_by_key(|&id| nodes[id].distance())
                .ok_or_else(|| {
                    GridError::InvalidState(format!(
                        "no unvisited neighbor left at {:?} on the way to {:?}",
                        nodes[current].position(),
                        nodes[to].position()
                    ))
                })?;
            nodes[next].visit();
            path.push(next);
            current = next;
        }
        Ok(path)
    }
}

fn check_id<T>(nodes: &[Node<T>], id: NodeId) -> Result<(), GridError> {
    if id < nodes.len() {
        Ok(())
    } else {
        Err(GridError::InvalidInput(format!(
            "node {} is not one of the {} nodes",
            id,
            nodes.len()
        )))
    }
}

fn fill_distances<T>(nodes: &mut [Node<T>], source: NodeId) -> Result<(), GridError> {
    check_id(nodes, source)?;
    for node in nodes.iter_mut() {
        node.reset_visited();
        node.reset_distance();
    }

    // incoming[v]: nodes listing v as a neighbor, in storage order
    let mut incoming: Vec<Vec<NodeId>> = vec![Vec::new(); nodes.len()];
    for (id, node) in nodes.iter().enumerate() {
        for &neighbor in node.neighbors() {
            if let Some(list) = incoming.get_mut(neighbor)
                && list.last() != Some(&id)
            {
                list.push(id);
            }
        }
    }

    let mut queued = vec![false; nodes.len()];
    let mut queue = VecDeque::from([source]);
    queued[source] = true;
    nodes[source].set_distance(0);

    let mut relaxations = 0usize;
    while let Some(current) = queue.pop_front() {
        queued[current] = false;
        let candidate = nodes[current].distance() + 1;
        for &id in &incoming[current] {
            if queued[id] || candidate >= nodes[id].distance() {
                continue;
            }
            nodes[id].set_distance(candidate);
            queued[id] = true;
            queue.push_back(id);
            relaxations += 1;
        }
    }

    log::debug!(
        "filled distances from {:?}: {} relaxations over {} nodes",
        nodes[source].position(),
        relaxations,
        nodes.len()
    );
    Ok(())
}

fn relax<T>(nodes: &mut [Node<T>], id: NodeId, distance: i64, revisit_limit: u32) {
    nodes[id].set_distance(distance);

    let neighbors = nodes[id].neighbors().to_vec();
    for neighbor in neighbors {
        let Some(node) = nodes.get(neighbor) else {
            continue;
        };
        if !node.is_visited() || node.distance() > distance + 1 {
            relax(nodes, neighbor, distance + 1, revisit_limit);
        }
        if nodes[neighbor].visited() > revisit_limit {
            return;
        }
    }
}
