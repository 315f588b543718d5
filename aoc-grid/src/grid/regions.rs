//! Flood fill of 4-connected same-value regions.

use std::collections::VecDeque;
use std::convert::Infallible;

use super::Grid;
use crate::arena::NodeArena;
use crate::error::GridError;
use crate::node::NodeId;

/// Lazy iterator over the regions of a grid, see [`Grid::regions`].
///
/// Holds the grid mutably because discovery marks nodes visited.
#[derive(Debug)]
pub struct Regions<'a, T> {
    grid: &'a mut Grid<T>,
    next_seed: NodeId,
}

impl<T: PartialEq> Iterator for Regions<'_, T> {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        let seed = self.grid.next_unvisited(&mut self.next_seed)?;
        let region = self
            .grid
            .expand_region(seed, |a, b| Ok::<_, Infallible>(a == b));
        match region {
            Ok(region) => Some(region),
            Err(never) => match never {},
        }
    }
}

impl<T> Grid<T> {
    fn next_unvisited(&self, cursor: &mut NodeId) -> Option<NodeId> {
        while *cursor < self.nodes.len() {
            let id = *cursor;
            *cursor += 1;
            if !self.nodes[id].is_visited() {
                return Some(id);
            }
        }
        None
    }

    /// Breadth-first expansion from `seed` over unvisited 4-connected
    /// neighbors whose value matches the current node's value.
    fn expand_region<E, F>(&mut self, seed: NodeId, mut same: F) -> Result<Vec<NodeId>, E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        self.nodes[seed].visit();
        let mut region = vec![seed];
        let mut queue = VecDeque::from([seed]);

        while let Some(current) = queue.pop_front() {
            let neighbors: Vec<NodeId> = self.neighbor_ids(&self.nodes[current], false).collect();
            for neighbor in neighbors {
                if self.nodes[neighbor].is_visited() {
                    continue;
                }
                if same(self.nodes[neighbor].value(), self.nodes[current].value())? {
                    self.nodes[neighbor].visit();
                    region.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        Ok(region)
    }
}

impl<T: PartialEq> Grid<T> {
    /// Partitions the grid into maximal 4-connected groups of equal values.
    ///
    /// Visited state is reset when the iterator is created; regions come out
    /// in the row-major order of their first node. Each node belongs to
    /// exactly one region.
    pub fn regions(&mut self) -> Regions<'_, T> {
        self.reset_visited();
        Regions {
            grid: self,
            next_seed: 0,
        }
    }
}

impl<U: PartialEq> Grid<Option<U>> {
    /// [`Grid::regions`] for grids whose cells may be empty.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidState`] when a comparison meets an empty value.
    pub fn try_regions(&mut self) -> Result<Vec<Vec<NodeId>>, GridError> {
        self.reset_visited();
        let mut regions = Vec::new();
        let mut cursor = 0;
        while let Some(seed) = self.next_unvisited(&mut cursor) {
            let region = self.expand_region(seed, |neighbor, current| match (neighbor, current) {
                (None, _) => Err(GridError::InvalidState(
                    "node value is empty during region comparison".to_string(),
                )),
                (Some(a), Some(b)) => Ok(a == b),
                (Some(_), None) => Ok(false),
            })?;
            regions.push(region);
        }
        log::debug!("found {} regions", regions.len());
        Ok(regions)
    }
}
