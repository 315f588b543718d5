//! Open-ended grid of positioned nodes for simulations.
//!
//! Unlike [`Grid`](crate::Grid), a [`SparseGrid`] does not cover a full
//! rectangle: nodes exist only where something was placed, lookups scan the
//! node list, and nodes may move. Width and height are inclusive coordinate
//! bounds used to reject lookups early.

use crate::arena::NodeArena;
use crate::direction::neighbor_positions;
use crate::error::GridError;
use crate::node::{Node, NodeId};

/// Inclusive extent of the nodes in a sparse grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// A linear-scan collection of positioned nodes.
#[derive(Debug, Clone)]
pub struct SparseGrid<T> {
    entities: Vec<Node<T>>,
    width: i32,
    height: i32,
    step: u64,
}

impl<T> SparseGrid<T> {
    /// Builds a grid from `(x, y, value)` entities.
    ///
    /// When `width` or `height` is zero, both bounds are computed as the
    /// largest x and y among the entities.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyCollection`] if bounds must be computed and there
    /// are no entities.
    pub fn from_entities<I>(entities: I, width: i32, height: i32) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (i32, i32, T)>,
    {
        let entities: Vec<Node<T>> = entities
            .into_iter()
            .map(|(x, y, value)| Node::new(x, y, value))
            .collect();

        let (width, height) = if width == 0 || height == 0 {
            let max_x = entities.iter().map(Node::x).max();
            let max_y = entities.iter().map(Node::y).max();
            match (max_x, max_y) {
                (Some(max_x), Some(max_y)) => (max_x, max_y),
                _ => {
                    return Err(GridError::EmptyCollection(
                        "cannot compute bounds of a sparse grid without entities".to_string(),
                    ));
                }
            }
        } else {
            (width, height)
        };

        Ok(Self {
            entities,
            width,
            height,
            step: 0,
        })
    }

    /// Builds a grid with one node per value, at (column, row).
    pub fn from_rows<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut grid = Self {
            entities: Vec::new(),
            width: 0,
            height: 0,
            step: 0,
        };
        for (y, row) in (0..).zip(rows) {
            for (x, value) in (0..).zip(row) {
                grid.create(x, y, value);
            }
        }
        grid
    }

    /// Largest x accepted by lookups.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Largest y accepted by lookups.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of completed [`SparseGrid::step`] calls.
    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn nodes(&self) -> std::slice::Iter<'_, Node<T>> {
        self.entities.iter()
    }

    pub fn nodes_mut(&mut self) -> std::slice::IterMut<'_, Node<T>> {
        self.entities.iter_mut()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.entities.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.entities.get_mut(id)
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..=self.width).contains(&x) && (0..=self.height).contains(&y)
    }

    /// Id of the first node at `(x, y)`.
    pub fn id_of(&self, x: i32, y: i32) -> Option<NodeId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.entities
            .iter()
            .position(|node| node.position() == (x, y))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Node<T>> {
        self.id_of(x, y).map(|id| &self.entities[id])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Node<T>> {
        self.id_of(x, y).map(|id| &mut self.entities[id])
    }

    /// Adds a node without checking for one already at `(x, y)`.
    ///
    /// Bounds grow to include the new position.
    pub fn create(&mut self, x: i32, y: i32, value: T) -> NodeId {
        self.push(Node::new(x, y, value))
    }

    fn push(&mut self, node: Node<T>) -> NodeId {
        self.width = self.width.max(node.x());
        self.height = self.height.max(node.y());
        self.entities.push(node);
        self.entities.len() - 1
    }

    /// The node at `(x, y)`, created with `value` if there is none.
    pub fn get_or_create(&mut self, x: i32, y: i32, value: T) -> NodeId {
        match self.id_of(x, y) {
            Some(id) => id,
            None => self.create(x, y, value),
        }
    }

    /// The node at `position`, created by `factory` if there is none.
    pub fn get_or_create_with<F>(&mut self, position: (i32, i32), factory: F) -> NodeId
    where
        F: FnOnce((i32, i32)) -> Node<T>,
    {
        match self.id_of(position.0, position.1) {
            Some(id) => id,
            None => self.push(factory(position)),
        }
    }

    /// Moves a node. Moving outside the bounds hides it from lookups.
    pub fn move_to(&mut self, id: NodeId, position: (i32, i32)) -> Result<(), GridError> {
        let node = self.entities.get_mut(id).ok_or_else(|| {
            GridError::InvalidInput(format!("node {} is not in the sparse grid", id))
        })?;
        node.set_position(position);
        Ok(())
    }

    /// Existing nodes around `of`, in [`NEIGHBOR_ORDER`](crate::NEIGHBOR_ORDER).
    pub fn neighbors(&self, of: &Node<T>, with_diagonals: bool) -> Vec<&Node<T>> {
        neighbor_positions(of.position(), with_diagonals)
            .filter_map(|(x, y)| self.get(x, y))
            .collect()
    }

    /// # Errors
    ///
    /// [`GridError::EmptyCollection`] when the grid has no nodes.
    pub fn bounding_box(&self) -> Result<BoundingBox, GridError> {
        let mut nodes = self.entities.iter();
        let first = nodes.next().ok_or_else(|| {
            GridError::EmptyCollection("sparse grid has no nodes".to_string())
        })?;
        let start = BoundingBox {
            min_x: first.x(),
            min_y: first.y(),
            max_x: first.x(),
            max_y: first.y(),
        };
        Ok(nodes.fold(start, |bbox, node| BoundingBox {
            min_x: bbox.min_x.min(node.x()),
            min_y: bbox.min_y.min(node.y()),
            max_x: bbox.max_x.max(node.x()),
            max_y: bbox.max_y.max(node.y()),
        }))
    }

    /// Cells of the bounding box widened by `margin`, row by row.
    ///
    /// With `exclude_empty`, positions without a node are left out instead
    /// of appearing as `None`.
    pub fn viewport(
        &self,
        margin: i32,
        exclude_empty: bool,
    ) -> Result<Vec<Vec<Option<&Node<T>>>>, GridError> {
        let bbox = self.bounding_box()?;
        let rows = (bbox.min_y - margin..=bbox.max_y + margin)
            .map(|y| {
                (bbox.min_x - margin..=bbox.max_x + margin)
                    .map(|x| self.get(x, y))
                    .filter(|cell| cell.is_some() || !exclude_empty)
                    .collect()
            })
            .collect();
        Ok(rows)
    }

    /// [`SparseGrid::viewport`] without a margin.
    pub fn rows(&self, exclude_empty: bool) -> Result<Vec<Vec<Option<&Node<T>>>>, GridError> {
        self.viewport(0, exclude_empty)
    }

    /// Advances the simulation by one step.
    ///
    /// Calls `update(grid, id, step)` once per node, bottom row first and
    /// left to right within a row. The order is fixed before the first call,
    /// so nodes moved or created by `update` are not revisited this step.
    pub fn step<F>(&mut self, mut update: F)
    where
        F: FnMut(&mut Self, NodeId, u64),
    {
        self.step += 1;
        let step = self.step;
        let mut order: Vec<NodeId> = (0..self.entities.len()).collect();
        order.sort_by_key(|&id| {
            let node = &self.entities[id];
            (std::cmp::Reverse(node.y()), node.x())
        });
        for id in order {
            update(self, id, step);
        }
    }

    /// First free position among below, below-left and below-right of the
    /// node, or `None` when all three are occupied.
    pub fn try_move(&self, id: NodeId) -> Option<(i32, i32)> {
        let (x, y) = self.entities.get(id)?.position();
        [(x, y + 1), (x - 1, y + 1), (x + 1, y + 1)]
            .into_iter()
            .find(|&(x, y)| self.get(x, y).is_none())
    }

    pub fn each<F>(&mut self, action: F) -> &mut Self
    where
        F: FnMut(&mut Node<T>),
    {
        self.entities.iter_mut().for_each(action);
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

    /// Text picture of the bounding box, `empty` standing in for positions
    /// without a node. Empty grids render as an empty string.
    pub fn render(&self, empty: &str) -> String
    where
        T: std::fmt::Display,
    {
        let Ok(rows) = self.rows(false) else {
            return String::new();
        };
        let mut out = String::new();
        for row in rows {
            for cell in row {
                match cell {
                    Some(node) => out.push_str(&node.value().to_string()),
                    None => out.push_str(empty),
                }
            }
            out.push('\n');
        }
        out
    }
}

impl<T> NodeArena<T> for SparseGrid<T> {
    fn arena_mut(&mut self) -> &mut [Node<T>] {
        &mut self.entities
    }
}

impl<T> std::ops::Index<NodeId> for SparseGrid<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        &self.entities[id]
    }
}

impl<T> std::ops::IndexMut<NodeId> for SparseGrid<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.entities[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sand() -> SparseGrid<char> {
        SparseGrid::from_entities([(1, 0, 'o'), (1, 2, '#'), (0, 2, '#')], 0, 0).unwrap()
    }

    #[test]
    fn test_bounds_computed_from_entities() {
        let grid = sand();
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 2);
        assert_eq!(
            grid.bounding_box().unwrap(),
            BoundingBox {
                min_x: 0,
                min_y: 0,
                max_x: 1,
                max_y: 2
            }
        );
    }

    #[test]
    fn test_empty_entities_need_explicit_bounds() {
        let computed = SparseGrid::<char>::from_entities([], 0, 0);
        assert!(matches!(computed, Err(GridError::EmptyCollection(_))));

        let explicit = SparseGrid::<char>::from_entities([], 10, 10).unwrap();
        assert!(explicit.is_empty());
        assert!(matches!(
            explicit.bounding_box(),
            Err(GridError::EmptyCollection(_))
        ));
        assert_eq!(explicit.render("."), "");
    }

    #[test]
    fn test_lookup_and_get_or_create() {
        let mut grid = sand();
        assert_eq!(*grid.get(1, 2).unwrap().value(), '#');
        assert!(grid.get(0, 0).is_none());
        assert!(grid.get(-1, 0).is_none());

        let before = grid.len();
        let existing = grid.get_or_create(1, 2, 'x');
        assert_eq!(grid.len(), before);
        assert_eq!(*grid[existing].value(), '#');

        let created = grid.get_or_create_with((4, 5), |(x, y)| Node::new(x, y, '~'));
        assert_eq!(grid.len(), before + 1);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.id_of(4, 5), Some(created));
    }

    #[test]
    fn test_create_allows_duplicates() {
        let mut grid = sand();
        let duplicate = grid.create(1, 0, 'x');
        assert_eq!(grid.id_of(1, 0), Some(0));
        assert_ne!(duplicate, 0);
    }

    #[test]
    fn test_try_move_falls_then_slides() {
        let mut grid = sand();
        assert_eq!(grid.try_move(0), Some((1, 1)));
        grid.move_to(0, (1, 1)).unwrap();
        // below and below-left are rock; below-right is free
        assert_eq!(grid.try_move(0), Some((2, 2)));
        grid.create(2, 2, '#');
        assert_eq!(grid.try_move(0), None);
    }

    #[test]
    fn test_step_visits_bottom_rows_first() {
        let mut grid = sand();
        let mut seen = Vec::new();
        grid.step(|grid, id, step| {
            assert_eq!(step, 1);
            seen.push(grid[id].position());
        });
        assert_eq!(seen, vec![(0, 2), (1, 2), (1, 0)]);
        assert_eq!(grid.steps(), 1);
    }

    #[test]
    fn test_render_and_viewport() {
        let grid = sand();
        assert_eq!(grid.render("."), ".o\n..\n##\n");

        let view = grid.viewport(1, false).unwrap();
        assert_eq!(view.len(), 5);
        assert!(view.iter().all(|row| row.len() == 4));

        let occupied = grid.rows(true).unwrap();
        assert_eq!(occupied.iter().map(Vec::len).collect::<Vec<_>>(), vec![1, 0, 2]);
    }

    #[test]
    fn test_neighbors_only_existing_nodes() {
        let grid = sand();
        let rock = grid.get(1, 2).unwrap();
        let around: Vec<_> = grid
            .neighbors(rock, true)
            .into_iter()
            .map(Node::position)
            .collect();
        assert_eq!(around, vec![(0, 2)]);
    }

    #[test]
    fn test_fill_distances_over_links() {
        let mut grid = SparseGrid::from_rows(["abc".chars()]);
        grid[1].add_neighbor(0);
        grid[2].add_neighbor(1);
        grid.fill_distances(0).unwrap();
        let distances: Vec<_> = grid.nodes().map(Node::distance).collect();
        assert_eq!(distances, vec![0, 1, 2]);
    }
}
