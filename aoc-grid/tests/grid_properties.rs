//! Property-based tests for dense grid construction and traversal
//!
//! **Feature: dense-grid**

use aoc_grid::{Grid, NodeArena, SparseGrid};
use proptest::prelude::*;

/// Rectangular rows of small values, up to 8×8.
fn rows_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1usize..=8, 1usize..=8).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(0u8..4, width), height)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Feature: dense-grid, Property 1: Lookup returns the node at that position**
    /// *For any* grid and any in-bounds `(x, y)`, `get(x, y)` yields the node
    /// whose position is `(x, y)` and whose value is `rows[y][x]`.
    #[test]
    fn prop_lookup_matches_position(rows in rows_strategy()) {
        let grid = Grid::from_rows(rows.clone()).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                let node = grid.get(x as i32, y as i32);
                prop_assert!(node.is_some());
                let node = node.unwrap();
                prop_assert_eq!(node.position(), (x as i32, y as i32));
                prop_assert_eq!(node.value(), value);
            }
        }
    }

    /// **Feature: dense-grid, Property 2: Out-of-bounds lookup is absent**
    /// *For any* grid and any coordinate outside `[0, width) × [0, height)`,
    /// `get` returns `None`.
    #[test]
    fn prop_out_of_bounds_is_none(rows in rows_strategy(), x in -20i32..20, y in -20i32..20) {
        let grid = Grid::from_rows(rows).unwrap();
        let inside = x >= 0 && y >= 0 && (x as usize) < grid.width() && (y as usize) < grid.height();
        prop_assert_eq!(grid.get(x, y).is_some(), inside);
    }

    /// **Feature: dense-grid, Property 3: Rows reproduce the input**
    /// *For any* rectangular input, reading the grid back row by row gives
    /// the input values.
    #[test]
    fn prop_rows_round_trip(rows in rows_strategy()) {
        let grid = Grid::from_rows(rows.clone()).unwrap();
        let read: Vec<Vec<u8>> = grid
            .rows()
            .map(|row| row.iter().map(|node| *node.value()).collect())
            .collect();
        prop_assert_eq!(read, rows);
    }

    /// **Feature: dense-grid, Property 4: Slicing never panics**
    /// *For any* grid and any range bounds, slices only return nodes inside
    /// the grid.
    #[test]
    fn prop_slices_stay_in_bounds(
        rows in rows_strategy(),
        start in -20i32..20,
        end in -20i32..20,
        line in -10i32..10,
    ) {
        let grid = Grid::from_rows(rows).unwrap();
        let row: Vec<_> = grid.slice_row(start..end, line).collect();
        let column: Vec<_> = grid.slice_column(line, start..).collect();
        let region: Vec<_> = grid.region(start..end, ..end).collect();
        for node in row.iter().chain(&column).chain(&region) {
            prop_assert!(grid.get(node.x(), node.y()).is_some());
        }
        prop_assert!(row.len() <= grid.width());
        prop_assert!(column.len() <= grid.height());
    }

    /// **Feature: dense-grid, Property 5: Uniform grids form one region**
    /// *For any* grid where every value is equal, `regions` yields exactly one
    /// region containing every node.
    #[test]
    fn prop_uniform_grid_is_one_region(width in 1usize..=8, height in 1usize..=8) {
        let mut grid = Grid::from_rows(vec![vec![7u8; width]; height]).unwrap();
        let regions: Vec<_> = grid.regions().collect();
        prop_assert_eq!(regions.len(), 1);
        prop_assert_eq!(regions[0].len(), width * height);
    }

    /// **Feature: dense-grid, Property 6: Regions partition the grid**
    /// *For any* grid, every node appears in exactly one region.
    #[test]
    fn prop_regions_partition(rows in rows_strategy()) {
        let mut grid = Grid::from_rows(rows).unwrap();
        let len = grid.len();
        let mut seen = vec![0usize; len];
        for region in grid.regions() {
            for id in region {
                seen[id] += 1;
            }
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
    }

    /// **Feature: dense-grid, Property 7: Open grid distances are Manhattan**
    /// *For any* fully linked 4-connected grid and any source, every node's
    /// distance equals its Manhattan distance to the source.
    #[test]
    fn prop_open_grid_distances_are_manhattan(
        width in 1usize..=8,
        height in 1usize..=8,
        seed in any::<prop::sample::Index>(),
    ) {
        let mut grid = Grid::from_rows(vec![vec![(); width]; height]).unwrap();
        grid.set_neighbors(false, |_| true);
        let source = seed.index(grid.len());
        grid.fill_distances(source).unwrap();
        let origin = grid[source].clone();
        for node in grid.nodes() {
            prop_assert_eq!(node.distance(), i64::from(node.manhattan_distance(&origin)));
        }
    }

    /// **Feature: sparse-grid, Property 8: Created nodes are found again**
    /// *For any* set of distinct positions, `get_or_create` stores one node per
    /// position and `get` finds each of them.
    #[test]
    fn prop_sparse_get_or_create(positions in prop::collection::hash_set((0i32..30, 0i32..30), 1..20)) {
        let mut grid = SparseGrid::from_entities([(0, 0, 'o')], 1, 1).unwrap();
        for &(x, y) in &positions {
            grid.get_or_create(x, y, '#');
        }
        let expected = positions.len() + usize::from(!positions.contains(&(0, 0)));
        prop_assert_eq!(grid.len(), expected);
        for &(x, y) in &positions {
            prop_assert!(grid.get(x, y).is_some());
            prop_assert!(grid.width() >= x && grid.height() >= y);
        }
    }
}
