//! Text rendering of dense grids.

use std::collections::HashMap;
use std::fmt;

use crate::grid::Grid;
use crate::node::Node;

impl<T> Grid<T> {
    /// One line per row, each cell drawn by `cell`.
    pub fn render<F>(&self, mut cell: F) -> String
    where
        F: FnMut(&Node<T>) -> String,
    {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for row in self.rows() {
            for node in row {
                out.push_str(&cell(node));
            }
            out.push('\n');
        }
        out
    }

    /// Last digit of every node's distance, `.` where unreached.
    pub fn render_distances(&self) -> String {
        self.render(|node| {
            if node.is_reached() {
                (node.distance() % 10).to_string()
            } else {
                ".".to_string()
            }
        })
    }
}

impl<T: fmt::Display> Grid<T> {
    /// Values, with `overlay` sprites drawn over the listed positions.
    pub fn render_overlay(&self, overlay: &HashMap<(i32, i32), String>) -> String {
        self.render(|node| match overlay.get(&node.position()) {
            Some(sprite) => sprite.clone(),
            None => node.value().to_string(),
        })
    }

    /// Values within `size - 1` cells of `(x, y)` on both axes.
    ///
    /// Rows with nothing in the window are omitted.
    pub fn render_window(&self, x: i32, y: i32, size: i32) -> String {
        let mut out = String::new();
        let Ok(size) = u32::try_from(size) else {
            return out;
        };
        for row in self.rows() {
            let mut any = false;
            for node in row {
                if node.x().abs_diff(x) < size && node.y().abs_diff(y) < size {
                    out.push_str(&node.value().to_string());
                    any = true;
                }
            }
            if any {
                out.push('\n');
            }
        }
        out
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for node in row {
                write!(f, "{}", node.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::NodeArena;

    fn digits() -> Grid<u8> {
        Grid::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_display_round_trips_rows() {
        let grid: Grid<char> = "AB\nCD".parse().unwrap();
        assert_eq!(grid.to_string(), "AB\nCD\n");
    }

    #[test]
    fn test_render_overlay() {
        let overlay = HashMap::from([((1, 1), "@".to_string())]);
        assert_eq!(digits().render_overlay(&overlay), "123\n4@6\n789\n");
    }

    #[test]
    fn test_render_window() {
        assert_eq!(digits().render_window(0, 0, 2), "12\n45\n");
        assert_eq!(digits().render_window(5, 5, 1), "");
        assert_eq!(digits().render_window(i32::MIN, i32::MIN, i32::MAX), "");
        assert_eq!(digits().render_window(1, 1, i32::MAX), "123\n456\n789\n");
        assert_eq!(digits().render_window(1, 1, -1), "");
    }

    #[test]
    fn test_render_distances_marks_unreached() {
        let mut grid = digits();
        grid.set_neighbors(false, |node| *node.value() != 5);
        grid.fill_distances(0).unwrap();
        // 5 is never linked to, so nothing walks through it, but it can
        // still reach its neighbors
        assert_eq!(grid.render_distances(), "012\n123\n234\n");

        grid.clear_neighbors();
        grid.fill_distances(4).unwrap();
        assert_eq!(grid.render_distances(), "...\n.0.\n...\n");
    }
}
