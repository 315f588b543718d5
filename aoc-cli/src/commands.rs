//! Command implementations over a character grid

use crate::cli::Palette;
use crate::error::CliError;
use crate::output::RegionSummary;
use aoc_common::{Input, InputSource};
use aoc_grid::{Grid, NodeArena, Rgb};
use std::collections::HashMap;
use std::path::Path;

/// Result of a distance fill, ready for printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceReport {
    /// Distance map, walls shown as themselves
    pub rendered: String,
    /// Open cells with a distance
    pub reached: usize,
    /// Largest distance among reached open cells
    pub farthest: Option<i64>,
    /// Grid with the traced path drawn in, and its length
    pub path: Option<(String, usize)>,
}

/// Read a character grid, one row per line, up to the first blank line
pub fn load_grid(source: &InputSource) -> Result<Grid<char>, CliError> {
    let input = Input::load(source)?;
    let grid: Grid<char> = input.text().parse()?;
    if grid.is_empty() {
        return Err(CliError::Config(format!("No grid found in {}", source)));
    }
    log::info!(
        "loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        source
    );
    Ok(grid)
}

/// Regions sorted largest first, ties kept in discovery order
///
/// Returns the total number of regions and the summaries to show.
pub fn region_summaries(grid: &mut Grid<char>, top: Option<usize>) -> (usize, Vec<RegionSummary>) {
    let regions: Vec<Vec<usize>> = grid.regions().collect();
    let mut summaries: Vec<RegionSummary> = regions
        .iter()
        .filter_map(|region| {
            let first = &grid[*region.first()?];
            Some(RegionSummary {
                value: *first.value(),
                size: region.len(),
                first: first.position(),
            })
        })
        .collect();
    summaries.sort_by(|a, b| b.size.cmp(&a.size));
    if let Some(top) = top {
        summaries.truncate(top);
    }
    (regions.len(), summaries)
}

/// Fill distances towards `from` and optionally trace a path from `to`
pub fn distances(
    grid: &mut Grid<char>,
    from: (i32, i32),
    to: Option<(i32, i32)>,
    walls: &[char],
    diagonals: bool,
) -> Result<DistanceReport, CliError> {
    let target = cell(grid, from)?;
    let start = to.map(|position| cell(grid, position)).transpose()?;

    grid.set_neighbors(diagonals, |node| !walls.contains(node.value()));
    grid.fill_distances(target)?;

    let rendered = grid.render(|node| {
        if walls.contains(node.value()) {
            node.value().to_string()
        } else if node.is_reached() {
            (node.distance() % 10).to_string()
        } else {
            ".".to_string()
        }
    });
    let open_reached = || {
        grid.nodes()
            .filter(|node| node.is_reached() && !walls.contains(node.value()))
    };
    let reached = open_reached().count();
    let farthest = open_reached().map(|node| node.distance()).max();

    let path = match start {
        Some(start) => Some(trace(grid, start, target)?),
        None => None,
    };

    Ok(DistanceReport {
        rendered,
        reached,
        farthest,
        path,
    })
}

fn trace(grid: &mut Grid<char>, start: usize, target: usize) -> Result<(String, usize), CliError> {
    if !grid[start].is_reached() {
        let (x, y) = grid[start].position();
        return Err(CliError::Config(format!("Cell {},{} cannot reach the target", x, y)));
    }
    let steps = grid.descend_path(start, target)?;
    let mut overlay: HashMap<(i32, i32), String> = steps
        .iter()
        .map(|&id| (grid[id].position(), "*".to_string()))
        .collect();
    overlay.insert(grid[start].position(), "@".to_string());
    Ok((grid.render_overlay(&overlay), steps.len()))
}

fn cell(grid: &Grid<char>, (x, y): (i32, i32)) -> Result<usize, CliError> {
    grid.index_of(x, y).ok_or_else(|| {
        CliError::Config(format!(
            "Cell {},{} is outside the {}x{} grid",
            x,
            y,
            grid.width(),
            grid.height()
        ))
    })
}

/// Write the grid as a BMP file
pub fn bitmap(
    grid: &mut Grid<char>,
    output: &Path,
    scale: u32,
    on: &[char],
    palette: Palette,
) -> Result<(), CliError> {
    match palette {
        Palette::Mono => grid.save_bitmap(output, scale, |c| {
            let lit = if on.is_empty() { *c != '.' } else { on.contains(c) };
            if lit { Rgb::WHITE } else { Rgb::BLACK }
        })?,
        Palette::Regions => {
            let mut region_of = vec![0usize; grid.len()];
            for (index, region) in grid.regions().enumerate() {
                for id in region {
                    region_of[id] = index;
                }
            }
            let width = grid.width().max(1);
            let regions = Grid::from_rows(region_of.chunks(width).map(|row| row.to_vec()))?;
            regions.save_bitmap(output, scale, |&index| region_color(index))?;
        }
    }
    Ok(())
}

/// Spread region indices over distinguishable colors
fn region_color(index: usize) -> Rgb {
    let channel = |factor: usize| (index.wrapping_mul(factor) % 200 + 55) as u8;
    Rgb::new(channel(67), channel(131), channel(199))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn grid(text: &str) -> Grid<char> {
        text.parse().unwrap()
    }

    #[test]
    fn test_load_grid_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#.\n.#\n\nnot part of the grid\n").unwrap();
        let grid = load_grid(&InputSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
    }

    #[test]
    fn test_load_grid_rejects_empty_input() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = load_grid(&InputSource::File(file.path().to_path_buf()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_region_summaries_sorted() {
        let mut grid = grid("aab\nabb\nccc");
        let (total, regions) = region_summaries(&mut grid, None);
        assert_eq!(total, 3);
        let sizes: Vec<(char, usize)> = regions.iter().map(|r| (r.value, r.size)).collect();
        assert_eq!(sizes, vec![('a', 3), ('b', 3), ('c', 3)]);
        assert_eq!(regions[1].first, (2, 0));

        let (_, top) = region_summaries(&mut grid, Some(1));
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_distances_around_walls() {
        let mut grid = grid("...\n##.\n...");
        let report = distances(&mut grid, (0, 0), Some((0, 2)), &['#'], false).unwrap();
        assert_eq!(report.rendered, "012\n##3\n654\n");
        assert_eq!(report.reached, 7);
        assert_eq!(report.farthest, Some(6));

        let (rendered, steps) = report.path.unwrap();
        assert_eq!(steps, 6);
        assert_eq!(rendered, "***\n##*\n@**\n");
    }

    #[test]
    fn test_distances_outside_grid() {
        let mut grid = grid("..\n..");
        let result = distances(&mut grid, (2, 0), None, &[], false);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_unreachable_path_start() {
        let mut grid = grid(".#.\n.#.");
        let result = distances(&mut grid, (0, 0), Some((2, 0)), &['#'], false);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_bitmap_palettes() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut grid = grid("#.\n.#");

        let mono = dir.path().join("mono.bmp");
        bitmap(&mut grid, &mono, 2, &[], Palette::Mono).unwrap();
        let regions = dir.path().join("regions.bmp");
        bitmap(&mut grid, &regions, 2, &[], Palette::Regions).unwrap();

        for path in [mono, regions] {
            let bytes = std::fs::read(path).unwrap();
            // 4 px wide: 12 bytes per row, 4 rows
            assert_eq!(bytes.len(), 54 + 12 * 4);
        }
    }
}
