//! Row, column and rectangle extraction with end-relative ranges.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use super::Grid;
use crate::node::Node;

/// A half-open span along one axis of a grid.
///
/// Negative bounds count back from the end of the axis, so `-2..` is the
/// last two positions and `..-1` everything but the last. Positions that
/// fall outside the grid are dropped before any lookup happens.
pub trait AxisRange {
    /// Resolves the span against an axis of `len` positions.
    fn resolve(&self, len: usize) -> Range<i32>;
}

fn from_end(index: i32, len: usize) -> i32 {
    if index < 0 {
        (len as i32).saturating_add(index)
    } else {
        index
    }
}

/// `span` resolved against `len` and cut down to `0..len`.
fn clamp<A: AxisRange>(span: &A, len: usize) -> Range<i32> {
    let Range { start, end } = span.resolve(len);
    start.max(0)..end.min(i32::try_from(len).unwrap_or(i32::MAX))
}

impl AxisRange for Range<i32> {
    fn resolve(&self, len: usize) -> Range<i32> {
        from_end(self.start, len)..from_end(self.end, len)
    }
}

impl AxisRange for RangeInclusive<i32> {
    fn resolve(&self, len: usize) -> Range<i32> {
        from_end(*self.start(), len)..from_end(*self.end(), len).saturating_add(1)
    }
}

impl AxisRange for RangeFrom<i32> {
    fn resolve(&self, len: usize) -> Range<i32> {
        from_end(self.start, len)..len as i32
    }
}

impl AxisRange for RangeTo<i32> {
    fn resolve(&self, len: usize) -> Range<i32> {
        0..from_end(self.end, len)
    }
}

impl AxisRange for RangeFull {
    fn resolve(&self, len: usize) -> Range<i32> {
        0..len as i32
    }
}

impl<T> Grid<T> {
    /// Horizontal run of row `y` over `xs`.
    pub fn slice_row<X: AxisRange>(&self, xs: X, y: i32) -> impl Iterator<Item = &Node<T>> + '_ {
        clamp(&xs, self.width).filter_map(move |x| self.get(x, y))
    }

    /// Vertical run of column `x` over `ys`.
    pub fn slice_column<Y: AxisRange>(
        &self,
        x: i32,
        ys: Y,
    ) -> impl Iterator<Item = &Node<T>> + '_ {
        clamp(&ys, self.height).filter_map(move |y| self.get(x, y))
    }

    /// Rectangle `xs × ys`, row by row, left to right.
    pub fn region<X: AxisRange, Y: AxisRange>(
        &self,
        xs: X,
        ys: Y,
    ) -> impl Iterator<Item = &Node<T>> + '_ {
        let xs = clamp(&xs, self.width);
        clamp(&ys, self.height).flat_map(move |y| {
            xs.clone().filter_map(move |x| self.get(x, y))
        })
    }

    /// Rectangle `xs × ys` grouped by row.
    ///
    /// Only rows inside the grid get an entry.
    pub fn region_rows<X: AxisRange, Y: AxisRange>(&self, xs: X, ys: Y) -> Vec<Vec<&Node<T>>> {
        let xs = clamp(&xs, self.width);
        clamp(&ys, self.height)
            .map(|y| xs.clone().filter_map(|x| self.get(x, y)).collect())
            .collect()
    }

    /// Rectangle `xs × ys` grouped by column.
    ///
    /// Only columns inside the grid get an entry.
    pub fn region_columns<X: AxisRange, Y: AxisRange>(
        &self,
        xs: X,
        ys: Y,
    ) -> Vec<Vec<&Node<T>>> {
        let ys = clamp(&ys, self.height);
        clamp(&xs, self.width)
            .map(|x| ys.clone().filter_map(|y| self.get(x, y)).collect())
            .collect()
    }
}
