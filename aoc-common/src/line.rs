//! Integer line segments such as `"0,9 -> 5,9"`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CommonError;

static SEGMENT: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+)\s*,\s*(-?\d+)\s*->\s*(-?\d+)\s*,\s*(-?\d+)\s*$")
});

/// Segment from `(x1, y1)` to `(x2, y2)`, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Line {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal segment on `y = 0`.
    pub const fn span(x1: i32, x2: i32) -> Self {
        Self::new(x1, 0, x2, 0)
    }

    /// Segment from exactly four coordinates `[x1, y1, x2, y2]`.
    pub fn from_coords(coords: &[i32]) -> Result<Self, CommonError> {
        match *coords {
            [x1, y1, x2, y2] => Ok(Self::new(x1, y1, x2, y2)),
            _ => Err(CommonError::InvalidInput(format!(
                "a line needs 4 coordinates, got {}",
                coords.len()
            ))),
        }
    }

    pub fn min_x(&self) -> i32 {
        self.x1.min(self.x2)
    }

    pub fn min_y(&self) -> i32 {
        self.y1.min(self.y2)
    }

    pub fn max_x(&self) -> i32 {
        self.x1.max(self.x2)
    }

    pub fn max_y(&self) -> i32 {
        self.y1.max(self.y2)
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn is_diagonal(&self) -> bool {
        !self.is_horizontal() && !self.is_vertical()
    }

    /// Every point from the start to the end.
    ///
    /// Each step moves at most one unit on each axis towards the end, so
    /// horizontal, vertical and 45° segments are traced exactly and any other
    /// segment goes diagonally first and straight after.
    pub fn path(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let end = (self.x2, self.y2);
        let steps = self.x1.abs_diff(self.x2).max(self.y1.abs_diff(self.y2));
        (0..=steps).scan((self.x1, self.y1), move |current, _| {
            let point = *current;
            *current = (
                current.0 + end.0.cmp(&current.0) as i32,
                current.1 + end.1.cmp(&current.1) as i32,
            );
            Some(point)
        })
    }
}

impl FromStr for Line {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = SEGMENT
            .as_ref()
            .map_err(|e| CommonError::InvalidInput(e.to_string()))?;
        let captures = pattern
            .captures(s)
            .ok_or_else(|| CommonError::InvalidInput(format!("{:?} is not a line", s)))?;
        let coords = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| {
                m.as_str()
                    .parse()
                    .map_err(|_| CommonError::InvalidInput(format!("{:?} is out of range", m.as_str())))
            })
            .collect::<Result<Vec<i32>, _>>()?;
        Self::from_coords(&coords)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} -> {},{}", self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_across_full_range() {
        let mut path = Line::new(i32::MIN, 0, i32::MAX, 0).path();
        assert_eq!(path.size_hint().1, Some(1 << 32));
        assert_eq!(path.next(), Some((i32::MIN, 0)));
        assert_eq!(path.next(), Some((i32::MIN + 1, 0)));

        let mut up = Line::new(0, i32::MAX, 0, i32::MIN).path();
        assert_eq!(up.nth(1), Some((0, i32::MAX - 1)));

        let tail: Vec<_> = Line::new(i32::MAX - 2, i32::MIN, i32::MAX, i32::MIN + 2)
            .path()
            .collect();
        assert_eq!(tail.last(), Some(&(i32::MAX, i32::MIN + 2)));
        assert_eq!(tail.len(), 3);
    }

    #[test]
    fn test_parse_and_display() {
        let line: Line = "1,2 -> 9,2".parse().unwrap();
        assert_eq!(line, Line::new(1, 2, 9, 2));
        assert_eq!(line.to_string(), "1,2 -> 9,2");
        assert_eq!(" -3 , 4->5,-6 ".parse::<Line>().unwrap(), Line::new(-3, 4, 5, -6));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("1,2 -> 9".parse::<Line>().is_err());
        assert!("a,b -> c,d".parse::<Line>().is_err());
        assert!("1,2 -> 99999999999,2".parse::<Line>().is_err());
    }

    #[test]
    fn test_orientation_and_extent() {
        let line = Line::new(9, 4, 3, 4);
        assert!(line.is_horizontal());
        assert!(!line.is_diagonal());
        assert_eq!((line.min_x(), line.max_x()), (3, 9));
        assert!(Line::new(1, 1, 3, 3).is_diagonal());
        assert!(Line::new(7, 0, 7, 4).is_vertical());
        assert_eq!(Line::span(2, 5), Line::new(2, 0, 5, 0));
    }

    #[test]
    fn test_path_inclusive() {
        let path: Vec<_> = Line::new(1, 1, 1, 3).path().collect();
        assert_eq!(path, vec![(1, 1), (1, 2), (1, 3)]);

        let path: Vec<_> = Line::new(9, 7, 7, 9).path().collect();
        assert_eq!(path, vec![(9, 7), (8, 8), (7, 9)]);

        let path: Vec<_> = Line::new(4, 4, 4, 4).path().collect();
        assert_eq!(path, vec![(4, 4)]);
    }

    #[test]
    fn test_from_coords_length() {
        assert!(Line::from_coords(&[1, 2, 3]).is_err());
        assert_eq!(Line::from_coords(&[1, 2, 3, 4]).unwrap(), Line::new(1, 2, 3, 4));
    }
}
