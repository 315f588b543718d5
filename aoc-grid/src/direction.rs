//! Compass directions on a screen-oriented lattice (y grows downward).

/// One of the eight steps between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Order in which neighbors are enumerated, diagonals included.
///
/// Tests and callers rely on this exact order. Cardinal-only enumeration
/// uses the same sweep with the diagonal entries skipped.
pub const NEIGHBOR_ORDER: [Direction; 8] = [
    Direction::UpRight,
    Direction::Right,
    Direction::Up,
    Direction::UpLeft,
    Direction::Left,
    Direction::DownLeft,
    Direction::Down,
    Direction::DownRight,
];

impl Direction {
    pub const ALL: [Direction; 8] = NEIGHBOR_ORDER;

    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(dx, dy)` of a single step.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Position one step away from `(x, y)`.
    pub const fn apply(self, (x, y): (i32, i32)) -> (i32, i32) {
        let (dx, dy) = self.offset();
        (x + dx, y + dy)
    }
}

/// Positions around `(x, y)` in [`NEIGHBOR_ORDER`], without bounds checks.
pub fn neighbor_positions(
    position: (i32, i32),
    with_diagonals: bool,
) -> impl Iterator<Item = (i32, i32)> {
    NEIGHBOR_ORDER
        .into_iter()
        .filter(move |direction| with_diagonals || !direction.is_diagonal())
        .map(move |direction| direction.apply(position))
}
