//! Compass and diagonal movement directions.

/// One of the eight unit moves on the grid.
///
/// Variants are declared in the order the movement strategy probes neighbors
/// when re-planning, so [`strum::IntoEnumIterator`] yields the probe priority
/// directly. Reordering the priority is a declaration change, not a logic
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Direction {
    /// Toward larger rows.
    Down,
    /// Toward larger columns.
    Right,
    /// Toward smaller rows.
    Up,
    /// Toward smaller columns.
    Left,
    /// Diagonal toward larger rows and columns.
    DownRight,
    /// Diagonal toward smaller rows and columns.
    UpLeft,
    /// Diagonal toward larger rows, smaller columns.
    DownLeft,
    /// Diagonal toward smaller rows, larger columns.
    UpRight,
}

impl Direction {
    /// The four opposed direction pairs spanning the win axes: vertical,
    /// horizontal and both diagonals.
    pub const AXES: [(Direction, Direction); 4] = [
        (Direction::Up, Direction::Down),
        (Direction::Left, Direction::Right),
        (Direction::UpRight, Direction::DownLeft),
        (Direction::UpLeft, Direction::DownRight),
    ];

    /// The (row, col) delta of one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
        }
    }
}
