//! Cell coordinates, grid sides, and axes.

use std::fmt;

/// Position of a cell on the grid.
///
/// `x` is the column (increasing to the right) and `y` is the row
/// (increasing upward, row 0 is the bottom). Components are signed so
/// that out-of-range coordinates supplied by callers can be represented
/// and rejected rather than wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Column index.
    pub x: i32,
    /// Row index, row 0 at the bottom.
    pub y: i32,
}

impl CellCoord {
    /// Create a coordinate from column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one cell across `side`.
    pub fn step(self, side: Side) -> Self {
        let (dx, dy) = side.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal, spaced by `dx`.
    X,
    /// Vertical, spaced by `dy`.
    Y,
}

/// One of the four faces of a cell (and of the grid as a whole).
///
/// # Examples
///
/// ```
/// use calor_core::{Axis, CellCoord, Side};
///
/// assert_eq!(CellCoord::new(2, 2).step(Side::Up), CellCoord::new(2, 3));
/// assert_eq!(Side::Left.axis(), Axis::X);
/// assert_eq!(Side::Down.opposite(), Side::Up);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Towards column `x - 1`.
    Left,
    /// Towards column `x + 1`.
    Right,
    /// Towards row `y - 1`.
    Down,
    /// Towards row `y + 1`.
    Up,
}

impl Side {
    /// All four sides, x-axis first.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Down, Side::Up];

    /// Unit `(dx, dy)` offset to the neighbouring cell across this side.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
            Side::Down => (0, -1),
            Side::Up => (0, 1),
        }
    }

    /// Axis the side's normal lies along.
    pub const fn axis(self) -> Axis {
        match self {
            Side::Left | Side::Right => Axis::X,
            Side::Down | Side::Up => Axis::Y,
        }
    }

    /// Position of this side in [`Side::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Down => 2,
            Side::Up => 3,
        }
    }

    /// The side facing the other way.
    pub const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Down => Side::Up,
            Side::Up => Side::Down,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Down => "down",
            Side::Up => "up",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, side) in Side::ALL.into_iter().enumerate() {
            assert_eq!(side.index(), i);
        }
    }

    #[test]
    fn step_round_trips_through_opposite() {
        let c = CellCoord::new(3, 7);
        for side in Side::ALL {
            assert_eq!(c.step(side).step(side.opposite()), c);
        }
    }

    #[test]
    fn offsets_are_unit_and_on_axis() {
        for side in Side::ALL {
            let (dx, dy) = side.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
            match side.axis() {
                Axis::X => assert_eq!(dy, 0),
                Axis::Y => assert_eq!(dx, 0),
            }
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(CellCoord::new(-1, 4).to_string(), "(-1, 4)");
        assert_eq!(Side::Up.to_string(), "up");
    }
}
