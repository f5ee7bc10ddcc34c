//! Rectangular temperature grid with 4-connected neighbourhood.

use calor_core::{CellCoord, Side};
use smallvec::SmallVec;

use crate::error::SpaceError;

/// A two-dimensional temperature field on a `width × height` grid.
///
/// Cell `(x, y)` has `0 <= x < width` and `0 <= y < height`, with row 0
/// at the bottom. Storage is row-major: `index = y * width + x`.
/// Dimensions are fixed for the grid's lifetime; a dimension change
/// means building a new grid.
///
/// # Examples
///
/// ```
/// use calor_core::Side;
/// use calor_space::Grid;
///
/// let grid = Grid::filled(4, 3, 20.0).unwrap();
/// assert_eq!(grid.cell_count(), 12);
/// assert_eq!(grid.checked_index(1, 2), Some(9));
///
/// // Corner cell (0, 0) has no left or down neighbour.
/// assert_eq!(grid.neighbour(0, 0, Side::Left), None);
/// assert_eq!(grid.neighbour(0, 0, Side::Up), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    temperature: Vec<f64>,
}

/// Aggregate statistics over a temperature field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSummary {
    /// Lowest cell temperature.
    pub min: f64,
    /// Highest cell temperature.
    pub max: f64,
    /// Arithmetic mean over all cells.
    pub mean: f64,
    /// Sum over all cells.
    pub sum: f64,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with every cell at `value`.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0 or
    /// exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn filled(width: u32, height: u32, value: f64) -> Result<Self, SpaceError> {
        Self::check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            temperature: vec![value; width as usize * height as usize],
        })
    }

    /// Create a grid from row-major values (row 0 first).
    pub fn from_values(width: u32, height: u32, values: Vec<f64>) -> Result<Self, SpaceError> {
        Self::check_dims(width, height)?;
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(SpaceError::LengthMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            temperature: values,
        })
    }

    fn check_dims(width: u32, height: u32) -> Result<(), SpaceError> {
        if width == 0 || height == 0 || width > Self::MAX_DIM || height > Self::MAX_DIM {
            return Err(SpaceError::EmptyGrid);
        }
        Ok(())
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.temperature.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `(x, y)` lies on the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Flat index of `(x, y)`, or `None` off the grid.
    pub fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Flat index of `(x, y)`, with every off-grid coordinate mapped to
    /// the sentinel index `0`.
    ///
    /// The sentinel is a real cell, so a value read through it is never a
    /// valid edge neighbour. Prefer [`checked_index`](Self::checked_index)
    /// or [`neighbour`](Self::neighbour) whenever the coordinate may be
    /// off the grid.
    pub fn index(&self, x: i32, y: i32) -> usize {
        self.checked_index(x, y).unwrap_or(0)
    }

    /// Coordinate of flat index `idx`. `idx` must be `< cell_count()`.
    pub fn coord_of(&self, idx: usize) -> CellCoord {
        let w = self.width as usize;
        CellCoord::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Temperature at `(x, y)`, or `None` off the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<f64> {
        self.checked_index(x, y).map(|i| self.temperature[i])
    }

    /// Overwrite the temperature at `(x, y)`.
    ///
    /// Used by setup; the solver commits whole fields instead.
    pub fn set(&mut self, x: i32, y: i32, value: f64) -> Result<(), SpaceError> {
        let i = self
            .checked_index(x, y)
            .ok_or(SpaceError::CoordOutOfBounds {
                coord: CellCoord::new(x, y),
                width: self.width,
                height: self.height,
            })?;
        self.temperature[i] = value;
        Ok(())
    }

    /// Flat index of the neighbour across `side`, or `None` when `side` is
    /// on the grid boundary (or `(x, y)` itself is off the grid).
    pub fn neighbour(&self, x: i32, y: i32, side: Side) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let (dx, dy) = side.offset();
        self.checked_index(x + dx, y + dy)
    }

    /// Whether `side` of in-grid cell `(x, y)` lies on the grid boundary.
    pub fn is_boundary(&self, x: i32, y: i32, side: Side) -> bool {
        self.contains(x, y) && self.neighbour(x, y, side).is_none()
    }

    /// The sides of `(x, y)` that face outside the grid.
    ///
    /// Interior cells return an empty list; a 1×1 grid returns all four.
    pub fn boundary_sides(&self, x: i32, y: i32) -> SmallVec<[Side; 4]> {
        Side::ALL
            .into_iter()
            .filter(|&side| self.is_boundary(x, y, side))
            .collect()
    }

    /// All coordinates in row-major order, bottom row first.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| CellCoord::new(x, y)))
    }

    /// The whole field, row-major.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperature
    }

    /// One row of the field, or `None` if `y` is off the grid.
    pub fn row(&self, y: i32) -> Option<&[f64]> {
        if y < 0 || y as u32 >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.temperature[start..start + w])
    }

    /// Replace the whole field with `next`, handing the previous field back
    /// through `next` so the caller can reuse the allocation.
    ///
    /// This is the commit half of a double-buffered step: every cell
    /// changes at once.
    pub fn swap_field(&mut self, next: &mut Vec<f64>) -> Result<(), SpaceError> {
        if next.len() != self.temperature.len() {
            return Err(SpaceError::LengthMismatch {
                expected: self.temperature.len(),
                got: next.len(),
            });
        }
        std::mem::swap(&mut self.temperature, next);
        Ok(())
    }

    /// Min, max, mean, and sum of the field.
    pub fn summary(&self) -> FieldSummary {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &t in &self.temperature {
            min = min.min(t);
            max = max.max(t);
            sum += t;
        }
        FieldSummary {
            min,
            max,
            mean: sum / self.temperature.len() as f64,
            sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn filled_sets_every_cell() {
        let g = Grid::filled(5, 2, 7.5).unwrap();
        assert_eq!(g.cell_count(), 10);
        assert!(g.temperatures().iter().all(|&t| t == 7.5));
    }

    #[test]
    fn zero_dims_rejected() {
        assert_eq!(Grid::filled(0, 3, 0.0), Err(SpaceError::EmptyGrid));
        assert_eq!(Grid::filled(3, 0, 0.0), Err(SpaceError::EmptyGrid));
    }

    #[test]
    fn from_values_checks_length() {
        assert_eq!(
            Grid::from_values(2, 2, vec![0.0; 3]),
            Err(SpaceError::LengthMismatch {
                expected: 4,
                got: 3
            })
        );
        let g = Grid::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        // Row 0 is the bottom row.
        assert_eq!(g.get(1, 0), Some(2.0));
        assert_eq!(g.get(0, 1), Some(3.0));
    }

    // ── Indexing ────────────────────────────────────────────────

    #[test]
    fn index_is_row_major_bottom_up() {
        let g = Grid::filled(4, 3, 0.0).unwrap();
        assert_eq!(g.index(0, 0), 0);
        assert_eq!(g.index(3, 0), 3);
        assert_eq!(g.index(0, 1), 4);
        assert_eq!(g.index(3, 2), 11);
    }

    #[test]
    fn off_grid_index_is_sentinel_zero() {
        let g = Grid::filled(4, 3, 0.0).unwrap();
        assert_eq!(g.index(-1, 0), 0);
        assert_eq!(g.index(4, 1), 0);
        assert_eq!(g.index(2, 3), 0);
        assert_eq!(g.checked_index(-1, 0), None);
        assert_eq!(g.checked_index(2, 3), None);
    }

    #[test]
    fn coord_of_inverts_index() {
        let g = Grid::filled(5, 4, 0.0).unwrap();
        for c in g.coords() {
            assert_eq!(g.coord_of(g.index(c.x, c.y)), c);
        }
    }

    #[test]
    fn set_and_get() {
        let mut g = Grid::filled(3, 3, 0.0).unwrap();
        g.set(2, 1, 42.0).unwrap();
        assert_eq!(g.get(2, 1), Some(42.0));
        assert_eq!(g.get(3, 1), None);
        assert!(matches!(
            g.set(3, 1, 1.0),
            Err(SpaceError::CoordOutOfBounds { .. })
        ));
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn interior_has_four_neighbours() {
        let g = Grid::filled(3, 3, 0.0).unwrap();
        assert_eq!(g.neighbour(1, 1, Side::Left), Some(3));
        assert_eq!(g.neighbour(1, 1, Side::Right), Some(5));
        assert_eq!(g.neighbour(1, 1, Side::Down), Some(1));
        assert_eq!(g.neighbour(1, 1, Side::Up), Some(7));
        assert!(g.boundary_sides(1, 1).is_empty());
    }

    #[test]
    fn corner_and_edge_boundaries() {
        let g = Grid::filled(3, 3, 0.0).unwrap();
        let corner = g.boundary_sides(0, 0);
        assert_eq!(corner.as_slice(), &[Side::Left, Side::Down]);
        let top_edge = g.boundary_sides(1, 2);
        assert_eq!(top_edge.as_slice(), &[Side::Up]);
        let top_right = g.boundary_sides(2, 2);
        assert_eq!(top_right.as_slice(), &[Side::Right, Side::Up]);
    }

    #[test]
    fn single_cell_is_boundary_on_all_sides() {
        let g = Grid::filled(1, 1, 0.0).unwrap();
        assert_eq!(g.boundary_sides(0, 0).len(), 4);
        for side in Side::ALL {
            assert_eq!(g.neighbour(0, 0, side), None);
        }
    }

    #[test]
    fn off_grid_cell_has_no_neighbours_and_no_boundary() {
        let g = Grid::filled(3, 3, 0.0).unwrap();
        assert_eq!(g.neighbour(-1, 0, Side::Right), None);
        assert!(!g.is_boundary(-1, 0, Side::Left));
    }

    // ── Field access ────────────────────────────────────────────

    #[test]
    fn row_slices() {
        let g = Grid::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(g.row(1), Some(&[3.0, 4.0][..]));
        assert_eq!(g.row(2), None);
        assert_eq!(g.row(-1), None);
    }

    #[test]
    fn swap_field_replaces_and_returns_previous() {
        let mut g = Grid::filled(2, 1, 1.0).unwrap();
        let mut next = vec![5.0, 6.0];
        g.swap_field(&mut next).unwrap();
        assert_eq!(g.temperatures(), &[5.0, 6.0]);
        assert_eq!(next, vec![1.0, 1.0]);

        let mut wrong = vec![0.0; 3];
        assert!(g.swap_field(&mut wrong).is_err());
        assert_eq!(g.temperatures(), &[5.0, 6.0]);
    }

    #[test]
    fn summary_statistics() {
        let g = Grid::from_values(2, 2, vec![1.0, -3.0, 4.0, 2.0]).unwrap();
        let s = g.summary();
        assert_eq!(s.min, -3.0);
        assert_eq!(s.max, 4.0);
        assert_eq!(s.sum, 4.0);
        assert_eq!(s.mean, 1.0);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn indices_unique_and_in_range(w in 1u32..24, h in 1u32..24) {
            let g = Grid::filled(w, h, 0.0).unwrap();
            let mut seen = HashSet::new();
            for c in g.coords() {
                let i = g.checked_index(c.x, c.y).unwrap();
                prop_assert!(i < g.cell_count());
                prop_assert!(seen.insert(i));
            }
            prop_assert_eq!(seen.len(), g.cell_count());
        }

        #[test]
        fn neighbours_symmetric(
            w in 1u32..12,
            h in 1u32..12,
            x in 0i32..12,
            y in 0i32..12,
        ) {
            let x = x % w as i32;
            let y = y % h as i32;
            let g = Grid::filled(w, h, 0.0).unwrap();
            for side in Side::ALL {
                if let Some(n) = g.neighbour(x, y, side) {
                    let nc = g.coord_of(n);
                    prop_assert_eq!(
                        g.neighbour(nc.x, nc.y, side.opposite()),
                        Some(g.index(x, y))
                    );
                } else {
                    prop_assert!(g.is_boundary(x, y, side));
                }
            }
        }
    }
}
