//! The [`TransferMode`] trait and the [`CellView`] it reads from.

use calor_core::{CellCoord, Side};
use calor_space::Grid;
use smallvec::SmallVec;

/// Read-only view of one cell within the frozen start-of-step field.
///
/// Every neighbour read goes through the same frozen [`Grid`], so flux
/// evaluation never observes values written earlier in the same step.
#[derive(Clone, Copy, Debug)]
pub struct CellView<'a> {
    grid: &'a Grid,
    x: i32,
    y: i32,
    temperature: f64,
}

impl<'a> CellView<'a> {
    /// View of `(x, y)`, or `None` off the grid.
    pub fn new(grid: &'a Grid, x: i32, y: i32) -> Option<Self> {
        grid.get(x, y).map(|temperature| Self {
            grid,
            x,
            y,
            temperature,
        })
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Row, 0 at the bottom.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Position on the grid.
    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.x, self.y)
    }

    /// Start-of-step temperature of this cell.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Start-of-step temperature across `side`, or `None` at the grid edge.
    pub fn neighbour_temperature(&self, side: Side) -> Option<f64> {
        self.grid
            .neighbour(self.x, self.y, side)
            .map(|i| self.grid.temperatures()[i])
    }

    /// Whether `side` faces outside the grid.
    pub fn is_boundary(&self, side: Side) -> bool {
        self.grid.is_boundary(self.x, self.y, side)
    }

    /// The sides of this cell that face outside the grid.
    pub fn boundary_sides(&self) -> SmallVec<[Side; 4]> {
        self.grid.boundary_sides(self.x, self.y)
    }

    /// Grid width in cells.
    pub fn grid_width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid height in cells.
    pub fn grid_height(&self) -> u32 {
        self.grid.height()
    }
}

/// One physical heat-transfer mechanism.
///
/// A mode reports the heat flux (W/m², positive into the cell) through a
/// single side of a cell. The solver sums fluxes per side over all
/// enabled modes and integrates.
///
/// # Contract
///
/// - `side_flux()` MUST be deterministic and depend only on the view and
///   the mode's own parameters.
/// - Modes are immutable during a run; the solver shares them across
///   rows, hence `Send + Sync`.
///
/// # Examples
///
/// A mode that pumps a fixed flux through every boundary side:
///
/// ```
/// use calor_core::Side;
/// use calor_solver::{CellView, TransferMode};
/// use calor_space::Grid;
///
/// struct Heater(f64);
///
/// impl TransferMode for Heater {
///     fn name(&self) -> &str { "heater" }
///
///     fn side_flux(&self, cell: &CellView<'_>, side: Side) -> f64 {
///         if cell.is_boundary(side) { self.0 } else { 0.0 }
///     }
/// }
///
/// let grid = Grid::filled(2, 1, 0.0).unwrap();
/// let cell = CellView::new(&grid, 0, 0).unwrap();
/// assert_eq!(Heater(3.0).side_flux(&cell, Side::Left), 3.0);
/// assert_eq!(Heater(3.0).side_flux(&cell, Side::Right), 0.0);
/// ```
pub trait TransferMode: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Heat flux into `cell` through `side`, in W/m².
    fn side_flux(&self, cell: &CellView<'_>, side: Side) -> f64;

    /// Whether the mode acts on boundary sides only. The solver then asks
    /// it about [`CellView::boundary_sides`] and nothing else.
    fn boundary_only(&self) -> bool {
        false
    }
}
