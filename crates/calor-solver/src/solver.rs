//! Explicit Euler integration with a Jacobi (double-buffered) update.

use calor_core::{CellCoord, ConfigError, Side, SimulationConfig};
use calor_space::Grid;
use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::conduction::Conduction;
use crate::convection::Convection;
use crate::mode::{CellView, TransferMode};
use crate::radiation::Radiation;

/// Integrates a [`Grid`] forward in time under one configuration.
///
/// Built once from a validated [`SimulationConfig`]; holds the enabled
/// transfer modes in a fixed order (conduction, convection, radiation)
/// plus a scratch field reused across steps.
///
/// Each step reads only the start-of-step field and commits every cell at
/// once, so the result does not depend on traversal order.
///
/// # Examples
///
/// ```
/// use calor_core::SimulationConfig;
/// use calor_solver::{initialize, Solver};
///
/// let config = SimulationConfig::builder()
///     .size(3, 3)
///     .hot_cell(1, 1)
///     .build()
///     .unwrap();
/// let mut grid = initialize(&config).unwrap();
/// let mut solver = Solver::new(&config);
/// solver.step(&mut grid);
///
/// assert_eq!(grid.get(1, 1), Some(100.0));
/// assert!(grid.get(1, 0).unwrap() > 0.0);
/// assert_eq!(grid.get(0, 0), Some(0.0));
/// ```
pub struct Solver {
    modes: Vec<Box<dyn TransferMode>>,
    dt: f64,
    dx: f64,
    dy: f64,
    heat_capacity: f64,
    hot: f64,
    pinned: IndexSet<CellCoord>,
    boundary_modes: bool,
    scratch: Vec<f64>,
}

impl Solver {
    /// Build a solver for `config`.
    ///
    /// `config` is expected to have passed
    /// [`validate()`](SimulationConfig::validate); an unvalidated config
    /// may integrate to NaN but never panics.
    pub fn new(config: &SimulationConfig) -> Self {
        let d = &config.discretization;
        let mut modes: Vec<Box<dyn TransferMode>> = Vec::new();
        if config.modes.conduction {
            modes.push(Box::new(Conduction::new(
                config.material.conductivity,
                d.dx,
                d.dy,
            )));
        }
        if config.modes.convection_active() {
            modes.push(Box::new(Convection::new(
                &config.fluid,
                config.temperatures.ambient,
                d.dx,
                d.dy,
            )));
        }
        if config.modes.radiation_active() {
            modes.push(Box::new(Radiation::new(
                config.material.emissivity,
                config.temperatures.ambient,
            )));
        }

        let pinned = if config.heat_source.pins_cells() {
            config.heat_source.cells.clone()
        } else {
            IndexSet::new()
        };

        let boundary_modes = modes.iter().any(|m| m.boundary_only());
        Self {
            modes,
            dt: d.dt,
            dx: d.dx,
            dy: d.dy,
            heat_capacity: config.material.heat_capacity(),
            hot: config.temperatures.hot,
            pinned,
            boundary_modes,
            scratch: Vec::new(),
        }
    }

    /// Names of the active transfer modes, in evaluation order.
    pub fn mode_names(&self) -> Vec<&str> {
        self.modes.iter().map(|m| m.name()).collect()
    }

    /// Whether `(x, y)` is held at the hot temperature every step.
    pub fn is_pinned(&self, x: i32, y: i32) -> bool {
        !self.pinned.is_empty() && self.pinned.contains(&CellCoord::new(x, y))
    }

    /// Net heating rate `dT/dt · ρ cp` at `(x, y)` in W/m³, from the
    /// current field. `None` off the grid.
    ///
    /// Pinned cells still report the rate the physics would give them.
    pub fn heating_rate(&self, grid: &Grid, x: i32, y: i32) -> Option<f64> {
        CellView::new(grid, x, y).map(|cell| self.rate(&cell))
    }

    fn rate(&self, cell: &CellView<'_>) -> f64 {
        let boundary = if self.boundary_modes {
            cell.boundary_sides()
        } else {
            SmallVec::new()
        };
        let mut q = [0.0f64; 4];
        for mode in &self.modes {
            if mode.boundary_only() {
                for &side in &boundary {
                    q[side.index()] += mode.side_flux(cell, side);
                }
            } else {
                for (slot, side) in q.iter_mut().zip(Side::ALL) {
                    *slot += mode.side_flux(cell, side);
                }
            }
        }
        // Side::ALL order: left, right, down, up.
        (q[0] + q[1]) / self.dx + (q[2] + q[3]) / self.dy
    }

    fn next_temperature(&self, grid: &Grid, x: i32, y: i32) -> f64 {
        if self.is_pinned(x, y) {
            return self.hot;
        }
        match CellView::new(grid, x, y) {
            Some(cell) => cell.temperature() + self.dt * self.rate(&cell) / self.heat_capacity,
            None => f64::NAN,
        }
    }

    fn fill_row(&self, grid: &Grid, y: usize, row: &mut [f64]) {
        for (x, out) in row.iter_mut().enumerate() {
            *out = self.next_temperature(grid, x as i32, y as i32);
        }
    }

    /// Advance `grid` by one time step.
    ///
    /// Runs row-parallel when the `parallel` feature is enabled.
    pub fn step(&mut self, grid: &mut Grid) {
        #[cfg(feature = "parallel")]
        self.step_parallel(grid);
        #[cfg(not(feature = "parallel"))]
        self.step_sequential(grid);
    }

    /// Advance `grid` by one time step on the calling thread.
    pub fn step_sequential(&mut self, grid: &mut Grid) {
        let mut next = self.take_scratch(grid);
        let w = grid.width() as usize;
        for (y, row) in next.chunks_mut(w).enumerate() {
            self.fill_row(grid, y, row);
        }
        self.commit(grid, next);
    }

    /// Advance `grid` by one time step, one rayon task per row.
    #[cfg(feature = "parallel")]
    pub fn step_parallel(&mut self, grid: &mut Grid) {
        use rayon::prelude::*;

        let mut next = self.take_scratch(grid);
        let w = grid.width() as usize;
        let frozen: &Grid = grid;
        let this: &Self = self;
        next.par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| this.fill_row(frozen, y, row));
        self.commit(grid, next);
    }

    fn take_scratch(&mut self, grid: &Grid) -> Vec<f64> {
        let mut next = std::mem::take(&mut self.scratch);
        next.resize(grid.cell_count(), 0.0);
        next
    }

    fn commit(&mut self, grid: &mut Grid, mut next: Vec<f64>) {
        let committed = grid.swap_field(&mut next);
        debug_assert!(committed.is_ok(), "scratch is sized to the grid");
        self.scratch = next;
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("modes", &self.mode_names())
            .field("dt", &self.dt)
            .field("pinned", &self.pinned.len())
            .finish()
    }
}

// ── Free functions ─────────────────────────────────────────────────

/// Validate `config` and allocate its starting field: every cell at the
/// cold temperature, then the hot cells at the hot temperature when the
/// heat source is enabled.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found by
/// [`SimulationConfig::validate()`].
pub fn initialize(config: &SimulationConfig) -> Result<Grid, ConfigError> {
    config.validate()?;
    let (width, height) = (config.width, config.height);
    let mut grid = Grid::filled(width, height, config.temperatures.cold)
        .map_err(|_| ConfigError::EmptyGrid { width, height })?;
    if config.heat_source.enabled {
        for &cell in &config.heat_source.cells {
            grid.set(cell.x, cell.y, config.temperatures.hot)
                .map_err(|_| ConfigError::HotCellOutOfBounds {
                    cell,
                    width,
                    height,
                })?;
        }
    }
    Ok(grid)
}

/// Advance `grid` by one step under `config`.
///
/// Builds a fresh [`Solver`] per call; hosts stepping repeatedly should
/// hold a [`Solver`] instead.
pub fn step(grid: &mut Grid, config: &SimulationConfig) {
    Solver::new(config).step(grid);
}

/// Discard the current field and allocate a fresh one from `config`.
///
/// Equivalent to [`initialize`]; calling it twice yields identical fields.
///
/// # Errors
///
/// As for [`initialize`].
pub fn reset(config: &SimulationConfig) -> Result<Grid, ConfigError> {
    initialize(config)
}

/// Temperature at `(x, y)`, or `None` off the grid.
pub fn temperature_at(grid: &Grid, x: i32, y: i32) -> Option<f64> {
    grid.get(x, y)
}

/// Whether `(x, y)` is one of the configured hot cells.
pub fn is_hot_cell(config: &SimulationConfig, x: i32, y: i32) -> bool {
    config.is_hot_cell(x, y)
}
