//! Lockstep (synchronous) simulation driver.
//!
//! [`Simulation`] owns one configuration, its temperature grid and a
//! [`Solver`]. Hosts drive it either explicitly with
//! [`step()`](Simulation::step) or once per frame with
//! [`tick()`](Simulation::tick), which respects the pause state.
//!
//! # Lifecycle
//!
//! ```text
//! new ──> Running ──tick/step──> Running
//!           │  ▲
//!     pause │  │ resume
//!           ▼  │
//!          Idle <──reset── Running | Idle
//! ```
//!
//! `reset()` always lands in `Idle` with a freshly allocated field. No
//! background threads are involved.

use std::time::Instant;

use calor_core::SimulationConfig;
use calor_solver::{initialize, Solver};
use calor_space::Grid;
use tracing::{info, trace, warn};

use crate::error::EngineError;
use crate::metrics::StepMetrics;

// Compile-time assertion: Simulation can move onto a tick thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// Whether [`tick()`](Simulation::tick) advances the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    /// Paused, or freshly reset.
    Idle,
    /// Advancing once per tick.
    Running,
}

/// Owned copy of the field plus the run position it was taken at.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
    /// Steps completed since the last setup or reset.
    pub step: u64,
    /// Simulated seconds since the last setup or reset.
    pub sim_time: f64,
    /// Lifecycle state at the time of the snapshot.
    pub state: SimulationState,
    /// The temperature field.
    pub grid: Grid,
}

impl FieldSnapshot {
    /// Temperature at `(x, y)`, or `None` off the grid.
    pub fn temperature_at(&self, x: i32, y: i32) -> Option<f64> {
        self.grid.get(x, y)
    }
}

/// Single-threaded driver around the solver.
///
/// # Examples
///
/// ```
/// use calor_core::SimulationConfig;
/// use calor_engine::{Simulation, SimulationState};
///
/// let config = SimulationConfig::builder().hot_cell(1, 1).build().unwrap();
/// let mut sim = Simulation::new(config).unwrap();
/// assert_eq!(sim.state(), SimulationState::Running);
///
/// sim.tick();
/// sim.pause();
/// assert!(sim.tick().is_none());
/// assert_eq!(sim.step_count(), 1);
///
/// sim.reset().unwrap();
/// assert_eq!(sim.state(), SimulationState::Idle);
/// assert_eq!(sim.step_count(), 0);
/// ```
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    solver: Solver,
    state: SimulationState,
    step_count: u64,
    last_metrics: Option<StepMetrics>,
}

impl Simulation {
    /// Validate `config`, allocate the starting field, and enter `Running`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if validation fails.
    pub fn new(config: SimulationConfig) -> Result<Self, EngineError> {
        let grid = initialize(&config)?;
        let solver = Solver::new(&config);
        log_setup("simulation initialized", &config, &solver);
        Ok(Self {
            config,
            grid,
            solver,
            state: SimulationState::Running,
            step_count: 0,
            last_metrics: None,
        })
    }

    /// Advance exactly one step, whatever the state.
    pub fn step(&mut self) -> StepMetrics {
        let start = Instant::now();
        self.solver.step(&mut self.grid);
        let total_us = start.elapsed().as_micros() as u64;
        self.step_count += 1;

        let metrics = StepMetrics::collect(self.step_count, self.elapsed(), total_us, &self.grid);
        trace!(
            step = metrics.step,
            total_us,
            max = metrics.max_temperature,
            "step complete"
        );
        self.last_metrics = Some(metrics.clone());
        metrics
    }

    /// Advance one step if `Running`; do nothing while `Idle`.
    pub fn tick(&mut self) -> Option<StepMetrics> {
        match self.state {
            SimulationState::Running => Some(self.step()),
            SimulationState::Idle => None,
        }
    }

    /// Stop [`tick()`](Self::tick) from advancing.
    pub fn pause(&mut self) {
        self.state = SimulationState::Idle;
    }

    /// Let [`tick()`](Self::tick) advance again.
    pub fn resume(&mut self) {
        self.state = SimulationState::Running;
    }

    /// Flip between `Running` and `Idle`; returns the new state.
    pub fn toggle_pause(&mut self) -> SimulationState {
        self.state = match self.state {
            SimulationState::Running => SimulationState::Idle,
            SimulationState::Idle => SimulationState::Running,
        };
        self.state
    }

    /// Reallocate the field from the current configuration and enter `Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration no longer
    /// validates; the previous field is kept in that case.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.grid = initialize(&self.config)?;
        self.solver = Solver::new(&self.config);
        self.state = SimulationState::Idle;
        self.step_count = 0;
        self.last_metrics = None;
        info!("simulation reset");
        Ok(())
    }

    /// Replace the configuration, then reset.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if `config` is invalid; the running
    /// simulation is left untouched in that case.
    pub fn reconfigure(&mut self, config: SimulationConfig) -> Result<(), EngineError> {
        config.validate()?;
        self.config = config;
        self.reset()?;
        log_setup("simulation reconfigured", &self.config, &self.solver);
        Ok(())
    }

    /// Temperature at `(x, y)`, or `None` off the grid.
    pub fn temperature_at(&self, x: i32, y: i32) -> Option<f64> {
        self.grid.get(x, y)
    }

    /// Whether `(x, y)` is a configured hot cell.
    pub fn is_hot_cell(&self, x: i32, y: i32) -> bool {
        self.config.is_hot_cell(x, y)
    }

    /// Current field.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Whether the simulation is `Idle`.
    pub fn is_paused(&self) -> bool {
        self.state == SimulationState::Idle
    }

    /// Steps completed since the last setup or reset.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated seconds since the last setup or reset.
    pub fn elapsed(&self) -> f64 {
        self.step_count as f64 * self.config.discretization.dt
    }

    /// Metrics from the most recent step, if any since setup.
    pub fn last_metrics(&self) -> Option<&StepMetrics> {
        self.last_metrics.as_ref()
    }

    /// Owned copy of the field and run position.
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            step: self.step_count,
            sim_time: self.elapsed(),
            state: self.state,
            grid: self.grid.clone(),
        }
    }
}

fn log_setup(message: &str, config: &SimulationConfig, solver: &Solver) {
    info!(
        width = config.width,
        height = config.height,
        dt = config.discretization.dt,
        modes = ?solver.mode_names(),
        hot_cells = config.heat_source.cells.len(),
        "{message}"
    );
    if let Some(limit) = config.max_stable_dt() {
        if config.discretization.dt > limit {
            warn!(
                dt = config.discretization.dt,
                max_stable_dt = limit,
                "time step exceeds the explicit stability bound; the field may oscillate and diverge"
            );
        }
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("state", &self.state)
            .field("step_count", &self.step_count)
            .finish()
    }
}
