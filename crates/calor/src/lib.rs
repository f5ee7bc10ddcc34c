//! Calor: transient heat transfer on a rectangular grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Calor sub-crates. For most users, adding `calor` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use calor::prelude::*;
//!
//! // A 3×3 plate, insulated, with a pinned hot cell in the middle.
//! let config = SimulationConfig::builder()
//!     .size(3, 3)
//!     .hot_cell(1, 1)
//!     .temperatures(100.0, 0.0, 20.0)
//!     .build()
//!     .unwrap();
//!
//! // Free functions over a grid...
//! let mut grid = initialize(&config).unwrap();
//! step(&mut grid, &config);
//! assert_eq!(temperature_at(&grid, 1, 1), Some(100.0));
//! assert!(temperature_at(&grid, 1, 0).unwrap() > 0.0);
//!
//! // ...or a driver that tracks pause state and metrics.
//! let mut sim = Simulation::new(config).unwrap();
//! let metrics = sim.tick().unwrap();
//! assert_eq!(metrics.step, 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `calor-core` | Coordinates, sides, configuration, errors, constants |
//! | [`space`] | `calor-space` | Temperature grid and neighbour lookup |
//! | [`solver`] | `calor-solver` | Transfer modes, `Solver`, setup/step/reset functions |
//! | [`engine`] | `calor-engine` | Lockstep and realtime drivers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, configuration, and errors (`calor-core`).
pub use calor_core as types;

/// Temperature grid storage (`calor-space`).
pub use calor_space as space;

/// Heat-transfer solver (`calor-solver`).
///
/// Implement [`solver::TransferMode`] to experiment with additional
/// boundary physics.
pub use calor_solver as solver;

/// Simulation drivers (`calor-engine`).
///
/// [`engine::Simulation`] for lockstep stepping,
/// [`engine::RealtimeSimulation`] for background ticking.
pub use calor_engine as engine;

/// Common imports for typical Calor usage.
///
/// ```rust
/// use calor::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use calor_core::{
        CellCoord, Fluid, FluidSource, HeatSource, Material, Side, SimulationConfig,
        SimulationConfigBuilder, Temperatures, TransferModes,
    };

    // Errors
    pub use calor_core::ConfigError;
    pub use calor_engine::EngineError;

    // Grid
    pub use calor_space::Grid;

    // Solver
    pub use calor_solver::{
        initialize, is_hot_cell, reset, step, temperature_at, CellView, Solver, TransferMode,
    };

    // Engine
    pub use calor_engine::{
        FieldSnapshot, RealtimeConfig, RealtimeSimulation, Simulation, SimulationState,
        StepMetrics,
    };
}
