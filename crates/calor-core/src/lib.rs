//! Core types and configuration for the Calor heat-transfer solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: cell coordinates,
//! grid sides, the [`SimulationConfig`] surface, physical constants, and
//! the [`ConfigError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod constants;
pub mod coord;
pub mod error;

pub use config::{
    Discretization, Fluid, FluidSource, HeatSource, Material, SimulationConfig,
    SimulationConfigBuilder, Temperatures, TransferModes,
};
pub use constants::{CELSIUS_TO_KELVIN, STEFAN_BOLTZMANN};
pub use coord::{Axis, CellCoord, Side};
pub use error::ConfigError;
