//! Host-side drivers for the Calor heat-transfer solver.
//!
//! Two ways to run a simulation:
//!
//! - [`Simulation`]: lockstep. The host calls [`step()`](Simulation::step)
//!   or [`tick()`](Simulation::tick) itself, typically once per frame.
//! - [`RealtimeSimulation`]: the same simulation moved onto a background
//!   tick thread stepping at [`RealtimeConfig::tick_rate_hz`], controlled
//!   over a bounded command channel.
//!
//! Both log through `tracing`; install a subscriber in the binary to see
//! setup, stability warnings and per-step timing.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod realtime;
pub mod simulation;
pub(crate) mod tick_thread;

pub use config::RealtimeConfig;
pub use error::EngineError;
pub use metrics::StepMetrics;
pub use realtime::RealtimeSimulation;
pub use simulation::{FieldSnapshot, Simulation, SimulationState};
