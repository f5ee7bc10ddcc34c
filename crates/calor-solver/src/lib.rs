//! Explicit finite-difference heat-transfer solver.
//!
//! Each step evaluates, for every cell, the heat flux through its four
//! sides from the enabled [`TransferMode`]s and integrates with explicit
//! Euler:
//!
//! ```text
//! dT/dt = ((q_left + q_right) / dx + (q_down + q_up) / dy) / (ρ cp)
//! ```
//!
//! All cells read the start-of-step field and are committed together
//! (Jacobi update). Isothermal hot cells skip the flux computation and
//! are written at the hot temperature.
//!
//! | Mode | Applies on | Active when |
//! |---|---|---|
//! | [`Conduction`] | sides with a neighbour | `conduction` |
//! | [`Convection`] | leading and flank boundary sides | `!isolated && convection` |
//! | [`Radiation`] | every boundary side | `!isolated && radiation` |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod conduction;
pub mod convection;
pub mod mode;
pub mod radiation;
pub mod solver;

pub use conduction::Conduction;
pub use convection::{Convection, FlowGeometry};
pub use mode::{CellView, TransferMode};
pub use radiation::Radiation;
pub use solver::{initialize, is_hot_cell, reset, step, temperature_at, Solver};
