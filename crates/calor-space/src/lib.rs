//! Grid storage for Calor simulations.
//!
//! [`Grid`] owns a row-major temperature field (row 0 at the bottom) and
//! provides bounds-safe indexing and 4-connected neighbour lookup. It has
//! no behaviour beyond storage: the solver decides what happens at edges.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::SpaceError;
pub use grid::{FieldSummary, Grid};
