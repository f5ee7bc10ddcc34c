//! Fourier conduction between neighbouring cells.

use calor_core::{Axis, Side};

use crate::mode::{CellView, TransferMode};

/// Conduction: `q = -k (T - T_n) / Δ` on every side with a neighbour.
///
/// Edge sides carry no conductive flux. The flux through a shared face is
/// equal and opposite for the two cells, so conduction alone conserves
/// total heat on a uniform grid.
#[derive(Clone, Debug)]
pub struct Conduction {
    conductivity: f64,
    dx: f64,
    dy: f64,
}

impl Conduction {
    /// Conduction with thermal conductivity `k` and spacing `dx`, `dy`.
    pub fn new(conductivity: f64, dx: f64, dy: f64) -> Self {
        Self {
            conductivity,
            dx,
            dy,
        }
    }
}

impl TransferMode for Conduction {
    fn name(&self) -> &str {
        "conduction"
    }

    fn side_flux(&self, cell: &CellView<'_>, side: Side) -> f64 {
        let Some(tn) = cell.neighbour_temperature(side) else {
            return 0.0;
        };
        let spacing = match side.axis() {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        };
        -self.conductivity * (cell.temperature() - tn) / spacing
    }
}
