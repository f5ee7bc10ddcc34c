//! Stefan–Boltzmann radiation from boundary faces.

use calor_core::{Side, CELSIUS_TO_KELVIN, STEFAN_BOLTZMANN};

use crate::mode::{CellView, TransferMode};

/// Net radiative flux into a surface at `temperature` (°C) exchanging
/// with surroundings at `ambient` (°C):
/// `-ε σ ((T + 273.15)⁴ - (T∞ + 273.15)⁴)`.
pub fn radiative_flux(emissivity: f64, temperature: f64, ambient: f64) -> f64 {
    let t = temperature + CELSIUS_TO_KELVIN;
    let t_inf = ambient + CELSIUS_TO_KELVIN;
    -emissivity * STEFAN_BOLTZMANN * (t.powi(4) - t_inf.powi(4))
}

/// Radiation to the ambient through every boundary side.
#[derive(Clone, Debug)]
pub struct Radiation {
    emissivity: f64,
    ambient: f64,
}

impl Radiation {
    /// Radiation with surface emissivity `ε` to ambient `T∞` (°C).
    pub fn new(emissivity: f64, ambient: f64) -> Self {
        Self {
            emissivity,
            ambient,
        }
    }
}

impl TransferMode for Radiation {
    fn name(&self) -> &str {
        "radiation"
    }

    fn side_flux(&self, cell: &CellView<'_>, side: Side) -> f64 {
        if !cell.is_boundary(side) {
            return 0.0;
        }
        radiative_flux(self.emissivity, cell.temperature(), self.ambient)
    }

    fn boundary_only(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calor_space::Grid;
    use calor_test_utils::assert_rel_close;

    #[test]
    fn no_exchange_at_ambient() {
        assert_eq!(radiative_flux(1.0, 20.0, 20.0), 0.0);
    }

    #[test]
    fn hot_surface_loses_heat() {
        // 5.67e-8 * (373.15^4 - 293.15^4)
        let expected = -5.67e-8 * (373.15f64.powi(4) - 293.15f64.powi(4));
        assert_rel_close(radiative_flux(1.0, 100.0, 20.0), expected, 1e-12);
        assert!(radiative_flux(1.0, 100.0, 20.0) < 0.0);
        assert!(radiative_flux(1.0, 0.0, 20.0) > 0.0);
    }

    #[test]
    fn scales_with_emissivity() {
        let full = radiative_flux(1.0, 100.0, 20.0);
        assert_rel_close(radiative_flux(0.25, 100.0, 20.0), 0.25 * full, 1e-12);
        assert_eq!(radiative_flux(0.0, 100.0, 20.0), 0.0);
    }

    #[test]
    fn interior_sides_are_silent() {
        let grid = Grid::filled(3, 3, 100.0).unwrap();
        let mode = Radiation::new(1.0, 20.0);
        let center = CellView::new(&grid, 1, 1).unwrap();
        for side in Side::ALL {
            assert_eq!(mode.side_flux(&center, side), 0.0);
        }
        let edge = CellView::new(&grid, 0, 1).unwrap();
        assert!(mode.side_flux(&edge, Side::Left) < 0.0);
        assert_eq!(mode.side_flux(&edge, Side::Right), 0.0);
        assert!(mode.boundary_only());
    }
}
