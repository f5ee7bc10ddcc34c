//! Forced convection over exposed boundary faces.
//!
//! The flow arrives over one grid edge (the *leading* edge) and runs along
//! the two edges perpendicular to it (the *flanks*). Each gets its own
//! Nusselt correlation:
//!
//! | Edge    | Characteristic length `L`                     | Correlation                                             |
//! |---------|-----------------------------------------------|---------------------------------------------------------|
//! | leading | full span of the edge                         | `Re < 2000`: `0.564 Re^½ Pr^0.4`, else `0.13 Re^0.8 Pr^0.4` |
//! | flank   | flank span × distance fraction from leading edge | `Re < 5e5`: `0.664 Re^½ Pr^⅓`, else `0.037 Re^0.8 Pr^⅓`  |
//!
//! The edge opposite the leading edge exchanges nothing by convection.
//! With `h = Nu k_f / L`, the flux is `q = -h (T - T∞)`.

use calor_core::{Axis, Fluid, FluidSource, Side};

use crate::mode::{CellView, TransferMode};

/// Reynolds number below which the leading-edge flow is treated as laminar.
pub const LEADING_LAMINAR_RE: f64 = 2000.0;

/// Reynolds number below which the flank boundary layer is laminar.
pub const FLANK_LAMINAR_RE: f64 = 5e5;

/// Smallest flank distance fraction. Keeps `L > 0` at the leading edge.
pub const MIN_FLANK_FRACTION: f64 = 0.1;

/// Nusselt number on the leading edge.
pub fn leading_edge_nusselt(re: f64, pr: f64) -> f64 {
    if re < LEADING_LAMINAR_RE {
        0.564 * re.powf(0.5) * pr.powf(0.4)
    } else {
        0.13 * re.powf(0.8) * pr.powf(0.4)
    }
}

/// Nusselt number on a flank edge.
pub fn flank_nusselt(re: f64, pr: f64) -> f64 {
    if re < FLANK_LAMINAR_RE {
        0.664 * re.powf(0.5) * pr.powf(1.0 / 3.0)
    } else {
        0.037 * re.powf(0.8) * pr.powf(1.0 / 3.0)
    }
}

/// Fraction of the flank span between the leading edge and a cell that
/// is `distance` cells away from it, on a flank `cells` long.
///
/// Clamped below at [`MIN_FLANK_FRACTION`]; a single-cell flank has no
/// span to divide and also yields the minimum.
pub fn flank_fraction(distance: i32, cells: u32) -> f64 {
    if cells <= 1 {
        return MIN_FLANK_FRACTION;
    }
    (f64::from(distance) / f64::from(cells - 1)).max(MIN_FLANK_FRACTION)
}

/// Which sides play which role for a given flow source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowGeometry {
    /// Boundary side facing the incoming flow.
    pub leading: Side,
    /// The two boundary sides the flow runs along.
    pub flanks: [Side; 2],
}

impl FlowGeometry {
    /// Policy table entry for `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use calor_core::{FluidSource, Side};
    /// use calor_solver::FlowGeometry;
    ///
    /// let g = FlowGeometry::for_source(FluidSource::Right);
    /// assert_eq!(g.leading, Side::Right);
    /// assert_eq!(g.flanks, [Side::Down, Side::Up]);
    /// ```
    pub const fn for_source(source: FluidSource) -> Self {
        match source {
            FluidSource::Top => Self {
                leading: Side::Up,
                flanks: [Side::Left, Side::Right],
            },
            FluidSource::Bottom => Self {
                leading: Side::Down,
                flanks: [Side::Left, Side::Right],
            },
            FluidSource::Left => Self {
                leading: Side::Left,
                flanks: [Side::Down, Side::Up],
            },
            FluidSource::Right => Self {
                leading: Side::Right,
                flanks: [Side::Down, Side::Up],
            },
        }
    }

    /// Whether `side` is a flank.
    pub fn is_flank(&self, side: Side) -> bool {
        self.flanks.contains(&side)
    }

    /// How many cells `(x, y)` lies from the leading edge on a
    /// `width × height` grid.
    pub fn distance_from_leading(&self, x: i32, y: i32, width: u32, height: u32) -> i32 {
        match self.leading {
            Side::Up => height as i32 - 1 - y,
            Side::Down => y,
            Side::Right => width as i32 - 1 - x,
            Side::Left => x,
        }
    }
}

/// Forced convection to the ambient fluid.
#[derive(Clone, Debug)]
pub struct Convection {
    geometry: FlowGeometry,
    fluid: Fluid,
    prandtl: f64,
    ambient: f64,
    dx: f64,
    dy: f64,
}

impl Convection {
    /// Convection from `fluid` at ambient `T∞` over cells spaced `dx`, `dy`.
    pub fn new(fluid: &Fluid, ambient: f64, dx: f64, dy: f64) -> Self {
        Self {
            geometry: FlowGeometry::for_source(fluid.source),
            fluid: fluid.clone(),
            prandtl: fluid.prandtl(),
            ambient,
            dx,
            dy,
        }
    }

    /// Side roles in use.
    pub fn geometry(&self) -> FlowGeometry {
        self.geometry
    }

    /// Characteristic length of the leading edge on a `width × height` grid.
    pub fn leading_length(&self, width: u32, height: u32) -> f64 {
        match self.geometry.leading.axis() {
            Axis::Y => self.dx * f64::from(width),
            Axis::X => self.dy * f64::from(height),
        }
    }

    /// Characteristic length of a flank face of cell `(x, y)`.
    pub fn flank_length(&self, x: i32, y: i32, width: u32, height: u32) -> f64 {
        let distance = self.geometry.distance_from_leading(x, y, width, height);
        let (spacing, cells) = match self.geometry.leading.axis() {
            Axis::Y => (self.dy, height),
            Axis::X => (self.dx, width),
        };
        spacing * flank_fraction(distance, cells) * f64::from(cells)
    }

    /// Heat-transfer coefficient `h` on `side` of `cell`, or `None` when
    /// the side is interior or not exposed to the flow.
    pub fn coefficient(&self, cell: &CellView<'_>, side: Side) -> Option<f64> {
        if !cell.is_boundary(side) {
            return None;
        }
        let (w, h) = (cell.grid_width(), cell.grid_height());
        let (length, nu) = if side == self.geometry.leading {
            let l = self.leading_length(w, h);
            (l, leading_edge_nusselt(self.fluid.reynolds(l), self.prandtl))
        } else if self.geometry.is_flank(side) {
            let l = self.flank_length(cell.x(), cell.y(), w, h);
            (l, flank_nusselt(self.fluid.reynolds(l), self.prandtl))
        } else {
            return None;
        };
        Some(nu * self.fluid.conductivity / length)
    }
}

impl TransferMode for Convection {
    fn name(&self) -> &str {
        "convection"
    }

    fn side_flux(&self, cell: &CellView<'_>, side: Side) -> f64 {
        match self.coefficient(cell, side) {
            Some(h) => -h * (cell.temperature() - self.ambient),
            None => 0.0,
        }
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

    fn fluid(source: FluidSource) -> Fluid {
        Fluid {
            source,
            ..Fluid::default()
        }
    }

    // ── Correlations ────────────────────────────────────────────

    #[test]
    fn leading_switches_at_2000() {
        let pr = 7.0;
        assert_rel_close(
            leading_edge_nusselt(1999.0, pr),
            0.564 * 1999f64.sqrt() * pr.powf(0.4),
            1e-12,
        );
        assert_rel_close(
            leading_edge_nusselt(2000.0, pr),
            0.13 * 2000f64.powf(0.8) * pr.powf(0.4),
            1e-12,
        );
    }

    #[test]
    fn flank_switches_at_5e5() {
        let pr = 0.7;
        assert_rel_close(
            flank_nusselt(1e5, pr),
            0.664 * 1e5f64.sqrt() * pr.powf(1.0 / 3.0),
            1e-12,
        );
        assert_rel_close(
            flank_nusselt(6e5, pr),
            0.037 * 6e5f64.powf(0.8) * pr.powf(1.0 / 3.0),
            1e-12,
        );
    }

    #[test]
    fn still_fluid_has_zero_nusselt() {
        assert_eq!(leading_edge_nusselt(0.0, 4200.0), 0.0);
        assert_eq!(flank_nusselt(0.0, 4200.0), 0.0);
    }

    #[test]
    fn flank_fraction_clamps() {
        assert_eq!(flank_fraction(0, 5), MIN_FLANK_FRACTION);
        assert_eq!(flank_fraction(4, 5), 1.0);
        assert_eq!(flank_fraction(2, 5), 0.5);
        // 1/20 = 0.05 is below the clamp.
        assert_eq!(flank_fraction(1, 21), MIN_FLANK_FRACTION);
        assert_eq!(flank_fraction(0, 1), MIN_FLANK_FRACTION);
    }

    // ── Policy table ────────────────────────────────────────────

    #[test]
    fn geometry_per_source() {
        let top = FlowGeometry::for_source(FluidSource::Top);
        assert_eq!(top.leading, Side::Up);
        assert!(top.is_flank(Side::Left) && top.is_flank(Side::Right));
        let bottom = FlowGeometry::for_source(FluidSource::Bottom);
        assert_eq!(bottom.leading, Side::Down);
        let left = FlowGeometry::for_source(FluidSource::Left);
        assert_eq!(left.leading, Side::Left);
        assert!(left.is_flank(Side::Down) && left.is_flank(Side::Up));
    }

    #[test]
    fn leading_length_spans_the_edge() {
        let top = Convection::new(&fluid(FluidSource::Top), 20.0, 2.0, 3.0);
        assert_eq!(top.leading_length(5, 4), 10.0);
        let right = Convection::new(&fluid(FluidSource::Right), 20.0, 2.0, 3.0);
        assert_eq!(right.leading_length(5, 4), 12.0);
    }

    #[test]
    fn flank_length_grows_away_from_leading_edge() {
        // Top source on a 3-wide, 5-tall grid with dy = 2: flank span 10.
        let c = Convection::new(&fluid(FluidSource::Top), 20.0, 1.0, 2.0);
        assert_eq!(c.flank_length(0, 4, 3, 5), 2.0 * 0.1 * 5.0);
        assert_eq!(c.flank_length(0, 2, 3, 5), 2.0 * 0.5 * 5.0);
        assert_eq!(c.flank_length(0, 0, 3, 5), 2.0 * 1.0 * 5.0);

        let b = Convection::new(&fluid(FluidSource::Bottom), 20.0, 1.0, 2.0);
        assert_eq!(b.flank_length(0, 0, 3, 5), 2.0 * 0.1 * 5.0);
        assert_eq!(b.flank_length(0, 4, 3, 5), 2.0 * 1.0 * 5.0);

        let l = Convection::new(&fluid(FluidSource::Left), 20.0, 4.0, 1.0);
        assert_eq!(l.flank_length(2, 0, 3, 5), 4.0 * 1.0 * 3.0);
        let r = Convection::new(&fluid(FluidSource::Right), 20.0, 4.0, 1.0);
        assert_eq!(r.flank_length(0, 0, 3, 5), 4.0 * 1.0 * 3.0);
        assert_eq!(r.flank_length(2, 0, 3, 5), 4.0 * 0.1 * 3.0);
    }

    #[test]
    fn top_source_fluxes_on_corner_cell() {
        let f = fluid(FluidSource::Top);
        let grid = Grid::filled(3, 3, 50.0).unwrap();
        let c = Convection::new(&f, 20.0, 1.0, 1.0);
        let corner = CellView::new(&grid, 0, 2).unwrap();

        let pr = f.prandtl();
        let l_lead = 3.0;
        let h_lead = leading_edge_nusselt(f.reynolds(l_lead), pr) * f.conductivity / l_lead;
        assert_rel_close(c.side_flux(&corner, Side::Up), -h_lead * 30.0, 1e-12);

        // Top row sits on the leading edge: fraction clamps to 0.1.
        let l_flank = 1.0 * 0.1 * 3.0;
        let h_flank = flank_nusselt(f.reynolds(l_flank), pr) * f.conductivity / l_flank;
        assert_rel_close(c.side_flux(&corner, Side::Left), -h_flank * 30.0, 1e-12);

        assert_eq!(c.side_flux(&corner, Side::Right), 0.0);
        assert_eq!(c.side_flux(&corner, Side::Down), 0.0);
    }

    #[test]
    fn trailing_edge_is_not_convective() {
        let grid = Grid::filled(3, 3, 50.0).unwrap();
        let c = Convection::new(&fluid(FluidSource::Top), 20.0, 1.0, 1.0);
        let bottom = CellView::new(&grid, 1, 0).unwrap();
        assert_eq!(c.coefficient(&bottom, Side::Down), None);
        assert_eq!(c.side_flux(&bottom, Side::Down), 0.0);
    }

    #[test]
    fn right_source_uses_x_leading_and_y_flanks() {
        let f = fluid(FluidSource::Right);
        let grid = Grid::filled(4, 2, 80.0).unwrap();
        let c = Convection::new(&f, 20.0, 1.0, 1.0);
        let cell = CellView::new(&grid, 3, 0).unwrap();
        assert!(c.coefficient(&cell, Side::Right).is_some());
        assert!(c.coefficient(&cell, Side::Down).is_some());
        assert!(c.coefficient(&cell, Side::Left).is_none());
        assert!(c.side_flux(&cell, Side::Right) < 0.0);
    }

    #[test]
    fn cell_at_ambient_exchanges_nothing() {
        let grid = Grid::filled(2, 2, 20.0).unwrap();
        let c = Convection::new(&Fluid::default(), 20.0, 1.0, 1.0);
        let cell = CellView::new(&grid, 0, 1).unwrap();
        for side in Side::ALL {
            assert_eq!(c.side_flux(&cell, side), 0.0);
        }
    }
}
