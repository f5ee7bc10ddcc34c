//! Simulation configuration, defaults, builder, and validation.
//!
//! [`SimulationConfig`] is the entire externally tunable surface of the
//! solver. It is immutable for the duration of a run; a host changes it
//! only between runs and re-validates via
//! [`validate()`](SimulationConfig::validate) before setting up again.

use indexmap::IndexSet;

use crate::coord::CellCoord;
use crate::error::ConfigError;

// ── Material ───────────────────────────────────────────────────────

/// Thermal properties of the (single) solid material.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Thermal conductivity `k` in W/(m·K).
    pub conductivity: f64,
    /// Density `ρ` in kg/m³.
    pub density: f64,
    /// Specific heat `cp` in J/(kg·K).
    pub specific_heat: f64,
    /// Surface emissivity `ε`, in `[0, 1]`.
    pub emissivity: f64,
}

impl Material {
    /// Volumetric heat capacity `ρ·cp` in J/(m³·K).
    pub fn heat_capacity(&self) -> f64 {
        self.density * self.specific_heat
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            conductivity: 0.5,
            density: 7800.0,
            specific_heat: 500.0,
            emissivity: 1.0,
        }
    }
}

// ── Fluid ──────────────────────────────────────────────────────────

/// Which grid edge the external flow arrives from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FluidSource {
    /// Flow arrives over the top edge.
    #[default]
    Top,
    /// Flow arrives over the bottom edge.
    Bottom,
    /// Flow arrives over the left edge.
    Left,
    /// Flow arrives over the right edge.
    Right,
}

/// Properties of the surrounding fluid for forced convection.
#[derive(Clone, Debug, PartialEq)]
pub struct Fluid {
    /// Density in kg/m³.
    pub density: f64,
    /// Thermal conductivity in W/(m·K).
    pub conductivity: f64,
    /// Dynamic viscosity `μ` in kg/(m·s).
    pub viscosity: f64,
    /// Specific heat in J/(kg·K).
    pub specific_heat: f64,
    /// Free-stream speed in m/s.
    pub speed: f64,
    /// Edge the flow arrives from.
    pub source: FluidSource,
}

impl Fluid {
    /// Prandtl number `Pr = cp·μ / k`. Constant for a run.
    pub fn prandtl(&self) -> f64 {
        self.specific_heat * self.viscosity / self.conductivity
    }

    /// Reynolds number `Re = ρ·u·L / μ` over characteristic length `length`.
    pub fn reynolds(&self, length: f64) -> f64 {
        self.density * self.speed * length / self.viscosity
    }
}

impl Default for Fluid {
    fn default() -> Self {
        Self {
            density: 1000.0,
            conductivity: 10.0,
            viscosity: 10.0,
            specific_heat: 4200.0,
            speed: 5.0,
            source: FluidSource::Top,
        }
    }
}

// ── Discretization ─────────────────────────────────────────────────

/// Time step and cell spacing.
#[derive(Clone, Debug, PartialEq)]
pub struct Discretization {
    /// Time step in seconds.
    pub dt: f64,
    /// Cell width in metres.
    pub dx: f64,
    /// Cell height in metres.
    pub dy: f64,
}

impl Default for Discretization {
    fn default() -> Self {
        Self {
            dt: 0.01,
            dx: 1.0,
            dy: 1.0,
        }
    }
}

// ── Transfer modes ─────────────────────────────────────────────────

/// Which heat-transfer modes participate in a step.
///
/// When `isolated` is set the grid is fully insulated: convection and
/// radiation are ignored regardless of their own flags. Use
/// [`convection_active`](Self::convection_active) and
/// [`radiation_active`](Self::radiation_active) rather than reading the
/// raw flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferModes {
    /// No heat crosses the outer boundary.
    pub isolated: bool,
    /// Fourier conduction between neighbouring cells.
    pub conduction: bool,
    /// Forced convection on exposed boundary edges.
    pub convection: bool,
    /// Stefan–Boltzmann radiation on boundary edges.
    pub radiation: bool,
}

impl TransferModes {
    /// Convection applies this run.
    pub fn convection_active(&self) -> bool {
        !self.isolated && self.convection
    }

    /// Radiation applies this run.
    pub fn radiation_active(&self) -> bool {
        !self.isolated && self.radiation
    }
}

impl Default for TransferModes {
    fn default() -> Self {
        Self {
            isolated: true,
            conduction: true,
            convection: true,
            radiation: true,
        }
    }
}

// ── Heat source ────────────────────────────────────────────────────

/// Cells started at (and optionally pinned to) the hot temperature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeatSource {
    /// Whether the hot cells exist at all.
    pub enabled: bool,
    /// Hot cells hold the hot temperature every step instead of evolving.
    pub isothermal: bool,
    /// Coordinates of the hot cells, in insertion order.
    pub cells: IndexSet<CellCoord>,
}

impl HeatSource {
    /// Whether the given cell is one of the configured hot cells.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&CellCoord::new(x, y))
    }

    /// Whether hot cells are overridden to the hot temperature each step.
    pub fn pins_cells(&self) -> bool {
        self.enabled && self.isothermal
    }
}

impl Default for HeatSource {
    fn default() -> Self {
        Self {
            enabled: true,
            isothermal: true,
            cells: IndexSet::new(),
        }
    }
}

// ── Temperatures ───────────────────────────────────────────────────

/// Reference temperatures, all in degrees Celsius.
#[derive(Clone, Debug, PartialEq)]
pub struct Temperatures {
    /// Heat-source temperature (`T_hot`).
    pub hot: f64,
    /// Initial background temperature (`T_cold`).
    pub cold: f64,
    /// Far-field ambient temperature (`T_infinity`).
    pub ambient: f64,
}

impl Default for Temperatures {
    fn default() -> Self {
        Self {
            hot: 100.0,
            cold: 0.0,
            ambient: 20.0,
        }
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for one simulation run.
///
/// # Examples
///
/// ```
/// use calor_core::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .size(3, 3)
///     .hot_cell(1, 1)
///     .build()
///     .unwrap();
/// assert!(config.is_hot_cell(1, 1));
/// assert_eq!(config.cell_count(), 9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Number of cells horizontally.
    pub width: u32,
    /// Number of cells vertically.
    pub height: u32,
    /// Solid material properties.
    pub material: Material,
    /// Surrounding fluid properties.
    pub fluid: Fluid,
    /// Time step and spacing.
    pub discretization: Discretization,
    /// Enabled transfer modes and isolation.
    pub modes: TransferModes,
    /// Hot cells and their policy.
    pub heat_source: HeatSource,
    /// Reference temperatures.
    pub temperatures: Temperatures,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            material: Material::default(),
            fluid: Fluid::default(),
            discretization: Discretization::default(),
            modes: TransferModes::default(),
            heat_source: HeatSource::default(),
            temperatures: Temperatures::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new builder seeded with the default configuration.
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder {
            config: SimulationConfig::default(),
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `(x, y)` is a configured hot cell.
    pub fn is_hot_cell(&self, x: i32, y: i32) -> bool {
        self.heat_source.contains(x, y)
    }

    /// Largest time step for which the explicit conduction update stays
    /// stable: `ρ·cp / (2k · Σ 1/Δ²)` over the axes with more than one
    /// cell. For a 1×N grid this is `Δ²·ρ·cp / (2k)`.
    ///
    /// Returns `None` when conduction is disabled, `k = 0`, or the grid is
    /// a single cell (no conduction can occur).
    pub fn max_stable_dt(&self) -> Option<f64> {
        let k = self.material.conductivity;
        if !self.modes.conduction || !(k > 0.0) {
            return None;
        }
        let d = &self.discretization;
        let mut inv_sq = 0.0;
        if self.width > 1 {
            inv_sq += 1.0 / (d.dx * d.dx);
        }
        if self.height > 1 {
            inv_sq += 1.0 / (d.dy * d.dy);
        }
        if inv_sq == 0.0 {
            return None;
        }
        Some(self.material.heat_capacity() / (2.0 * k * inv_sq))
    }

    /// Check every setup-time invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant:
    /// - zero `width` or `height`
    /// - non-positive or non-finite `dt`, `dx`, `dy`, density, specific heat
    /// - negative conductivity, emissivity outside `[0, 1]`
    /// - non-finite reference temperatures
    /// - unusable fluid properties while convection is active
    /// - hot cells outside the grid while the heat source is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        let d = &self.discretization;
        let m = &self.material;
        for (name, value) in [
            ("dt", d.dt),
            ("dx", d.dx),
            ("dy", d.dy),
            ("density", m.density),
            ("specific_heat", m.specific_heat),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(m.conductivity >= 0.0) || !m.conductivity.is_finite() {
            return Err(ConfigError::NegativeConductivity {
                value: m.conductivity,
            });
        }
        if !(0.0..=1.0).contains(&m.emissivity) {
            return Err(ConfigError::EmissivityOutOfRange {
                value: m.emissivity,
            });
        }

        let t = &self.temperatures;
        for (name, value) in [("hot", t.hot), ("cold", t.cold), ("ambient", t.ambient)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteTemperature { name, value });
            }
        }

        if self.modes.convection_active() {
            let f = &self.fluid;
            for (name, value) in [
                ("density", f.density),
                ("conductivity", f.conductivity),
                ("viscosity", f.viscosity),
                ("specific_heat", f.specific_heat),
            ] {
                if !(value > 0.0) || !value.is_finite() {
                    return Err(ConfigError::InvalidFluid { name, value });
                }
            }
            if !(f.speed >= 0.0) || !f.speed.is_finite() {
                return Err(ConfigError::InvalidFluid {
                    name: "speed",
                    value: f.speed,
                });
            }
        }

        if self.heat_source.enabled {
            for &cell in &self.heat_source.cells {
                let in_x = cell.x >= 0 && (cell.x as i64) < self.width as i64;
                let in_y = cell.y >= 0 && (cell.y as i64) < self.height as i64;
                if !(in_x && in_y) {
                    return Err(ConfigError::HotCellOutOfBounds {
                        cell,
                        width: self.width,
                        height: self.height,
                    });
                }
            }
        }

        Ok(())
    }
}

// ── Builder ────────────────────────────────────────────────────────

/// Builder for [`SimulationConfig`].
///
/// Starts from the defaults (3×3 grid, steel-like material, water-like
/// fluid from the top, isolated with every mode enabled, isothermal heat
/// source with no cells). [`build()`](Self::build) validates.
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Grid dimensions in cells.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Replace the material wholesale.
    pub fn material(mut self, material: Material) -> Self {
        self.config.material = material;
        self
    }

    /// Thermal conductivity `k`.
    pub fn conductivity(mut self, k: f64) -> Self {
        self.config.material.conductivity = k;
        self
    }

    /// Density `ρ`.
    pub fn density(mut self, rho: f64) -> Self {
        self.config.material.density = rho;
        self
    }

    /// Specific heat `cp`.
    pub fn specific_heat(mut self, cp: f64) -> Self {
        self.config.material.specific_heat = cp;
        self
    }

    /// Emissivity `ε`.
    pub fn emissivity(mut self, e: f64) -> Self {
        self.config.material.emissivity = e;
        self
    }

    /// Replace the fluid wholesale.
    pub fn fluid(mut self, fluid: Fluid) -> Self {
        self.config.fluid = fluid;
        self
    }

    /// Edge the flow arrives from.
    pub fn fluid_source(mut self, source: FluidSource) -> Self {
        self.config.fluid.source = source;
        self
    }

    /// Free-stream speed.
    pub fn fluid_speed(mut self, speed: f64) -> Self {
        self.config.fluid.speed = speed;
        self
    }

    /// Time step in seconds.
    pub fn dt(mut self, dt: f64) -> Self {
        self.config.discretization.dt = dt;
        self
    }

    /// Cell spacing in metres.
    pub fn spacing(mut self, dx: f64, dy: f64) -> Self {
        self.config.discretization.dx = dx;
        self.config.discretization.dy = dy;
        self
    }

    /// Fully insulated boundary.
    pub fn isolated(mut self, isolated: bool) -> Self {
        self.config.modes.isolated = isolated;
        self
    }

    /// Enable or disable conduction.
    pub fn conduction(mut self, on: bool) -> Self {
        self.config.modes.conduction = on;
        self
    }

    /// Enable or disable convection.
    pub fn convection(mut self, on: bool) -> Self {
        self.config.modes.convection = on;
        self
    }

    /// Enable or disable radiation.
    pub fn radiation(mut self, on: bool) -> Self {
        self.config.modes.radiation = on;
        self
    }

    /// Whether the heat source exists.
    pub fn heat_source(mut self, enabled: bool) -> Self {
        self.config.heat_source.enabled = enabled;
        self
    }

    /// Whether hot cells are pinned every step.
    pub fn isothermal(mut self, on: bool) -> Self {
        self.config.heat_source.isothermal = on;
        self
    }

    /// Add one hot cell.
    pub fn hot_cell(mut self, x: i32, y: i32) -> Self {
        self.config.heat_source.cells.insert(CellCoord::new(x, y));
        self
    }

    /// Replace all hot cells.
    pub fn hot_cells(mut self, cells: impl IntoIterator<Item = CellCoord>) -> Self {
        self.config.heat_source.cells = cells.into_iter().collect();
        self
    }

    /// Hot, cold, and ambient temperatures in Celsius.
    pub fn temperatures(mut self, hot: f64, cold: f64, ambient: f64) -> Self {
        self.config.temperatures = Temperatures { hot, cold, ambient };
        self
    }

    /// Build the configuration, validating all invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`SimulationConfig::validate()`].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
