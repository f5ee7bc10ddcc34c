//! Reusable configuration fixtures.
//!
//! - [`scenario_3x3`]: pure conduction, isolated, pinned hot center.
//! - [`isolated_conduction`]: insulated plate with a free (unpinned) spike.
//! - [`radiating_cell`]: a single cell cooling by radiation only.
//! - [`unit_rod`]: a 1×N rod with unit material, for stability checks.

use calor_core::{SimulationConfig, SimulationConfigBuilder};

/// 3×3 grid, isolated, conduction only, hot cell `(1, 1)` pinned at 100
/// with everything else at 0. Default steel-like material, `dt = 0.01`.
pub fn scenario_3x3() -> SimulationConfig {
    SimulationConfig::builder()
        .size(3, 3)
        .isolated(true)
        .conduction(true)
        .convection(false)
        .radiation(false)
        .hot_cell(1, 1)
        .temperatures(100.0, 0.0, 20.0)
        .build()
        .expect("scenario_3x3 fixture is valid")
}

/// Builder for an insulated `width × height` plate whose hot cells start
/// hot but are free to cool (`isothermal = false`). Unit material so that
/// changes are visible within a few steps.
pub fn isolated_conduction_builder(width: u32, height: u32) -> SimulationConfigBuilder {
    SimulationConfig::builder()
        .size(width, height)
        .isolated(true)
        .conduction(true)
        .isothermal(false)
        .conductivity(1.0)
        .density(1.0)
        .specific_heat(1.0)
        .dt(0.1)
        .temperatures(100.0, 0.0, 20.0)
}

/// [`isolated_conduction_builder`] with one free hot cell at the center.
pub fn isolated_conduction(width: u32, height: u32) -> SimulationConfig {
    isolated_conduction_builder(width, height)
        .hot_cell(width as i32 / 2, height as i32 / 2)
        .build()
        .expect("isolated_conduction fixture is valid")
}

/// 1×1 cell at `start` degrees, radiating to `ambient`. No heat source,
/// no convection, `dt = 1000` s so cooling is visible per step.
pub fn radiating_cell(start: f64, ambient: f64) -> SimulationConfig {
    SimulationConfig::builder()
        .size(1, 1)
        .isolated(false)
        .convection(false)
        .radiation(true)
        .heat_source(false)
        .dt(1000.0)
        .temperatures(100.0, start, ambient)
        .build()
        .expect("radiating_cell fixture is valid")
}

/// `length × 1` rod with `k = ρ = cp = dx = 1`, so the stable step bound
/// is exactly 0.5. A free hot cell sits at `x = 0`.
pub fn unit_rod(length: u32, dt: f64) -> SimulationConfig {
    isolated_conduction_builder(length, 1)
        .dt(dt)
        .hot_cell(0, 0)
        .build()
        .expect("unit_rod fixture is valid")
}
