//! Benchmark profiles and utilities for the Calor heat-transfer solver.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarks and
//! examples:
//!
//! - [`reference_profile`]: 100x100 plate (10K cells), every mode on
//! - [`stress_profile`]: 316x316 plate (~100K cells) for stress testing
//! - [`seeded_hot_cells`]: deterministic hot-cell placement via seed
//! - [`seeded_field`]: deterministic random temperature field via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use calor_core::{CellCoord, SimulationConfig};
use calor_space::Grid;
use indexmap::IndexSet;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a reference benchmark profile: 100x100 plate (10K cells).
///
/// Open boundary with conduction, convection (flow from the top), and
/// radiation; eight pinned hot cells. `dt = 10` s is far below the
/// stability bound of ~1.95e6 s for the default material.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    open_plate(100, 100, 8, seed)
}

/// Build a stress benchmark profile: 316x316 plate (~100K cells).
///
/// Same physics as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    open_plate(316, 316, 32, seed)
}

fn open_plate(width: u32, height: u32, hot: usize, seed: u64) -> SimulationConfig {
    let mut config = SimulationConfig {
        width,
        height,
        ..SimulationConfig::default()
    };
    config.modes.isolated = false;
    config.discretization.dt = 10.0;
    config.heat_source.cells = seeded_hot_cells(width, height, hot, seed);
    config
}

/// Pick `n` distinct in-bounds hot cells, deterministically from `seed`.
///
/// `n` is capped at the cell count.
pub fn seeded_hot_cells(width: u32, height: u32, n: usize, seed: u64) -> IndexSet<CellCoord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = n.min(width as usize * height as usize);
    let mut cells = IndexSet::with_capacity(n);
    while cells.len() < n {
        let x = rng.gen_range(0..width as i32);
        let y = rng.gen_range(0..height as i32);
        cells.insert(CellCoord::new(x, y));
    }
    cells
}

/// A `width x height` field with temperatures uniform in `[lo, hi)`,
/// deterministically from `seed`.
///
/// Returns `None` for an empty grid.
pub fn seeded_field(width: u32, height: u32, lo: f64, hi: f64, seed: u64) -> Option<Grid> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..width as usize * height as usize)
        .map(|_| lo + (hi - lo) * rng.gen::<f64>())
        .collect();
    Grid::from_values(width, height, values).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let config = reference_profile(42);
        config.validate().unwrap();
        assert_eq!(config.cell_count(), 10_000);
        assert_eq!(config.heat_source.cells.len(), 8);
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn reference_dt_is_stable() {
        let config = reference_profile(7);
        assert!(config.discretization.dt < config.max_stable_dt().unwrap());
    }

    #[test]
    fn hot_cells_deterministic_and_in_bounds() {
        let a = seeded_hot_cells(20, 10, 15, 42);
        let b = seeded_hot_cells(20, 10, 15, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 15);
        for c in &a {
            assert!((0..20).contains(&c.x) && (0..10).contains(&c.y), "{c}");
        }
    }

    #[test]
    fn hot_cells_capped_at_cell_count() {
        assert_eq!(seeded_hot_cells(2, 2, 10, 1).len(), 4);
    }

    #[test]
    fn seeded_field_in_range() {
        let g = seeded_field(8, 8, -10.0, 50.0, 3).unwrap();
        assert!(g.temperatures().iter().all(|&t| (-10.0..50.0).contains(&t)));
        assert_eq!(Some(g), seeded_field(8, 8, -10.0, 50.0, 3));
        assert!(seeded_field(0, 8, 0.0, 1.0, 3).is_none());
    }
}
