//! Test utilities for Calor development.
//!
//! Provides float assertions, field inspection helpers, and the standard
//! configuration fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use calor_space::Grid;

/// Assert that `actual` is within `tol` of `expected`.
///
/// `tol` is absolute. Panics with both values and the difference.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "expected {expected}, got {actual} (diff {diff:e} > tol {tol:e})"
    );
}

/// Assert that `actual` is within `rel` relative error of `expected`.
///
/// Falls back to an absolute check against `rel` when `expected` is 0.
#[track_caller]
pub fn assert_rel_close(actual: f64, expected: f64, rel: f64) {
    let scale = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel * scale,
        "expected {expected}, got {actual} (rel diff {:e} > {rel:e})",
        diff / scale
    );
}

/// Sum of all cell temperatures.
pub fn field_sum(grid: &Grid) -> f64 {
    grid.temperatures().iter().sum()
}

/// Largest absolute difference between the grid and its left-right mirror.
pub fn mirror_x_error(grid: &Grid) -> f64 {
    let w = grid.width() as i32;
    let mut worst: f64 = 0.0;
    for c in grid.coords() {
        let a = grid.get(c.x, c.y).unwrap_or(f64::NAN);
        let b = grid.get(w - 1 - c.x, c.y).unwrap_or(f64::NAN);
        worst = worst.max((a - b).abs());
    }
    worst
}

/// Largest absolute difference between the grid and its top-bottom mirror.
pub fn mirror_y_error(grid: &Grid) -> f64 {
    let h = grid.height() as i32;
    let mut worst: f64 = 0.0;
    for c in grid.coords() {
        let a = grid.get(c.x, c.y).unwrap_or(f64::NAN);
        let b = grid.get(c.x, h - 1 - c.y).unwrap_or(f64::NAN);
        worst = worst.max((a - b).abs());
    }
    worst
}

/// Render the grid as rows of numbers, top row first. Handy in assertion
/// messages.
pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for y in (0..grid.height() as i32).rev() {
        if let Some(row) = grid.row(y) {
            let cells: Vec<String> = row.iter().map(|t| format!("{t:10.4}")).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
    }
    out
}
