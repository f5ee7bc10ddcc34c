//! Error types for configuration and setup.
//!
//! Every variant is detected at setup time (`initialize`, `reset`, or
//! config construction). A validated configuration never produces an
//! error mid-step.

use std::error::Error;
use std::fmt;

use crate::coord::CellCoord;

/// Errors detected by [`SimulationConfig::validate()`](crate::SimulationConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid has zero width or zero height.
    EmptyGrid {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// A quantity that the integrator divides by (or steps with) is zero,
    /// negative, NaN, or infinite.
    NonPositive {
        /// Which parameter (`"dt"`, `"dx"`, `"density"`, ...).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Thermal conductivity is negative or non-finite.
    NegativeConductivity {
        /// The offending value.
        value: f64,
    },
    /// Emissivity lies outside `[0, 1]`.
    EmissivityOutOfRange {
        /// The offending value.
        value: f64,
    },
    /// A fluid property used by the convection correlations is unusable
    /// while convection is active (non-positive, or negative for speed).
    InvalidFluid {
        /// Which fluid property.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A reference temperature is NaN or infinite.
    NonFiniteTemperature {
        /// Which temperature (`"hot"`, `"cold"`, `"ambient"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A heat-source cell lies outside `[0, width) x [0, height)`.
    HotCellOutOfBounds {
        /// The offending coordinate.
        cell: CellCoord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be finite and > 0, got {value}")
            }
            Self::NegativeConductivity { value } => {
                write!(f, "conductivity must be finite and >= 0, got {value}")
            }
            Self::EmissivityOutOfRange { value } => {
                write!(f, "emissivity must lie in [0, 1], got {value}")
            }
            Self::InvalidFluid { name, value } => {
                write!(f, "fluid {name} is invalid while convection is active: {value}")
            }
            Self::NonFiniteTemperature { name, value } => {
                write!(f, "{name} temperature must be finite, got {value}")
            }
            Self::HotCellOutOfBounds {
                cell,
                width,
                height,
            } => {
                write!(f, "hot cell {cell} out of bounds: [0, {width}) x [0, {height})")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let e = ConfigError::NonPositive {
            name: "dt",
            value: -0.5,
        };
        assert_eq!(e.to_string(), "dt must be finite and > 0, got -0.5");
    }

    #[test]
    fn display_hot_cell_bounds() {
        let e = ConfigError::HotCellOutOfBounds {
            cell: CellCoord::new(5, -1),
            width: 3,
            height: 4,
        };
        assert_eq!(
            e.to_string(),
            "hot cell (5, -1) out of bounds: [0, 3) x [0, 4)"
        );
    }
}
