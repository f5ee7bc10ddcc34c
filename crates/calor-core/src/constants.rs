//! Physical constants used by the transfer modes.

/// Stefan–Boltzmann constant σ in W/(m²·K⁴), at the precision the
/// radiation model is calibrated against.
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Offset from degrees Celsius to kelvin. Temperatures are stored in
/// Celsius; radiation works in absolute units.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;
