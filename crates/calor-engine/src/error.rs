//! Error type for the simulation drivers.

use std::error::Error;
use std::fmt;

use calor_core::ConfigError;

/// Errors from [`Simulation`](crate::Simulation) setup and the realtime
/// driver.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// The simulation configuration failed validation.
    Config(ConfigError),
    /// `tick_rate_hz` is zero, negative, NaN, or infinite.
    InvalidTickRate {
        /// The offending value.
        value: f64,
    },
    /// The OS refused to spawn the tick thread.
    ThreadSpawnFailed {
        /// Underlying I/O error message.
        reason: String,
    },
    /// The tick thread has stopped and can no longer take commands.
    Disconnected,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and > 0, got {value}")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "failed to spawn tick thread: {reason}")
            }
            Self::Disconnected => write!(f, "tick thread has shut down"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
