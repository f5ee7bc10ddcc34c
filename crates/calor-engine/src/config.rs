//! Tuning for the realtime driver.

use std::time::Duration;

use crate::error::EngineError;

/// Configuration for [`RealtimeSimulation`](crate::RealtimeSimulation).
#[derive(Clone, Debug, PartialEq)]
pub struct RealtimeConfig {
    /// Steps per second while running. Default: 60.
    pub tick_rate_hz: f64,
    /// Capacity of the bounded command channel. Default: 64.
    pub command_capacity: usize,
    /// Start in the paused (idle) state. Default: false.
    pub start_paused: bool,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            command_capacity: 64,
            start_paused: false,
        }
    }
}

impl RealtimeConfig {
    /// Check the tick rate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTickRate`] if `tick_rate_hz` is not a
    /// finite positive number, or is so small that one tick does not fit
    /// in a [`Duration`].
    pub fn validate(&self) -> Result<(), EngineError> {
        self.tick_budget().map(|_| ())
    }

    /// Wall-clock time allotted to one tick, `1 / tick_rate_hz`.
    ///
    /// # Errors
    ///
    /// As for [`validate()`](Self::validate).
    pub fn tick_budget(&self) -> Result<Duration, EngineError> {
        let invalid = || EngineError::InvalidTickRate {
            value: self.tick_rate_hz,
        };
        if !(self.tick_rate_hz > 0.0) || !self.tick_rate_hz.is_finite() {
            return Err(invalid());
        }
        Duration::try_from_secs_f64(1.0 / self.tick_rate_hz).map_err(|_| invalid())
    }

    /// Channel capacity with a floor of 1.
    pub fn resolved_command_capacity(&self) -> usize {
        self.command_capacity.max(1)
    }
}
