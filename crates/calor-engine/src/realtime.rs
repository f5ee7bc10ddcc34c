//! Background-thread driver stepping at a fixed rate.
//!
//! ```text
//! Host thread                         Tick thread
//!     |                                   |
//!     |--pause()/resume()---------------->| cmd_rx.recv_timeout(budget)
//!     |   [cmd_tx: bounded(capacity)]     | sim.tick()
//!     |--snapshot()---------------------->|
//!     |<--FieldSnapshot via reply_tx------|
//!     |--shutdown()---------------------->| returns Simulation
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use calor_core::SimulationConfig;
use crossbeam_channel::Sender;
use tracing::info;

use crate::config::RealtimeConfig;
use crate::error::EngineError;
use crate::simulation::{FieldSnapshot, Simulation};
use crate::tick_thread::{Command, TickThreadState};

/// Simulation running on a dedicated tick thread.
///
/// Parameter changes only happen between steps: every control call is a
/// message the tick thread applies before its next step.
pub struct RealtimeSimulation {
    cmd_tx: Option<Sender<Command>>,
    shutdown_flag: Arc<AtomicBool>,
    tick_thread: Option<JoinHandle<Simulation>>,
}

impl RealtimeSimulation {
    /// Validate both configurations, set up the simulation, and spawn the
    /// tick thread.
    ///
    /// # Errors
    ///
    /// [`EngineError::Config`] or [`EngineError::InvalidTickRate`] on bad
    /// configuration, [`EngineError::ThreadSpawnFailed`] if the thread
    /// cannot be created.
    pub fn start(config: SimulationConfig, realtime: RealtimeConfig) -> Result<Self, EngineError> {
        let tick_budget = realtime.tick_budget()?;
        let mut sim = Simulation::new(config)?;
        if realtime.start_paused {
            sim.pause();
        }

        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(realtime.resolved_command_capacity());
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let tick_shutdown = Arc::clone(&shutdown_flag);
        let tick_rate_hz = realtime.tick_rate_hz;

        let tick_thread = thread::Builder::new()
            .name("calor-tick".into())
            .spawn(move || TickThreadState::new(sim, cmd_rx, tick_shutdown, tick_budget).run())
            .map_err(|e| EngineError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        info!(tick_rate_hz, paused = realtime.start_paused, "realtime simulation started");
        Ok(Self {
            cmd_tx: Some(cmd_tx),
            shutdown_flag,
            tick_thread: Some(tick_thread),
        })
    }

    fn send(&self, cmd: Command) -> Result<(), EngineError> {
        let tx = self.cmd_tx.as_ref().ok_or(EngineError::Disconnected)?;
        tx.send(cmd).map_err(|_| EngineError::Disconnected)
    }

    /// Stop stepping until [`resume()`](Self::resume).
    pub fn pause(&self) -> Result<(), EngineError> {
        self.send(Command::Pause)
    }

    /// Resume stepping.
    pub fn resume(&self) -> Result<(), EngineError> {
        self.send(Command::Resume)
    }

    /// Flip between running and paused.
    pub fn toggle_pause(&self) -> Result<(), EngineError> {
        self.send(Command::TogglePause)
    }

    /// Reset the field from the current configuration; the simulation is
    /// paused afterwards. Blocks until applied.
    pub fn reset(&self) -> Result<(), EngineError> {
        let (reply, rx) = crossbeam_channel::bounded(1);
        self.send(Command::Reset { reply })?;
        rx.recv().map_err(|_| EngineError::Disconnected)?
    }

    /// Advance exactly one step (even while paused) and return the field
    /// after it.
    pub fn step_once(&self) -> Result<FieldSnapshot, EngineError> {
        let (reply, rx) = crossbeam_channel::bounded(1);
        self.send(Command::StepOnce { reply })?;
        rx.recv().map_err(|_| EngineError::Disconnected)
    }

    /// Swap in a new configuration and reset. Blocks until applied.
    ///
    /// # Errors
    ///
    /// [`EngineError::Config`] if `config` is invalid; the running
    /// simulation is untouched in that case.
    pub fn reconfigure(&self, config: SimulationConfig) -> Result<(), EngineError> {
        let (reply, rx) = crossbeam_channel::bounded(1);
        self.send(Command::Reconfigure {
            config: Box::new(config),
            reply,
        })?;
        rx.recv().map_err(|_| EngineError::Disconnected)?
    }

    /// Owned copy of the current field, taken between steps.
    pub fn snapshot(&self) -> Result<FieldSnapshot, EngineError> {
        let (reply, rx) = crossbeam_channel::bounded(1);
        self.send(Command::Snapshot { reply })?;
        rx.recv().map_err(|_| EngineError::Disconnected)
    }

    /// Whether the tick thread is still alive.
    pub fn is_running(&self) -> bool {
        self.tick_thread
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the tick thread and hand back the simulation in its final
    /// state.
    ///
    /// # Errors
    ///
    /// [`EngineError::Disconnected`] if the tick thread panicked.
    pub fn shutdown(mut self) -> Result<Simulation, EngineError> {
        self.stop().ok_or(EngineError::Disconnected)
    }

    fn stop(&mut self) -> Option<Simulation> {
        self.shutdown_flag.store(true, Ordering::Release);
        // Disconnect to wake the thread out of its budget wait.
        self.cmd_tx.take();
        let sim = self.tick_thread.take()?.join().ok();
        info!(steps = ?sim.as_ref().map(Simulation::step_count), "realtime simulation stopped");
        sim
    }
}

impl Drop for RealtimeSimulation {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            self.stop();
        }
    }
}
