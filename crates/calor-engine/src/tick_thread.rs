//! Tick loop and command handling for the realtime driver.
//!
//! The tick thread owns the [`Simulation`] exclusively (moved in via
//! `thread::spawn`). Commands arrive over a bounded crossbeam channel and
//! are applied between steps; the thread waits on the channel for the
//! remainder of each tick budget so commands are handled promptly even
//! while paused.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use calor_core::SimulationConfig;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use tracing::debug;

use crate::error::EngineError;
use crate::simulation::{FieldSnapshot, Simulation};

/// A control message for the tick thread.
pub(crate) enum Command {
    Pause,
    Resume,
    TogglePause,
    Reset {
        reply: Sender<Result<(), EngineError>>,
    },
    StepOnce {
        reply: Sender<FieldSnapshot>,
    },
    Reconfigure {
        config: Box<SimulationConfig>,
        reply: Sender<Result<(), EngineError>>,
    },
    Snapshot {
        reply: Sender<FieldSnapshot>,
    },
}

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    sim: Simulation,
    cmd_rx: Receiver<Command>,
    shutdown_flag: Arc<AtomicBool>,
    tick_budget: Duration,
}

impl TickThreadState {
    pub fn new(
        sim: Simulation,
        cmd_rx: Receiver<Command>,
        shutdown_flag: Arc<AtomicBool>,
        tick_budget: Duration,
    ) -> Self {
        Self {
            sim,
            cmd_rx,
            shutdown_flag,
            tick_budget,
        }
    }

    /// Main tick loop. Runs until `shutdown_flag` is set or every sender
    /// is dropped.
    ///
    /// Consumes self and returns the `Simulation` so the caller can
    /// recover it via `JoinHandle<Simulation>`.
    pub fn run(mut self) -> Simulation {
        debug!(budget_us = self.tick_budget.as_micros() as u64, "tick thread started");
        let mut next_tick = Some(Instant::now());
        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                break;
            }

            let now = Instant::now();
            if next_tick.is_some_and(|at| now >= at) {
                self.sim.tick();
                // None: the budget runs past the end of the clock.
                next_tick = now.checked_add(self.tick_budget);
            }

            // Wait out the remaining budget, waking for each command.
            let received = match next_tick {
                Some(at) => self
                    .cmd_rx
                    .recv_timeout(at.saturating_duration_since(Instant::now())),
                None => self
                    .cmd_rx
                    .recv()
                    .map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok(cmd) => self.apply(cmd),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        debug!(steps = self.sim.step_count(), "tick thread stopped");
        self.sim
    }

    fn apply(&mut self, cmd: Command) {
        // Replies are best-effort: the caller may have given up waiting.
        match cmd {
            Command::Pause => self.sim.pause(),
            Command::Resume => self.sim.resume(),
            Command::TogglePause => {
                self.sim.toggle_pause();
            }
            Command::Reset { reply } => {
                let _ = reply.send(self.sim.reset());
            }
            Command::StepOnce { reply } => {
                self.sim.step();
                let _ = reply.send(self.sim.snapshot());
            }
            Command::Reconfigure { config, reply } => {
                let _ = reply.send(self.sim.reconfigure(*config));
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(self.sim.snapshot());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationState;
    use calor_test_utils::fixtures::scenario_3x3;

    fn state(rate: f64) -> (TickThreadState, Sender<Command>) {
        let (tx, rx) = crossbeam_channel::bounded(8);
        let sim = Simulation::new(scenario_3x3()).unwrap();
        let budget = Duration::from_secs_f64(1.0 / rate);
        let st = TickThreadState::new(sim, rx, Arc::new(AtomicBool::new(false)), budget);
        (st, tx)
    }

    #[test]
    fn apply_pause_and_step_once() {
        let (mut st, _tx) = state(60.0);
        st.apply(Command::Pause);
        assert_eq!(st.sim.state(), SimulationState::Idle);

        let (reply, rx) = crossbeam_channel::bounded(1);
        st.apply(Command::StepOnce { reply });
        let snap = rx.recv().unwrap();
        assert_eq!(snap.step, 1);
        assert_eq!(snap.state, SimulationState::Idle);
    }

    #[test]
    fn run_returns_simulation_when_senders_drop() {
        let (mut st, tx) = state(1000.0);
        st.apply(Command::Pause);
        drop(tx);
        let sim = st.run();
        // Paused before the loop: the first tick is a no-op.
        assert_eq!(sim.step_count(), 0);
    }

    #[test]
    fn unschedulable_budget_ticks_once_then_waits_on_commands() {
        let (tx, rx) = crossbeam_channel::bounded(8);
        let sim = Simulation::new(scenario_3x3()).unwrap();
        let st = TickThreadState::new(sim, rx, Arc::new(AtomicBool::new(false)), Duration::MAX);
        drop(tx);
        let sim = st.run();
        assert_eq!(sim.step_count(), 1);
    }

    #[test]
    fn run_stops_on_shutdown_flag() {
        let (st, _tx) = state(1000.0);
        st.shutdown_flag.store(true, Ordering::Release);
        let sim = st.run();
        assert_eq!(sim.step_count(), 0);
    }
}
