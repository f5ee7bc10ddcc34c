//! End-to-end lockstep heating example.
//!
//! Demonstrates: build config → Simulation → tick → read temperatures →
//! pause → reset → realtime run → shutdown.
//!
//! Run with `RUST_LOG=debug` to see engine logging.

use std::thread;
use std::time::Duration;

use calor_core::{FluidSource, SimulationConfig};
use calor_engine::{RealtimeConfig, RealtimeSimulation, Simulation};
use tracing_subscriber::EnvFilter;

fn print_field(sim: &Simulation) {
    let grid = sim.grid();
    for y in (0..grid.height() as i32).rev() {
        let row: Vec<String> = (0..grid.width() as i32)
            .map(|x| match sim.temperature_at(x, y) {
                Some(t) if sim.is_hot_cell(x, y) => format!("[{t:5.1}]"),
                Some(t) => format!(" {t:5.1} "),
                None => "   ?   ".to_string(),
            })
            .collect();
        println!("  {}", row.join(""));
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("=== Calor Heat Plate Example ===\n");

    let config = SimulationConfig::builder()
        .size(9, 7)
        .isolated(false)
        .fluid_source(FluidSource::Left)
        .fluid_speed(0.5)
        .hot_cell(4, 3)
        .hot_cell(4, 4)
        .dt(2000.0)
        .build()
        .unwrap();

    // --- Lockstep: 500 frames, then pause and reset ---
    let mut sim = Simulation::new(config.clone()).unwrap();
    for frame in 0..500 {
        if let Some(m) = sim.tick() {
            if frame % 100 == 0 || frame == 499 {
                println!(
                    "  step {:4}  t = {:9.0} s  min {:6.2}  mean {:6.2}  max {:6.2}  ({} us)",
                    m.step,
                    m.sim_time,
                    m.min_temperature,
                    m.mean_temperature,
                    m.max_temperature,
                    m.total_us
                );
            }
        }
    }
    println!("\nField after {} steps:", sim.step_count());
    print_field(&sim);

    sim.pause();
    assert!(sim.tick().is_none());
    sim.reset().unwrap();
    println!("\nAfter reset ({:?}):", sim.state());
    print_field(&sim);

    // --- Realtime: run on a tick thread for a moment ---
    let realtime = RealtimeConfig {
        tick_rate_hz: 240.0,
        ..RealtimeConfig::default()
    };
    let rt = RealtimeSimulation::start(config, realtime).unwrap();
    thread::sleep(Duration::from_millis(250));
    let snap = rt.snapshot().unwrap();
    println!(
        "\nRealtime: {} steps in 250 ms, center at {:.2}",
        snap.step,
        snap.temperature_at(4, 2).unwrap_or(f64::NAN)
    );
    let sim = rt.shutdown().unwrap();
    println!("Recovered simulation at step {}", sim.step_count());
}
