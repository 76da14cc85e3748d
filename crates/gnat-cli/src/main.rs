//! Gnat CLI - runs the catch-up simulation against a thread timer driver

use anyhow::Result;
use clap::Parser;
use gnat_core::SimConfig;
use gnat_runtime::{
    EventLatch, Frontend, NoProjectiles, Runner, Simulation, TickClock,
};
use log::trace;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "gnat")]
#[command(about = "Deterministic catch-up game loop runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the tick rate from the config
    #[arg(long)]
    hz: Option<u64>,

    /// Override the spawn RNG seed from the config
    #[arg(long)]
    seed: Option<u32>,

    /// Stop after this many simulated frames and print statistics
    /// (smoke-test mode; the loop otherwise never returns)
    #[arg(long)]
    frames: Option<u64>,
}

/// Headless frontend: redraws are log lines.
struct ConsoleFrontend;

impl Frontend for ConsoleFrontend {
    fn redraw(&mut self, sim: &Simulation) {
        trace!(
            "redraw at frame {}: {} flies, fps {}, hit {}, miss {}",
            sim.processed(),
            sim.swarm().alive_count(),
            sim.fps(),
            sim.hit(),
            sim.miss()
        );
    }
}

/// Detached timer driver: one tick per period, forever. The thread only
/// touches the clock, never the simulation.
fn spawn_timer(clock: TickClock, hz: u64) {
    let period = Duration::from_nanos(1_000_000_000 / hz);
    thread::spawn(move || loop {
        thread::sleep(period);
        clock.tick();
    });
}

fn run_bounded(
    mut runner: Runner<ConsoleFrontend, NoProjectiles>,
    clock: TickClock,
    limit: u64,
) -> Result<()> {
    let mut seen = clock.events();
    while runner.sim().processed() < limit {
        seen = clock.wait_for_event(seen);
        runner.service_wake();
    }
    let sim = runner.sim();
    println!(
        "Simulated {} frames: {} flies alive, fps {}, hit {}, miss {}",
        sim.processed(),
        sim.swarm().alive_count(),
        sim.fps(),
        sim.hit(),
        sim.miss()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::load_from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(hz) = cli.hz {
        config.cadence.hz = hz;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.validate()?;

    let latch = EventLatch::new(config.scan_codes);
    let clock = TickClock::new();
    let sim = Simulation::new(&config, latch)?;
    let runner = Runner::new(sim, clock.clone(), ConsoleFrontend, NoProjectiles);

    spawn_timer(clock.clone(), config.cadence.hz);

    match cli.frames {
        Some(limit) => run_bounded(runner, clock, limit),
        None => runner.run(),
    }
}
