//! The catch-up outer loop

use crate::clock::TickClock;
use crate::sim::Simulation;
use crate::system::{Frontend, Projectiles};
use log::debug;

/// What one wake of the loop did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WakeOutcome {
    /// Frames simulated to drain the backlog. Zero means the wake was
    /// spurious (no backlog) and the loop went back to waiting.
    pub frames: u64,
    /// Whether the batch ended in a physical redraw. At most one per
    /// wake, however many render boundaries the batch crossed.
    pub redrew: bool,
}

/// Owns the simulation and drives it from the shared tick clock.
///
/// Ticks only notify; all gameplay logic runs here, synchronously. After
/// an arbitrarily long stall every missed frame is still simulated, one
/// by one; only the rendering is coalesced.
pub struct Runner<F: Frontend, P: Projectiles> {
    sim: Simulation,
    clock: TickClock,
    frontend: F,
    projectiles: P,
}

impl<F: Frontend, P: Projectiles> Runner<F, P> {
    pub fn new(sim: Simulation, clock: TickClock, frontend: F, projectiles: P) -> Self {
        Self {
            sim,
            clock,
            frontend,
            projectiles,
        }
    }

    /// Service one wake: snapshot the observed tick count once, replay
    /// the backlog frame by frame, and redraw at most once.
    ///
    /// Callable directly (without a blocking wait) for tests and for
    /// bounded smoke runs.
    pub fn service_wake(&mut self) -> WakeOutcome {
        // Single read of the shared counter; the driver can keep ticking
        // past this snapshot, those ticks belong to the next wake.
        let target = self.clock.observed();
        if self.sim.processed() == target {
            return WakeOutcome {
                frames: 0,
                redrew: false,
            };
        }
        assert!(
            self.sim.processed() < target,
            "processed ran ahead of observed ticks"
        );

        // All input pending at wake time applies before any catch-up frame
        while self.sim.resolve_input() {}

        let mut redraw = false;
        let mut frames = 0;
        while self.sim.processed() < target {
            redraw |= self.sim.step(&mut self.projectiles);
            frames += 1;
        }

        if redraw {
            self.frontend.redraw(&self.sim);
            self.sim.note_redraw();
        }
        debug!("wake: {frames} frame(s), redraw={redraw}");
        WakeOutcome {
            frames,
            redrew: redraw,
        }
    }

    /// The never-returning entry point: wait for an event, service the
    /// wake, repeat. If the tick source never fires again this blocks
    /// forever, matching an idle-until-interrupt model.
    pub fn run(mut self) -> ! {
        let mut seen = self.clock.events();
        loop {
            seen = self.clock.wait_for_event(seen);
            self.service_wake();
        }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latch::EventLatch;
    use crate::swarm::Swarm;
    use crate::system::NoProjectiles;
    use gnat_core::{Direction, SimConfig};

    /// Counts physical redraws.
    #[derive(Default)]
    struct CountingFrontend {
        redraws: u32,
    }

    impl Frontend for CountingFrontend {
        fn redraw(&mut self, _sim: &Simulation) {
            self.redraws += 1;
        }
    }

    fn runner() -> (Runner<CountingFrontend, NoProjectiles>, TickClock, EventLatch) {
        let config = SimConfig::default();
        let latch = EventLatch::new(config.scan_codes);
        let clock = TickClock::new();
        let sim = Simulation::new(&config, latch.clone()).unwrap();
        (
            Runner::new(sim, clock.clone(), CountingFrontend::default(), NoProjectiles),
            clock,
            latch,
        )
    }

    #[test]
    fn test_spurious_wake_runs_nothing() {
        let (mut runner, _clock, _latch) = runner();
        let outcome = runner.service_wake();
        assert_eq!(outcome, WakeOutcome { frames: 0, redrew: false });
        assert_eq!(runner.sim().processed(), 0);
    }

    #[test]
    fn test_backlog_drains_to_equality() {
        let (mut runner, clock, _latch) = runner();
        for _ in 0..37 {
            clock.tick();
        }
        let outcome = runner.service_wake();
        assert_eq!(outcome.frames, 37);
        assert_eq!(runner.sim().processed(), clock.observed());
        // Nothing left: next wake is spurious
        assert_eq!(runner.service_wake().frames, 0);
    }

    #[test]
    fn test_redraw_coalesced_to_one_per_wake() {
        let (mut runner, clock, _latch) = runner();
        // hz=1000, fps=30 -> render boundary every 33 frames; a backlog
        // of 500 crosses many boundaries but redraws once
        for _ in 0..500 {
            clock.tick();
        }
        let outcome = runner.service_wake();
        assert!(outcome.redrew);
        assert_eq!(runner.frontend().redraws, 1);
    }

    #[test]
    fn test_no_redraw_when_no_boundary_crossed() {
        let (mut runner, clock, _latch) = runner();
        // Drain frame 0 (a render boundary) first
        clock.tick();
        runner.service_wake();
        assert_eq!(runner.frontend().redraws, 1);

        // Frames 1..=30 contain no multiple of 33
        for _ in 0..30 {
            clock.tick();
        }
        let outcome = runner.service_wake();
        assert_eq!(outcome.frames, 30);
        assert!(!outcome.redrew);
        assert_eq!(runner.frontend().redraws, 1);
    }

    #[test]
    fn test_input_applies_before_catchup() {
        let (mut runner, clock, latch) = runner();
        latch.notify(72); // up
        latch.notify(75); // left
        clock.tick();

        let start_x = 160;
        let start_y = 100;
        runner.service_wake();

        // Both keys were applied in this wake, in priority order left
        // then up, and each cleared its own flag
        let player = runner.sim().player();
        assert_eq!(player.x, start_x - 8);
        assert_eq!(player.y, start_y - 8);
        assert_eq!(player.facing, Direction::Up);
    }

    #[test]
    fn test_burst_scenario_hz1000_jump_to_5000() {
        // Observed jumps 0 -> 5000 in one burst before the loop wakes.
        // The wake replays frames 0..=4999: one spawn (frame 0), five
        // reap passes (frames 0, 1000, ..., 4000), and a single redraw.
        let (mut runner, clock, _latch) = runner();
        for _ in 0..5000 {
            clock.tick();
        }
        let outcome = runner.service_wake();
        assert_eq!(outcome.frames, 5000);
        assert!(outcome.redrew);
        assert_eq!(runner.frontend().redraws, 1);

        // Frame 0 spawned one fly; 5 reap passes advanced it 5 cells
        let swarm: &Swarm = runner.sim().swarm();
        assert_eq!(swarm.alive_count(), 1);
        let fly = swarm.newest().unwrap();
        assert_eq!(fly.depth, 40.0);

        // The next tick simulates frame 5000: the second spawn lands
        clock.tick();
        runner.service_wake();
        assert_eq!(runner.sim().swarm().alive_count(), 2);
    }
}
