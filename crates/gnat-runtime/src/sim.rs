//! Simulation state and the per-frame step

use crate::latch::EventLatch;
use crate::player::Player;
use crate::rand::SpawnRng;
use crate::rules::FrameRules;
use crate::swarm::{Fly, Swarm};
use crate::system::Projectiles;
use gnat_core::{Key, Playfield, Result, SimConfig};
use log::{trace, warn};

/// The whole of the main loop's exclusively-owned state: swarm, player,
/// counters, and the frame cursor. Asynchronous producers never see this
/// struct; they only touch the latch and the tick clock.
pub struct Simulation {
    field: Playfield,
    rules: FrameRules,
    swarm: Swarm,
    player: Player,
    rng: SpawnRng,
    latch: EventLatch,
    /// Frames simulated so far. Advances by exactly one per `step`.
    processed: u64,
    /// Physical redraws in the current fps sample window.
    draws_in_window: u64,
    /// Latest fps estimate.
    fps: u64,
}

impl Simulation {
    /// Validate the config and build the initial state, player centered.
    pub fn new(config: &SimConfig, latch: EventLatch) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            field: config.playfield,
            rules: FrameRules::new(&config.cadence),
            swarm: Swarm::new(config.swarm_capacity),
            player: Player::spawn_centered(&config.playfield),
            rng: SpawnRng::new(config.seed),
            latch,
            processed: 0,
            draws_in_window: 0,
            fps: 0,
        })
    }

    /// Simulate exactly one frame of backlog. Evaluates every cadence
    /// rule against the current frame, advances the frame cursor, and
    /// returns whether this frame requested a redraw.
    ///
    /// The rule order is load-bearing: the same-frame spawn must land
    /// before the reap pass, and bullets must move before flies do.
    pub fn step(&mut self, projectiles: &mut dyn Projectiles) -> bool {
        let frame = self.processed;

        if self.rules.spawn_due(frame) {
            if let Err(err) = self.swarm.spawn(&mut self.rng, &self.field) {
                warn!("spawn skipped at frame {frame}: {err}");
            }
        }
        if self.rules.projectile_due(frame) {
            projectiles.advance();
        }
        if self.rules.enemy_fire_due(frame) {
            projectiles.enemy_fire(&self.swarm);
        }
        if self.rules.reap_due(frame) {
            let visited = self.swarm.advance_and_reap(&self.field);
            trace!(
                "reap at frame {frame}: visited {visited}, alive {}",
                self.swarm.alive_count()
            );
        }
        let redraw = self.rules.redraw_due(frame);
        if self.rules.fps_sample_due(frame) {
            self.fps = self.rules.fps_estimate(self.draws_in_window);
            self.draws_in_window = 0;
        }

        self.processed += 1;
        redraw
    }

    /// Act on the highest-priority pending key, if any: one clamped
    /// player step, consuming that key's flag. Returns whether a key was
    /// handled; the loop calls this repeatedly until it returns false,
    /// so every key pending at wake time is applied before any catch-up
    /// frame runs.
    pub fn resolve_input(&mut self) -> bool {
        for key in Key::ALL {
            if !self.latch.query(key) {
                continue;
            }
            if let Some(dir) = key.direction() {
                self.player.step(dir, &self.field);
            }
            self.latch.consume(key);
            return true;
        }
        false
    }

    /// Record one physical redraw for the fps window.
    pub fn note_redraw(&mut self) {
        self.draws_in_window += 1;
    }

    // --- Read-only accessors for collaborators ---

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn hit(&self) -> u64 {
        self.swarm.hit()
    }

    pub fn miss(&self) -> u64 {
        self.swarm.miss()
    }

    pub fn fps(&self) -> u64 {
        self.fps
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Live flies, newest first, for drawing.
    pub fn flies(&self) -> impl Iterator<Item = &Fly> {
        self.swarm.iter()
    }
}
