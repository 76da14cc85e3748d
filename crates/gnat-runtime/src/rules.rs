//! Per-frame cadence rules, derived once from a validated [`Cadence`]

use gnat_core::Cadence;

/// Pure boundary predicates on the simulated-frame counter.
///
/// Every period is a whole number of ticks (guaranteed by
/// [`Cadence::validate`]); a rule fires when the frame counter is
/// divisible by its period.
#[derive(Clone, Copy, Debug)]
pub struct FrameRules {
    spawn_every: u64,
    projectile_every: u64,
    enemy_fire_every: u64,
    reap_every: u64,
    redraw_every: u64,
    fps_sample_every: u64,
    fps_target: u64,
}

impl FrameRules {
    pub fn new(cadence: &Cadence) -> Self {
        Self {
            spawn_every: cadence.hz * cadence.spawn_period_secs,
            projectile_every: cadence.hz / cadence.updates_per_second,
            enemy_fire_every: cadence.hz * cadence.enemy_fire_secs,
            reap_every: cadence.hz,
            redraw_every: cadence.hz / cadence.fps,
            fps_sample_every: cadence.hz / 2,
            fps_target: cadence.fps,
        }
    }

    /// A new fly spawns on this frame.
    pub fn spawn_due(&self, frame: u64) -> bool {
        frame % self.spawn_every == 0
    }

    /// Projectile positions advance on this frame. Runs before the reap
    /// so a bullet fired this frame can still connect.
    pub fn projectile_due(&self, frame: u64) -> bool {
        frame % self.projectile_every == 0
    }

    /// An enemy shot fires on this frame.
    pub fn enemy_fire_due(&self, frame: u64) -> bool {
        frame % self.enemy_fire_every == 0
    }

    /// Flies advance one step and out-of-bounds ones are reaped.
    pub fn reap_due(&self, frame: u64) -> bool {
        frame % self.reap_every == 0
    }

    /// A redraw is requested for the current batch.
    pub fn redraw_due(&self, frame: u64) -> bool {
        frame % self.redraw_every == 0
    }

    /// The fps estimate is resampled (half-second window).
    pub fn fps_sample_due(&self, frame: u64) -> bool {
        frame % self.fps_sample_every == 0
    }

    /// Estimated frames per second from the number of physical redraws in
    /// the closing half-second window, capped at the configured target.
    pub fn fps_estimate(&self, draws_in_window: u64) -> u64 {
        (draws_in_window * 2 + 1).min(self.fps_target)
    }
}
