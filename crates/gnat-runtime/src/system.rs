//! Collaborator seams driven by the game loop

use crate::sim::Simulation;
use crate::swarm::Swarm;

/// The rendering collaborator.
///
/// Called at most once per wake, after the whole backlog batch has been
/// simulated, no matter how many render boundaries the batch crossed.
pub trait Frontend {
    fn redraw(&mut self, sim: &Simulation);
}

/// The projectile subsystems, external to the core data model but ticked
/// on the same cadences (bullet updates, enemy fire).
pub trait Projectiles {
    /// Advance all projectile positions one update step.
    fn advance(&mut self);

    /// Fire one enemy shot. The swarm is provided so shots can originate
    /// at live flies.
    fn enemy_fire(&mut self, swarm: &Swarm);
}

/// Projectiles disabled; every cadence hook is a no-op.
#[derive(Default)]
pub struct NoProjectiles;

impl Projectiles for NoProjectiles {
    fn advance(&mut self) {}
    fn enemy_fire(&mut self, _swarm: &Swarm) {}
}
