//! Gnat Runtime - Catch-up game loop infrastructure
//!
//! Provides the core simulation building blocks:
//! - `TickClock` — observed-tick counter with a blocking idle wait
//! - `EventLatch` — pending-key flags shared with the input driver
//! - `Swarm` — swap-remove pool of falling flies with hit/miss accounting
//! - `FrameRules` — cadence predicates on the simulated-frame counter
//! - `Simulation` / `Runner` — the loop-owned state and the outer loop
//! - `Frontend` / `Projectiles` — seams for the rendering and bullet
//!   collaborators

mod clock;
mod latch;
mod player;
mod rand;
mod rules;
mod runner;
mod sim;
mod swarm;
mod system;

pub use clock::TickClock;
pub use latch::EventLatch;
pub use player::Player;
pub use rand::SpawnRng;
pub use rules::FrameRules;
pub use runner::{Runner, WakeOutcome};
pub use sim::Simulation;
pub use swarm::{Fly, Swarm};
pub use system::{Frontend, NoProjectiles, Projectiles};
