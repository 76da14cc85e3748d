//! The player character

use gnat_core::{Direction, Playfield};

/// Singleton player position and facing, mutated only by input-driven
/// movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

impl Player {
    /// Place the player at the center of the field, facing up.
    pub fn spawn_centered(field: &Playfield) -> Self {
        let (x, y) = field.center();
        Self {
            x,
            y,
            facing: Direction::Up,
        }
    }

    /// Apply one discrete movement step, clamped to the field. The
    /// facing updates even when the step itself is blocked at a wall.
    pub fn step(&mut self, dir: Direction, field: &Playfield) {
        let (x, y) = field.clamped_step(self.x, self.y, dir);
        self.x = x;
        self.y = y;
        self.facing = dir;
    }
}
