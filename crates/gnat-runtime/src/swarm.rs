//! Fly swarm: capacity-bounded pool with O(1) mid-pass removal

use crate::rand::SpawnRng;
use gnat_core::{Direction, GnatError, Playfield, Result};

/// One transient falling fly.
#[derive(Clone, Copy, Debug)]
pub struct Fly {
    /// Cell-quantized lane position along the x axis.
    pub lane: i32,
    /// Continuous distance along the fall axis. Live flies satisfy
    /// `depth ∈ [min_depth, max_depth)` against their footprint.
    pub depth: f32,
    /// Sprite facing tag, randomized at spawn.
    pub heading: Direction,
}

/// Swap-remove pool of live flies with hit/miss accounting.
///
/// Spawns append, so iteration (newest first) gives the renderer the
/// most recently spawned fly up front. Removal during a reap pass is
/// O(1) and never invalidates the pass: the swapped-in fly is examined
/// before the cursor advances, so every fly present at call entry is
/// visited exactly once.
pub struct Swarm {
    flies: Vec<Fly>,
    capacity: usize,
    hit: u64,
    miss: u64,
}

impl Swarm {
    pub fn new(capacity: usize) -> Self {
        Self {
            flies: Vec::with_capacity(capacity),
            capacity,
            hit: 0,
            miss: 0,
        }
    }

    pub fn alive_count(&self) -> usize {
        self.flies.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Flies that crossed the near depth edge.
    pub fn hit(&self) -> u64 {
        self.hit
    }

    /// Flies that crossed the far depth edge.
    pub fn miss(&self) -> u64 {
        self.miss
    }

    /// Spawn one fly at the near edge with a random in-bounds lane and a
    /// random heading. A full pool is a recoverable condition: the caller
    /// skips this spawn and the simulation continues.
    pub fn spawn(&mut self, rng: &mut SpawnRng, field: &Playfield) -> Result<()> {
        if self.flies.len() >= self.capacity {
            return Err(GnatError::SwarmFull {
                capacity: self.capacity,
            });
        }
        let slot = rng.below(field.spawn_lanes() as u32) as i32;
        self.flies.push(Fly {
            lane: field.lane_x(slot),
            depth: field.min_depth(),
            heading: Direction::from_index(rng.below(Direction::COUNT)),
        });
        Ok(())
    }

    /// Advance every fly one fall step and reap those outside the depth
    /// bounds. Near-edge exits count as hits, far-edge exits as misses.
    /// Returns the number of flies visited (the population at entry).
    pub fn advance_and_reap(&mut self, field: &Playfield) -> usize {
        let visited = self.flies.len();
        let step = field.cell as f32;
        let mut i = 0;
        while i < self.flies.len() {
            self.flies[i].depth += step;
            if field.depth_in_bounds(self.flies[i].depth) {
                i += 1;
                continue;
            }
            if self.flies[i].depth < field.min_depth() {
                self.hit += 1;
            } else {
                self.miss += 1;
            }
            // Swapped-in fly lands at i and is examined next iteration
            self.flies.swap_remove(i);
        }
        visited
    }

    /// The most recently spawned live fly.
    pub fn newest(&self) -> Option<&Fly> {
        self.flies.last()
    }

    /// Iterate live flies, newest first. Read-only, for rendering.
    pub fn iter(&self) -> impl Iterator<Item = &Fly> {
        self.flies.iter().rev()
    }
}
