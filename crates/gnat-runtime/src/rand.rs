//! Lightweight xorshift32 PRNG — no external crate needed

pub struct SpawnRng {
    state: u32,
}

impl SpawnRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a value uniformly in [0, n). `n` must be nonzero.
    pub fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}
