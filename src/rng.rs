/// Source of random grid coordinates for apple placement.
pub trait CellRng {
    /// Uniform integer in `low..high`.
    fn range(&mut self, low: i32, high: i32) -> i32;
}

/// Deterministic xorshift32 generator.
#[derive(Clone, Copy, Debug)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        let folded = (seed ^ (seed >> 32)) as u32;
        Self {
            state: if folded == 0 { 0xDEAD_BEEF } else { folded },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl CellRng for SeededRng {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        debug_assert!(high > low);
        let span = (high - low) as u32;
        low + (self.next_u32() % span) as i32
    }
}
