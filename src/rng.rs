//! Xorshift64 generator for cosmetic randomness (positions, delays,
//! trail spawning). Deterministic under an explicit seed so the sampling
//! logic is testable off-browser.

pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // xorshift is stuck at zero; remap to an arbitrary odd constant.
        let state = if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed };
        Rng { state }
    }

    /// Seed from the JS clock (wall time in ms).
    pub(crate) fn from_clock() -> Self {
        Rng::new(js_sys::Date::now() as u64)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in [0, 1].
    pub fn next_f64(&mut self) -> f64 {
        self.next_u64() as f64 / u64::MAX as f64
    }

    /// Uniform in [lo, hi].
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = (self.next_f64() * items.len() as f64) as usize % items.len();
        &items[idx]
    }
}
