//! Seeded random source for wander directions and wave placement.
//!
//! Every roll in a scene comes from one [`SimRng`], so a fixed seed replays
//! the same enemy placement and patrol paths.

/// PCG-XSH-RR generator: 64-bit state, 32-bit output.
#[derive(Clone, Debug)]
pub struct SimRng {
    state: u64,
}

impl SimRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::step(seed),
        }
    }

    /// Derives an independent stream, e.g. one per spawned enemy.
    pub fn fork(&mut self, salt: u32) -> Self {
        Self::new(compute_seed(self.next_u64(), salt))
    }

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let out = Self::output(self.state);
        self.state = Self::step(self.state);
        out
    }

    pub fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value in `[min, max)`; returns `min` for an empty range.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + (max - min) * self.next_f32()
    }

    /// Uniform angle in radians.
    pub fn angle(&mut self) -> f32 {
        self.range_f32(0.0, core::f32::consts::TAU)
    }

    pub fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }
}

/// Mixes a base seed with a salt (SplitMix64/FxHash style avalanche).
pub fn compute_seed(base: u64, salt: u32) -> u64 {
    let mut hash = base;
    hash ^= (salt as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
