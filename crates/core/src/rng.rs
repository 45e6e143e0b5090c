//! RNG module - the one source of non-determinism in the engine
//!
//! Spawning is the only random step. It draws from a [`RandomSource`] passed in
//! by the caller, so a seeded [`SimpleRng`] replays a session exactly and tests
//! can script the draws with [`ScriptedRng`].

/// Random source threaded through spawn calls
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, bound)
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "next_below requires a positive bound");
        self.next_u32() % bound
    }

    /// True with probability `percent`/100
    fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_below(100) < percent
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }

    fn chance_percent(&mut self, percent: u32) -> bool {
        (**self).chance_percent(percent)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current RNG state (a new `SimpleRng` seeded with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of draws, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(7);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(99);
        for bound in 1..30 {
            for _ in 0..50 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_chance_percent_roughly_matches() {
        let mut rng = SimpleRng::new(2024);
        let hits = (0..10_000).filter(|_| rng.chance_percent(60)).count();
        assert!((5_500..6_500).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn test_scripted_rng_cycles() {
        let mut rng = ScriptedRng::new(vec![3, 99]);
        assert_eq!(rng.next_below(10), 3);
        assert_eq!(rng.next_below(100), 99);
        assert_eq!(rng.next_u32(), 3);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw<R: RandomSource>(mut rng: R) -> u32 {
            rng.next_u32()
        }
        let mut rng = ScriptedRng::new(vec![5]);
        assert_eq!(draw(&mut rng), 5);
        assert_eq!(rng.draws(), 1);
    }
}
