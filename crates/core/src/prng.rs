//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! All gradient angles are drawn from this generator, so noise
//! reproducibility reduces to its seed → sequence mapping. Pure integer
//! arithmetic keeps the sequence identical across platforms.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG with shift parameters (13, 7, 17).
///
/// Same seed always produces the same sequence. A seed of 0 is replaced with
/// a non-zero fallback, since the all-zeros state is a fixed point of the
/// xorshift recurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback state substituted for a zero seed.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed (0 replaced by the fallback).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1), using the upper 53
    /// bits of `next_u64()` for full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // Pins the seed -> sequence mapping. If this breaks, every stored or
        // documented noise seed produces a different field.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0, "seed=0 guard failed");
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn same_seed_yields_identical_sequences() {
        let mut a = Xorshift64::new(2_079_352_251);
        let mut b = Xorshift64::new(2_079_352_251);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "sequences diverged at {i}");
        }
    }

    #[test]
    fn different_seeds_diverge_quickly() {
        let mut a = Xorshift64::new(1);
        let mut b = Xorshift64::new(2);
        let diverged = (0..10).any(|_| a.next_u64() != b.next_u64());
        assert!(diverged, "seeds 1 and 2 produced identical first 10 values");
    }

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(
                rng.next_u64(),
                restored.next_u64(),
                "sequences diverged after deserialization at {i}"
            );
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v), "next_f64() = {v} for seed {seed}");
                }
            }

            #[test]
            fn next_range_in_bounds_for_any_seed(
                seed: u64,
                min in -1e6_f64..1e6,
                max in -1e6_f64..1e6,
            ) {
                prop_assume!(min < max);
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(min, max);
                    prop_assert!(v >= min && v < max, "next_range({min}, {max}) = {v}");
                }
            }

            #[test]
            fn next_f64_approximate_uniformity(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let v = rng.next_f64();
                    buckets[(v * 10.0).min(9.0) as usize] += 1;
                }
                // Loose bound (expected ~1000 each) to avoid flakes.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(count >= 500, "bucket {i} has only {count} for seed {seed}");
                }
            }
        }
    }
}
