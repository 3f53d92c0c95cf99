// src/random.rs
use crate::error::{GeneratorError, GeneratorResult};
use rand::rngs::OsRng;
use rand::RngCore;

/// Source of uniform random indices for the generator.
///
/// Implementations must be uniform over `[0, bound)` and must surface
/// entropy failure as an error instead of substituting a fixed value.
pub trait RandomSource {
    fn uniform_index(&mut self, bound: usize) -> GeneratorResult<usize>;
}

/// Production source backed by the operating system CSPRNG.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn uniform_index(&mut self, bound: usize) -> GeneratorResult<usize> {
        debug_assert!(bound > 0, "uniform_index bound must be positive");
        debug_assert!(bound <= u32::MAX as usize);
        let bound = bound as u32;
        // Rejection sampling: discard draws below 2^32 mod bound so the
        // remaining range divides evenly and `% bound` stays unbiased.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let mut buf = [0u8; 4];
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| GeneratorError::RandomnessUnavailable(e.to_string()))?;
            let draw = u32::from_le_bytes(buf);
            if draw >= threshold {
                return Ok((draw % bound) as usize);
            }
        }
    }
}
