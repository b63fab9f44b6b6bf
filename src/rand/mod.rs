//! Randomness sources.
//!
//! Password content only ever comes from a [`SecureSource`]. [`Jitter`] is a
//! cheap non-cryptographic generator for choices that reveal nothing about
//! the secret, such as length padding.

mod hw;
mod urand;

pub use urand::{DEVICE, Urandom};

use crate::error::Result;

/// Uniformly distributed, cryptographically secure 32-bit values.
pub trait SecureSource {
    fn next_u32(&mut self) -> Result<u32>;
}

impl<S: SecureSource + ?Sized> SecureSource for &mut S {
    fn next_u32(&mut self) -> Result<u32> {
        (**self).next_u32()
    }
}

const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

/// Non-cryptographic generator fed by the cycle counter.
#[derive(Debug, Clone)]
pub struct Jitter(u64);

impl Default for Jitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Jitter {
    pub fn new() -> Self {
        Jitter(hw::entropy() ^ GOLDEN)
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();
        self.0 = self.0.rotate_left(17).wrapping_add(GOLDEN) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Value in `0..n`. Returns 0 when `n` is 0.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_u64() % n as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_in_range() {
        let mut j = Jitter::new();
        for _ in 0..1000 {
            assert!(j.below(3) < 3);
        }
        assert_eq!(j.below(0), 0);
        assert_eq!(j.below(1), 0);
    }

    #[test]
    fn jitter_hits_every_padding_value() {
        let mut j = Jitter::new();
        let mut seen = [false; 3];
        for _ in 0..1000 {
            seen[j.below(3)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
