//! Random number generation with hardware entropy.

mod hw;

use core::cell::UnsafeCell;
use std::sync::LazyLock;

pub fn entropy_source() -> &'static str {
    hw::source_name()
}

static RAND: LazyLock<Rand> = LazyLock::new(Rand::new);

pub struct Rand(UnsafeCell<usize>);
unsafe impl Sync for Rand {}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        Rand(UnsafeCell::new(hw::entropy() as usize))
    }

    #[inline(always)]
    pub fn get() -> usize {
        let state = unsafe { *RAND.0.get() };
        let ent = hw::entropy() as usize;

        // State transition: rotate, multiply by odd constant, XOR entropy
        let new_state = state.rotate_left(17).wrapping_mul(0x9e3779b97f4a7c15) ^ ent;
        unsafe { *RAND.0.get() = new_state };

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9_usize);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb_usize);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, bound)` via rejection sampling.
    ///
    /// A bare `get() % bound` biases low values when `bound` does not divide
    /// the output range; draws past the largest multiple of `bound` are
    /// redrawn instead.
    #[inline]
    pub fn below(bound: usize) -> usize {
        debug_assert!(bound > 0);
        let excess = (usize::MAX % bound + 1) % bound;
        let top = usize::MAX - excess;
        loop {
            let r = Self::get();
            if r <= top {
                return r % bound;
            }
        }
    }
}

pub fn zeroize_state() {
    unsafe { std::ptr::write_volatile(RAND.0.get(), 0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_stays_in_bounds() {
        for bound in [1, 2, 7, 10, 62, 86] {
            for _ in 0..1000 {
                assert!(Rand::below(bound) < bound);
            }
        }
    }

    #[test]
    fn below_one_is_always_zero() {
        for _ in 0..100 {
            assert_eq!(Rand::below(1), 0);
        }
    }

    #[test]
    fn get_output_varies() {
        let draws: Vec<usize> = (0..32).map(|_| Rand::get()).collect();
        let distinct: std::collections::HashSet<_> = draws.iter().collect();
        assert!(distinct.len() > 1, "generator output is constant");
    }
}
