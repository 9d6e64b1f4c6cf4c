//! The 48-bit linear congruential generator used to lay out random walks.
//!
//! The recurrence is fixed so that images encoded on any platform decode on
//! any other:
//!
//! ```text
//! seed  = (seed ^ 0x5DEECE66D) mod 2^48             (on construction)
//! seed' = (seed * 0x5DEECE66D + 0xB) mod 2^48       (every step)
//! next(bits) = seed' >> (48 - bits)
//! ```
//!
//! `next_int(bound)` takes the top 31 bits of a step; powers of two are scaled
//! with a multiply, other bounds use modulo with rejection of the final
//! partial range.

use rand::{Error, RngCore, SeedableRng};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

#[derive(Debug, Clone)]
pub struct JavaRandom {
    seed: u64,
}

impl JavaRandom {
    pub fn new(seed: i64) -> JavaRandom {
        JavaRandom {
            seed: (seed as u64 ^ MULTIPLIER) & MASK,
        }
    }

    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;

        (self.seed >> (48 - bits)) as i32
    }

    /// Uniform value in `[0, bound)`; `bound` must be positive
    pub fn next_int(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);

        let mut r = self.next(31);
        let m = bound - 1;

        if bound & m == 0 {
            return ((bound as i64 * r as i64) >> 31) as i32;
        }

        let mut u = r;
        loop {
            r = u % bound;
            // The sum overflows past i32::MAX exactly when `u` falls into the
            // last incomplete multiple of `bound`
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r;
            }
            u = self.next(31);
        }
    }
}

impl RngCore for JavaRandom {
    fn next_u32(&mut self) -> u32 {
        self.next(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = self.next(32) as i64;
        let low = self.next(32) as i64;

        (high << 32).wrapping_add(low) as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for JavaRandom {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> JavaRandom {
        JavaRandom::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> JavaRandom {
        JavaRandom::new(state as i64)
    }
}
