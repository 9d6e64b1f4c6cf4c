//! Pixel walkers decide which raster bytes receive frame bits.
//!
//! A walker starts on the first slot for some frame offset and moves forward
//! one slot at a time. Indices only ever increase.

mod random;
mod stride;

pub use random::RandomWalker;
pub use stride::StrideWalker;

/// Strategy for choosing which pixel bytes carry the frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Every `n`th byte, starting at byte 0
    Stride(usize),
    /// Gaps of `lo + next_int(hi - lo)` bytes drawn from a seeded generator
    Random { seed: i64, lo: u32, hi: u32 },
}

impl Pattern {
    /// Average number of raster bytes skipped per slot, as a fraction
    /// `(numerator, denominator)`
    pub fn density(&self) -> (u64, u64) {
        match *self {
            Pattern::Stride(n) => (n as u64, 1),
            Pattern::Random { lo, hi, .. } => (lo as u64 + hi as u64, 2),
        }
    }

    /// Walker positioned on the slot that holds bit `8 * offset` of the frame.
    ///
    /// Returns the walker together with the bit rank inside that slot.
    pub fn walker_at(&self, offset: usize, bits_used: u8) -> (Box<dyn Walker>, u8) {
        let bits = offset * 8;
        let slot = bits / bits_used as usize;
        let rank = (bits % bits_used as usize) as u8;

        let walker: Box<dyn Walker> = match *self {
            Pattern::Stride(n) => Box::new(StrideWalker::at_slot(n, slot)),
            Pattern::Random { seed, lo, hi } => Box::new(RandomWalker::at_slot(seed, lo, hi, slot)),
        };

        (walker, rank)
    }
}

pub trait Walker {
    /// Raster index of the current slot
    fn index(&self) -> usize;

    /// Move on to the next slot
    fn advance(&mut self);
}
