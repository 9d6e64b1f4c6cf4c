//! Bit-level access to the low `bits_used` bits of raster bytes.
//!
//! Each raster byte touched by a walker is a *slot* holding `bits_used` frame
//! bits. Ranks count from the most significant bit of that window, so with
//! `bits_used = 3` rank 0 is bit 2 of the byte and rank 2 is bit 0.

use crate::walker::{Pattern, Walker};

/// The walker ran past the end of the raster after moving `bits` bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted {
    pub bits: u64,
}

fn window_mask(bits_used: u8) -> u8 {
    (0xFFu16 >> (8 - bits_used)) as u8
}

/// Put `bit` at `rank` of the window, leaving the other bits alone
pub fn write_bit(byte: u8, bit: u8, rank: u8, bits_used: u8) -> u8 {
    let shift = bits_used - rank - 1;

    (byte & !(1 << shift)) | ((bit & 1) << shift)
}

pub fn read_bit(byte: u8, rank: u8, bits_used: u8) -> u8 {
    (byte >> (bits_used - rank - 1)) & 1
}

/// Position inside the frame: the walker's current slot plus a bit rank.
pub struct BitCursor {
    walker: Box<dyn Walker>,
    bits_used: u8,
    rank: u8,
}

impl BitCursor {
    /// Cursor on the first bit of frame byte `offset`
    ///
    /// # Panics
    ///
    /// If `bits_used` is not in `1..=8`. [`StegConfig::validate`] rejects
    /// such values before any cursor is built.
    ///
    /// [`StegConfig::validate`]: crate::config::StegConfig::validate
    pub fn at(pattern: &Pattern, bits_used: u8, offset: usize) -> BitCursor {
        assert!((1..=8).contains(&bits_used), "bits_used must be in 1..=8, got {}", bits_used);

        let (walker, rank) = pattern.walker_at(offset, bits_used);

        BitCursor {
            walker,
            bits_used,
            rank,
        }
    }

    fn step(&mut self) {
        if self.rank == self.bits_used {
            self.walker.advance();
            self.rank = 0;
        }
    }

    /// Write `src` MSB-first.
    ///
    /// A slot entered at rank 0 has its whole window cleared first; a slot
    /// resumed mid-window keeps the bits already written to it.
    pub fn write_bytes(&mut self, raster: &mut [u8], src: &[u8]) -> Result<(), Exhausted> {
        for (n, &byte) in src.iter().enumerate() {
            for i in (0..8).rev() {
                self.step();

                let bits = n as u64 * 8 + (7 - i) as u64;
                let slot = raster.get_mut(self.walker.index()).ok_or(Exhausted { bits })?;

                if self.rank == 0 {
                    *slot &= !window_mask(self.bits_used);
                }

                *slot = write_bit(*slot, byte >> i, self.rank, self.bits_used);
                self.rank += 1;
            }
        }

        Ok(())
    }

    pub fn read_bytes(&mut self, raster: &[u8], len: usize) -> Result<Vec<u8>, Exhausted> {
        let mut out = Vec::with_capacity(len);

        for n in 0..len {
            let mut byte = 0u8;

            for i in 0..8 {
                self.step();

                let bits = n as u64 * 8 + i;
                let slot = *raster.get(self.walker.index()).ok_or(Exhausted { bits })?;

                byte = (byte << 1) | read_bit(slot, self.rank, self.bits_used);
                self.rank += 1;
            }

            out.push(byte);
        }

        Ok(out)
    }
}
