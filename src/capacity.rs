//! How much a raster can hold under a given configuration.

use crate::frame;
use crate::walker::Pattern;

/// Advisory payload capacity in frame bytes:
/// `floor(width * height * 3 * bits_used / 8 / density)`.
///
/// For random walks the density is the estimate `(lo + hi) / 2`; an actual
/// walk can run out of raster sooner, which is only detected while writing.
pub fn capacity(width: u32, height: u32, bits_used: u8, pattern: &Pattern) -> u64 {
    let bits = width as u64 * height as u64 * 3 * bits_used as u64;
    let (num, den) = pattern.density();

    bits * den / (8 * num.max(1))
}

/// Largest file body that still fits next to the frame header
pub fn max_payload_bytes(width: u32, height: u32, bits_used: u8, pattern: &Pattern, name_len: usize) -> u64 {
    capacity(width, height, bits_used, pattern).saturating_sub(frame::frame_len(name_len, 0))
}

/// Frame bits a raster of `len` bytes can carry.
///
/// Exact for strides. For random walks this is an upper bound that assumes
/// every gap is `lo`.
pub fn available_bits(len: usize, bits_used: u8, pattern: &Pattern) -> u64 {
    let slots = match *pattern {
        Pattern::Stride(n) => (len as u64).div_ceil(n.max(1) as u64),
        // The first slot is already one gap in
        Pattern::Random { lo, .. } => len.saturating_sub(1) as u64 / lo.max(1) as u64,
    };

    slots * bits_used as u64
}

/// Whether `frame_bytes` of frame can possibly be laid out in `len` raster bytes
pub fn fits(len: usize, bits_used: u8, pattern: &Pattern, frame_bytes: u64) -> bool {
    frame_bytes.saturating_mul(8) <= available_bits(len, bits_used, pattern)
}
