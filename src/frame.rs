//! In-image frame layout.
//!
//! ```text
//! +-------+---------+--------+---------+--------+
//! | ISLSB | name_len|  name  | body_len|  body  |
//! |  5 B  | 4 B (BE)| n B    | 4 B (BE)| p B    |
//! +-------+---------+--------+---------+--------+
//! ```
//!
//! Both lengths are big-endian signed 32-bit integers. Every segment is
//! obfuscated on its own before it is written, the signature included, so a
//! decoder with the wrong parameters fails on the very first segment.

use log::debug;

use crate::bits::{BitCursor, Exhausted};
use crate::capacity;
use crate::config::StegConfig;
use crate::crypto;
use crate::error::{Result, StegError};
use crate::payload::Payload;

pub const SIGNATURE: &[u8; 5] = b"ISLSB";
pub const LENGTH_BYTES: usize = 4;

/// Frame size in bytes for a given filename and body length
pub fn frame_len(name_len: usize, body_len: usize) -> u64 {
    (SIGNATURE.len() + LENGTH_BYTES + name_len + LENGTH_BYTES + body_len) as u64
}

pub fn required_bits(name_len: usize, body_len: usize) -> u64 {
    frame_len(name_len, body_len) * 8
}

fn encode_length(len: usize) -> Option<[u8; LENGTH_BYTES]> {
    i32::try_from(len).ok().map(i32::to_be_bytes)
}

struct FrameWriter<'a> {
    raster: &'a mut [u8],
    config: &'a StegConfig,
    offset: usize,
}

impl FrameWriter<'_> {
    fn segment(&mut self, bytes: &[u8]) -> std::result::Result<(), Exhausted> {
        let encrypted = crypto::encrypt(bytes, &self.config.obfuscation);

        BitCursor::at(&self.config.pattern, self.config.bits_used, self.offset)
            .write_bytes(self.raster, &encrypted)?;

        self.offset += encrypted.len();
        Ok(())
    }
}

/// Write a complete frame for `payload` into `raster`.
///
/// The raster is left partially written if it runs out mid-frame; the error
/// then carries the number of bits placed before that happened.
pub fn emit(raster: &mut [u8], payload: &Payload, config: &StegConfig) -> Result<()> {
    let name = payload.filename.as_bytes();
    let body = &payload.content;

    let required = required_bits(name.len(), body.len());

    let (Some(name_len), Some(body_len)) = (encode_length(name.len()), encode_length(body.len())) else {
        return Err(StegError::CapacityExceeded {
            required,
            available: capacity::available_bits(raster.len(), config.bits_used, &config.pattern),
        });
    };

    debug!(
        "Emitting frame of {} bits ({} name bytes, {} body bytes)",
        required,
        name.len(),
        body.len()
    );

    let mut writer = FrameWriter {
        raster,
        config,
        offset: 0,
    };

    let segments: [&[u8]; 5] = [SIGNATURE, &name_len, name, &body_len, body.as_slice()];
    for segment in segments {
        // A random walk can leave the raster before the upfront estimate
        // says it should; report how far it actually got
        if let Err(Exhausted { bits }) = writer.segment(segment) {
            let available = writer.offset as u64 * 8 + bits;
            debug!("Raster exhausted after {} of {} bits", available, required);

            return Err(StegError::CapacityExceeded {
                required,
                available,
            });
        }
    }

    Ok(())
}

struct FrameReader<'a> {
    raster: &'a [u8],
    config: &'a StegConfig,
    offset: usize,
}

impl FrameReader<'_> {
    fn segment(&mut self, len: usize) -> Result<Vec<u8>> {
        let end = self.offset as u64 + len as u64;
        if !capacity::fits(self.raster.len(), self.config.bits_used, &self.config.pattern, end) {
            return Err(StegError::NoEncodedFile);
        }

        let bytes = BitCursor::at(&self.config.pattern, self.config.bits_used, self.offset)
            .read_bytes(self.raster, len)
            .map_err(|_| StegError::NoEncodedFile)?;

        self.offset += len;
        Ok(crypto::decrypt(&bytes, &self.config.obfuscation))
    }

    fn length(&mut self) -> Result<usize> {
        let bytes = self.segment(LENGTH_BYTES)?;
        let value = i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

        usize::try_from(value).map_err(|_| StegError::NoEncodedFile)
    }
}

/// Check the signature and read the frame back out of `raster`.
///
/// Any inconsistency is reported as [`StegError::NoEncodedFile`].
pub fn parse(raster: &[u8], config: &StegConfig) -> Result<Payload> {
    let mut reader = FrameReader {
        raster,
        config,
        offset: 0,
    };

    if reader.segment(SIGNATURE.len())? != SIGNATURE {
        debug!("Signature mismatch");
        return Err(StegError::NoEncodedFile);
    }

    let name_len = reader.length()?;
    let name = reader.segment(name_len)?;
    let filename = String::from_utf8(name).map_err(|_| StegError::NoEncodedFile)?;

    let body_len = reader.length()?;
    let content = reader.segment(body_len)?;

    debug!(
        "Parsed frame of {} bytes ({} name bytes, {} body bytes)",
        reader.offset, name_len, body_len
    );

    Ok(Payload::new(filename, content))
}
