//! The steganographic engine: hiding a payload in a raster and getting it
//! back out.

use crate::config::StegConfig;
use crate::error::Result;
use crate::payload::Payload;
use crate::raster::Raster;

mod lsb;

pub trait Cover {
    /// Hide the payload inside this cover as a complete frame
    fn cover(&mut self, payload: &Payload, config: &StegConfig) -> Result<()>;
}

pub trait Uncover {
    /// Check the signature and extract the hidden payload
    fn uncover(&self, config: &StegConfig) -> Result<Payload>;
}

/// Embed `payload` into a copy of `raster`; the original is left untouched
pub fn encode_file(raster: &Raster, payload: &Payload, config: &StegConfig) -> Result<Raster> {
    let mut cover = raster.clone();
    cover.cover(payload, config)?;

    Ok(cover)
}

pub fn decode_file(raster: &Raster, config: &StegConfig) -> Result<Payload> {
    raster.uncover(config)
}
