use log::debug;

use crate::capacity;
use crate::config::StegConfig;
use crate::cover::{Cover, Uncover};
use crate::error::{Result, StegError};
use crate::frame;
use crate::payload::Payload;
use crate::raster::Raster;

impl Cover for Raster {
    fn cover(&mut self, payload: &Payload, config: &StegConfig) -> Result<()> {
        config.validate()?;

        let len = self.bytes().len();
        let frame_len = frame::frame_len(payload.filename.len(), payload.content.len());

        // Exact for strides; random walks may still run out while writing
        if !capacity::fits(len, config.bits_used, &config.pattern, frame_len) {
            return Err(StegError::CapacityExceeded {
                required: frame_len * 8,
                available: capacity::available_bits(len, config.bits_used, &config.pattern),
            });
        }

        debug!(
            "Covering {} frame bytes in a {}x{} raster, {} bits per byte, method {}",
            frame_len,
            self.width(),
            self.height(),
            config.bits_used,
            config.pattern
        );

        frame::emit(self.bytes_mut(), payload, config)
    }
}

impl Uncover for Raster {
    fn uncover(&self, config: &StegConfig) -> Result<Payload> {
        config.validate()?;

        frame::parse(self.bytes(), config)
    }
}
