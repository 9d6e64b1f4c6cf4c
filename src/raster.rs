//! Pixel buffers in interleaved BGR order and their image files.

use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};
use log::debug;
use std::io::{Error, ErrorKind};
use std::path::Path;

use crate::error::{Result, StegError};

/// Row-major BGR pixels, three bytes per pixel, no padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

fn invalid_image() -> StegError {
    StegError::InvalidImage("Please select an image.".into())
}

impl Raster {
    pub fn new(width: u32, height: u32, bytes: Vec<u8>) -> Result<Raster> {
        if width == 0 || height == 0 || bytes.len() as u64 != width as u64 * height as u64 * 3 {
            return Err(invalid_image());
        }

        Ok(Raster {
            width,
            height,
            bytes,
        })
    }

    /// All-black raster
    pub fn blank(width: u32, height: u32) -> Result<Raster> {
        Raster::new(width, height, vec![0; width as usize * height as usize * 3])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Any alpha channel is dropped and deeper channels are reduced to 8 bits
    pub fn from_image(image: &DynamicImage) -> Result<Raster> {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut bytes = rgb.into_raw();
        for pixel in bytes.chunks_exact_mut(3) {
            pixel.swap(0, 2);
        }

        Raster::new(width, height, bytes)
    }

    /// # Panics
    ///
    /// Never for a `Raster` built through [`Raster::new`], which checks the
    /// byte count against the dimensions.
    pub fn to_image(&self) -> RgbImage {
        let mut bytes = self.bytes.clone();
        for pixel in bytes.chunks_exact_mut(3) {
            pixel.swap(0, 2);
        }

        RgbImage::from_raw(self.width, self.height, bytes).expect("raster length is checked on construction")
    }

    pub fn load(path: &Path) -> Result<Raster> {
        let image = image::open(path).map_err(|_| invalid_image())?;

        let (width, height) = image.dimensions();
        debug!("Loaded {}x{} image", width, height);

        Raster::from_image(&image)
    }

    /// Save as PNG; other formats could be lossy and would destroy the frame
    pub fn save(&self, path: &Path) -> Result<()> {
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));

        if !is_png {
            return Err(StegError::config(format!(
                "The cover image must be saved as PNG, not {}",
                path.display()
            )));
        }

        self.to_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| StegError::Io(Error::new(ErrorKind::Other, e)))
    }
}
