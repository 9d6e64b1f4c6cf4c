//! Hide a file inside the least significant bits of an RGB image.
//!
//! A frame (signature, filename, file body) is spread over the low
//! `bits_used` bits of the raster's pixel bytes. Which bytes are used is
//! decided by a [`Pattern`]; every frame segment can additionally be passed
//! through a light [`Obfuscation`]. The decoder needs the exact same
//! [`StegConfig`] to find the frame again.
//!
//! ```rust,no_run
//! use islsb::{decode_file, encode_file, Payload, Raster, StegConfig};
//!
//! let raster = Raster::load("photo.png".as_ref())?;
//! let config = StegConfig::parse(2, "random,42,1,5", "vigenerekey")?;
//!
//! let payload = Payload::read("secret.txt".as_ref())?;
//! let cover = encode_file(&raster, &payload, &config)?;
//! cover.save("cover.png".as_ref())?;
//!
//! assert_eq!(decode_file(&cover, &config)?, payload);
//! # Ok::<(), islsb::StegError>(())
//! ```

pub mod bits;
pub mod capacity;
pub mod config;
pub mod cover;
pub mod crypto;
pub mod error;
pub mod frame;
pub mod jrand;
pub mod payload;
pub mod raster;
pub mod utils;
pub mod walker;

pub use capacity::{capacity, max_payload_bytes};
pub use config::StegConfig;
pub use cover::{decode_file, encode_file, Cover, Uncover};
pub use crypto::Obfuscation;
pub use error::{Result, StegError};
pub use payload::Payload;
pub use raster::Raster;
pub use walker::Pattern;
