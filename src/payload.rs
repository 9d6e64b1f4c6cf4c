use log::debug;
use memmap2::Mmap;
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};

use crate::error::{Result, StegError};
use crate::utils;

/// A file to hide, or one recovered from a cover image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub filename: String,
    pub content: Vec<u8>,
}

impl Payload {
    pub fn new(filename: String, content: Vec<u8>) -> Payload {
        Payload { filename, content }
    }

    /// Read a payload file; only its final path component is kept as the name
    pub fn read(path: &Path) -> Result<Payload> {
        let unreadable = || StegError::UnreadablePayload("Please select a different file.".into());

        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(unreadable)?
            .to_string();

        let file = File::open(path).map_err(|_| unreadable())?;
        let len = file.metadata().map_err(|_| unreadable())?.len();

        if len > i32::MAX as u64 {
            return Err(StegError::CapacityExceeded {
                required: len * 8,
                available: i32::MAX as u64 * 8,
            });
        }

        // Empty files can't be mapped
        let content = if len == 0 {
            vec![]
        } else {
            let map = unsafe { Mmap::map(&file).map_err(|_| unreadable())? };
            map[..].to_vec()
        };

        debug!("Read payload of {} bytes", content.len());

        Ok(Payload::new(filename, content))
    }

    /// Write the content into `dir` under the recovered filename.
    ///
    /// The name is reduced to a single path component first, so a crafted
    /// frame can't write outside `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let name = utils::safe_file_name(&self.filename).unwrap_or_else(|| "decoded.bin".to_string());

        if !dir.exists() {
            create_dir_all(dir)?;
        }

        let out = dir.join(name);
        std::fs::write(&out, &self.content)?;

        Ok(out)
    }
}
