use thiserror::Error;

pub type Result<T> = std::result::Result<T, StegError>;

/// Everything that can go wrong while hiding or recovering a file.
///
/// Every variant can be shown to a user as a `(title, message)` pair; the
/// `Display` impl joins the two on separate lines.
#[derive(Debug, Error)]
pub enum StegError {
    #[error("The chosen image is invalid!\n{0}")]
    InvalidImage(String),

    #[error("The file can not be read!\n{0}")]
    UnreadablePayload(String),

    #[error("The file is too large!\nThe frame needs {required} bits, but only {available} bits are available")]
    CapacityExceeded { required: u64, available: u64 },

    /// Signature mismatch and malformed frames are reported the same way
    #[error("Decoding error!\nThere is no encoded file in the provided image.")]
    NoEncodedFile,

    #[error("Invalid configuration!\n{0}")]
    InvalidConfig(String),

    #[error("Saving error!\n{0}")]
    Io(#[from] std::io::Error),
}

impl StegError {
    pub fn title(&self) -> &'static str {
        match self {
            StegError::InvalidImage(_) => "The chosen image is invalid!",
            StegError::UnreadablePayload(_) => "The file can not be read!",
            StegError::CapacityExceeded { .. } => "The file is too large!",
            StegError::NoEncodedFile => "Decoding error!",
            StegError::InvalidConfig(_) => "Invalid configuration!",
            StegError::Io(_) => "Saving error!",
        }
    }

    pub fn message(&self) -> String {
        match self {
            StegError::InvalidImage(msg)
            | StegError::UnreadablePayload(msg)
            | StegError::InvalidConfig(msg) => msg.clone(),
            StegError::CapacityExceeded {
                required,
                available,
            } => format!(
                "The frame needs {} bits, but only {} bits are available",
                required, available
            ),
            StegError::NoEncodedFile => "There is no encoded file in the provided image.".into(),
            StegError::Io(e) => e.to_string(),
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        StegError::InvalidConfig(msg.into())
    }
}
