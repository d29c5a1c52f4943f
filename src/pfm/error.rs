use std::io;
use thiserror::Error;

/// PFM decode/encode failures
#[derive(Debug, Error)]
pub enum PfmError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The magic line is neither `Pf` nor `PF`
    #[error("not a PFM file (header starts with {found:?})")]
    NotAPfmFile { found: String },

    /// `PF` marks a three-channel color image
    #[error("color PFM images are not supported")]
    ColorUnsupported,

    #[error("invalid PFM header: {0}")]
    InvalidHeader(String),

    #[error("image has a zero dimension")]
    EmptyImage,

    #[error("truncated sample data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },
}
