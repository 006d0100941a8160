use alloc::string::String;
use enough::StopReason;

use crate::image::FormatTag;
use crate::pixel::PixelLayout;

/// Errors from PPM/PGM decoding, encoding, and pixel transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    /// The file could not be opened, read, or written.
    #[cfg(feature = "std")]
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("max value out of range: {0} (expected 1..=255)")]
    MaxValOutOfRange(i64),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unsupported format tag {0}")]
    UnsupportedFormat(FormatTag),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("channel index {0} out of range (expected 0, 1 or 2)")]
    InvalidChannel(i32),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("pixel buffer has {actual} samples, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("cannot encode {layout:?} as {target}")]
    UnsupportedLayout {
        layout: PixelLayout,
        target: &'static str,
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("failed to allocate {0} bytes")]
    AllocationFailed(usize),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PpmError {
    fn from(r: StopReason) -> Self {
        PpmError::Cancelled(r)
    }
}
