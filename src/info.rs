use crate::error::PpmError;
use crate::image::FormatTag;

/// Header fields of a PPM stream, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub max_val: u8,
    pub format: FormatTag,
}

impl ImageInfo {
    /// Parse only the header of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PpmError> {
        crate::ppm::probe_header(data)
    }

    #[cfg(feature = "std")]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, PpmError> {
        let data = crate::fs::read_file(path.as_ref())?;
        Self::from_bytes(&data)
    }

    /// Bytes a P6 body of this geometry should hold.
    pub fn expected_body_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(3)
    }
}
