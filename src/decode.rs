use enough::Stop;

use crate::error::PpmError;
use crate::image::{FormatTag, Image};
use crate::limits::Limits;

/// How to treat a magic tag other than `P3`/`P6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Decode the header and return a blank (all-zero) image, with a
    /// [`DecodeWarning::UnsupportedFormat`] annotation.
    #[default]
    Lenient,
    /// Fail with [`PpmError::UnsupportedFormat`].
    Strict,
}

/// Non-fatal anomaly observed while decoding.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeWarning {
    /// The body held fewer samples than the header declared. The samples
    /// that were present are decoded; the rest of the buffer is zero.
    ShortRead { expected: usize, actual: usize },
    /// The tag was not recognized, so no pixel data was read.
    UnsupportedFormat(FormatTag),
}

/// Decoded image plus any warning raised on the way.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    image: Image,
    warning: Option<DecodeWarning>,
}

impl DecodeOutput {
    pub(crate) fn new(image: Image, warning: Option<DecodeWarning>) -> Self {
        Self { image, warning }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn into_image(self) -> Image {
        self.image
    }

    pub fn warning(&self) -> Option<&DecodeWarning> {
        self.warning.as_ref()
    }

    /// True when the header was recognized and the body held every sample.
    pub fn is_complete(&self) -> bool {
        self.warning.is_none()
    }
}

/// Decode builder.
///
/// ```
/// use zenppm::{DecodeRequest, Limits, Strictness, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let out = DecodeRequest::new()
///     .with_limits(&limits)
///     .with_strictness(Strictness::Strict)
///     .decode(b"P6\n1 1\n255\n\x01\x02\x03", Unstoppable)?;
/// assert_eq!(out.image().pixels(), &[1, 2, 3]);
/// # Ok::<(), zenppm::PpmError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DecodeRequest<'a> {
    limits: Option<&'a Limits>,
    strictness: Strictness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Decode a PPM held in memory.
    pub fn decode(&self, data: &[u8], stop: impl Stop) -> Result<DecodeOutput, PpmError> {
        crate::ppm::decode(data, self.limits, self.strictness, &stop)
    }

    /// Read and decode a PPM file.
    ///
    /// The file is read in full and closed before the body is decoded.
    #[cfg(feature = "std")]
    pub fn decode_file(
        &self,
        path: impl AsRef<std::path::Path>,
        stop: impl Stop,
    ) -> Result<DecodeOutput, PpmError> {
        let path = path.as_ref();
        let data = crate::fs::read_file(path)?;
        let mut out = self.decode(&data, stop)?;
        out.image.set_source_path(path.to_path_buf());
        Ok(out)
    }
}
