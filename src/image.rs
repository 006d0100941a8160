//! The decoded image container.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::PpmError;

/// Magic tag found at the start of a PPM stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// ASCII RGB.
    P3,
    /// Binary RGB.
    P6,
    /// Anything else. The raw two bytes are kept for diagnostics.
    Unsupported([u8; 2]),
}

impl FormatTag {
    pub(crate) fn from_magic(magic: [u8; 2]) -> Self {
        match &magic {
            b"P3" => Self::P3,
            b"P6" => Self::P6,
            _ => Self::Unsupported(magic),
        }
    }

    /// The two magic bytes as they appear in a file.
    pub fn magic(self) -> [u8; 2] {
        match self {
            Self::P3 => *b"P3",
            Self::P6 => *b"P6",
            Self::Unsupported(magic) => magic,
        }
    }

    pub fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.magic();
        write!(f, "{}", (a as char).escape_debug())?;
        write!(f, "{}", (b as char).escape_debug())
    }
}

/// An 8-bit RGB raster.
///
/// Pixels are stored interleaved (R, G, B), row-major, top row first.
/// The buffer always holds exactly `width * height * 3` samples; it is
/// owned by the image and released on drop.
///
/// Two images are equal when their geometry, `max_val`, format tag and
/// samples match. Where an image was read from does not take part.
#[derive(Clone, Debug)]
pub struct Image {
    width: u32,
    height: u32,
    max_val: u8,
    format: FormatTag,
    pixels: Vec<u8>,
    #[cfg(feature = "std")]
    source_path: Option<std::path::PathBuf>,
}

impl Image {
    /// Allocate a zero-filled image with `max_val = 255`.
    ///
    /// ```
    /// let img = zenppm::Image::new(256, 256)?;
    /// assert_eq!(img.pixels().len(), 256 * 256 * 3);
    /// assert_eq!(img.max_val(), 255);
    /// # Ok::<(), zenppm::PpmError>(())
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, PpmError> {
        let len = rgb_len(width, height)?;
        let pixels = alloc_zeroed(len)?;
        Ok(Self::from_parts(width, height, 255, FormatTag::P3, pixels))
    }

    /// Wrap an existing interleaved RGB buffer.
    ///
    /// The buffer must hold exactly `width * height * 3` samples.
    pub fn from_pixels(
        width: u32,
        height: u32,
        max_val: u8,
        pixels: Vec<u8>,
    ) -> Result<Self, PpmError> {
        let expected = rgb_len(width, height)?;
        if pixels.len() != expected {
            return Err(PpmError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        if max_val == 0 {
            return Err(PpmError::MaxValOutOfRange(0));
        }
        Ok(Self::from_parts(width, height, max_val, FormatTag::P3, pixels))
    }

    /// Callers uphold the length and max_val invariants.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        max_val: u8,
        format: FormatTag,
        pixels: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);
        debug_assert!(max_val > 0);
        Self {
            width,
            height,
            max_val,
            format,
            pixels,
            #[cfg(feature = "std")]
            source_path: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maximum sample value declared by the source header (255 for new images).
    pub fn max_val(&self) -> u8 {
        self.max_val
    }

    /// Encoding the pixels were read from.
    pub fn format(&self) -> FormatTag {
        self.format
    }

    /// Interleaved RGB samples.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to the samples. The length cannot change.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Take the pixel buffer, consuming the image.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Path the image was decoded from, if any.
    #[cfg(feature = "std")]
    pub fn source_path(&self) -> Option<&std::path::Path> {
        self.source_path.as_deref()
    }

    #[cfg(feature = "std")]
    pub(crate) fn set_source_path(&mut self, path: std::path::PathBuf) {
        self.source_path = Some(path);
    }

    /// Reinterpret pixel data as a slice of [`rgb::RGB8`].
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB8] {
        use rgb::AsPixels as _;
        self.pixels.as_pixels()
    }

    /// Mutable [`rgb::RGB8`] view of the pixel data.
    #[cfg(feature = "rgb")]
    pub fn as_rgb_mut(&mut self) -> &mut [rgb::RGB8] {
        use rgb::AsPixels as _;
        self.pixels.as_pixels_mut()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(self.as_rgb(), self.width as usize, self.height as usize)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.max_val == other.max_val
            && self.format == other.format
            && self.pixels == other.pixels
    }
}

impl Eq for Image {}

/// Sample count of an RGB image, rejecting zero and overflowing geometry.
pub(crate) fn rgb_len(width: u32, height: u32) -> Result<usize, PpmError> {
    if width == 0 || height == 0 {
        return Err(PpmError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(PpmError::DimensionsTooLarge { width, height })
}

/// Zero-filled buffer, reporting allocation failure instead of aborting.
///
/// The reservation only tests that `len` bytes can be had. The buffer itself
/// comes from `vec![0; len]`, which asks the allocator for zeroed memory
/// instead of writing every byte, so untouched pages stay uncommitted.
pub(crate) fn alloc_zeroed(len: usize) -> Result<Vec<u8>, PpmError> {
    let mut reservation: Vec<u8> = Vec::new();
    reservation
        .try_reserve_exact(len)
        .map_err(|_| PpmError::AllocationFailed(len))?;
    drop(reservation);
    Ok(vec![0u8; len])
}
