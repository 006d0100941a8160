use alloc::format;

use crate::error::PpmError;
use crate::image::rgb_len;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Headers are trusted for the
/// buffer size, so set at least `max_memory_bytes` when decoding untrusted
/// input: a 20-byte header can otherwise request gigabytes.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the RGB pixel buffer, `width * height * 3` bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Size of the RGB buffer a `width` x `height` image needs, or the first
    /// limit it breaks.
    pub(crate) fn rgb_buffer_len(&self, width: u32, height: u32) -> Result<usize, PpmError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;

        let len = rgb_len(width, height)?;
        exceeds("pixel buffer bytes", len as u64, self.max_memory_bytes)?;
        Ok(len)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), PpmError> {
    match limit {
        Some(max) if value > max => Err(PpmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_only_rejects_unrepresentable_sizes() {
        let limits = Limits::default();
        assert_eq!(limits.rgb_buffer_len(4, 5).unwrap(), 60);
        assert!(matches!(
            limits.rgb_buffer_len(0, 5),
            Err(PpmError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn pixel_count_limit() {
        let limits = Limits {
            max_pixels: Some(100),
            ..Default::default()
        };
        assert!(limits.rgb_buffer_len(10, 10).is_ok());
        assert!(matches!(
            limits.rgb_buffer_len(10, 11),
            Err(PpmError::LimitExceeded(_))
        ));
    }

    #[test]
    fn memory_limit_counts_three_bytes_per_pixel() {
        let limits = Limits {
            max_memory_bytes: Some(300),
            ..Default::default()
        };
        assert_eq!(limits.rgb_buffer_len(10, 10).unwrap(), 300);
        assert!(matches!(
            limits.rgb_buffer_len(10, 11),
            Err(PpmError::LimitExceeded(_))
        ));
    }
}
