//! In-place and copying pixel transforms on [`Image`].

use alloc::vec::Vec;

use crate::error::PpmError;
use crate::image::Image;
use crate::pixel::Channel;

impl Image {
    /// Replace every pixel with the mean of its channels, modulo 255.
    ///
    /// The gray value is `((r + g + b) / 3) % 255` with floor division.
    /// This wraps rather than clamps: pure white becomes black.
    ///
    /// ```
    /// let mut img = zenppm::Image::from_pixels(2, 1, 255, vec![255, 255, 255, 10, 20, 33])?;
    /// img.to_grayscale();
    /// assert_eq!(img.pixels(), &[0, 0, 0, 21, 21, 21]);
    /// # Ok::<(), zenppm::PpmError>(())
    /// ```
    pub fn to_grayscale(&mut self) {
        for px in self.pixels_mut().chunks_exact_mut(3) {
            let sum = u16::from(px[0]) + u16::from(px[1]) + u16::from(px[2]);
            let gray = ((sum / 3) % 255) as u8;
            px.fill(gray);
        }
    }

    /// Copy one channel into a new `width * height` buffer, row-major.
    pub fn channel(&self, channel: Channel) -> Vec<u8> {
        let offset = channel.offset();
        self.pixels()
            .chunks_exact(3)
            .map(|px| px[offset])
            .collect()
    }

    /// Like [`Image::channel`], selecting the channel by index (0 = R,
    /// 1 = G, 2 = B).
    pub fn extract_channel(&self, index: i32) -> Result<Vec<u8>, PpmError> {
        let channel = Channel::try_from(index)?;
        Ok(self.channel(channel))
    }
}
