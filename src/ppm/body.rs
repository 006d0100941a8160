//! PPM body decoder: P6 raw bytes, P3 ASCII decimal samples.

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;

use super::PpmHeader;
use super::header::{Cursor, IntError};
use crate::decode::DecodeWarning;
use crate::error::PpmError;
use crate::image::{FormatTag, alloc_zeroed};

/// Fill a zeroed `width * height * 3` buffer from `body` according to the
/// header's tag.
///
/// Short input is not an error: the decoded prefix is kept, the tail stays
/// zero, and a [`DecodeWarning::ShortRead`] is returned alongside.
pub(crate) fn decode_body(
    body: &[u8],
    header: &PpmHeader,
    expected: usize,
    stop: &dyn Stop,
) -> Result<(Vec<u8>, Option<DecodeWarning>), PpmError> {
    let mut pixels = alloc_zeroed(expected)?;

    let warning = match header.format {
        FormatTag::P6 => decode_raw(body, &mut pixels),
        FormatTag::P3 => decode_ascii(body, header.width as usize * 3, &mut pixels, stop)?,
        FormatTag::Unsupported(_) => {
            log::warn!("unsupported format tag {}, pixels left blank", header.format);
            Some(DecodeWarning::UnsupportedFormat(header.format))
        }
    };

    Ok((pixels, warning))
}

fn decode_raw(body: &[u8], pixels: &mut [u8]) -> Option<DecodeWarning> {
    let n = body.len().min(pixels.len());
    pixels[..n].copy_from_slice(&body[..n]);
    short_read(pixels.len(), n)
}

fn decode_ascii(
    body: &[u8],
    row_len: usize,
    pixels: &mut [u8],
    stop: &dyn Stop,
) -> Result<Option<DecodeWarning>, PpmError> {
    let mut cursor = Cursor::new(body);
    let total = pixels.len();

    for (row_idx, row) in pixels.chunks_mut(row_len.max(1)).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for (i, sample) in row.iter_mut().enumerate() {
            match cursor.read_integer() {
                // Keeps the low 8 bits.
                Ok(value) => *sample = value as u8,
                Err(IntError::Eof) => {
                    let read = row_idx * row_len + i;
                    return Ok(short_read(total, read));
                }
                Err(IntError::Unexpected(byte)) => {
                    return Err(PpmError::InvalidData(format!(
                        "expected decimal sample at offset {}, found {:?}",
                        cursor.position(),
                        byte as char
                    )));
                }
                Err(IntError::Overflow) => {
                    return Err(PpmError::InvalidData(format!(
                        "sample before offset {} does not fit in 64 bits",
                        cursor.position()
                    )));
                }
            }
        }
    }

    Ok(None)
}

fn short_read(expected: usize, actual: usize) -> Option<DecodeWarning> {
    if actual < expected {
        log::warn!("not enough pixel data: expected {expected} samples, got {actual}");
        Some(DecodeWarning::ShortRead { expected, actual })
    } else {
        None
    }
}
