//! PPM header parser.
//!
//! Grammar, byte-oriented:
//!
//! ```text
//! <2-byte magic> <rest of line>
//! [ "#" ... "\n" ]*
//! <width> <height> <rest of line>
//! <max_val> <rest of line>
//! <pixel data>
//! ```
//!
//! Numbers are read after any run of ASCII whitespace, with an optional sign
//! before the decimal digits.

use alloc::format;

use super::PpmHeader;
use crate::error::PpmError;
use crate::image::FormatTag;

// ── Cursor over &[u8] ───────────────────────────────────────────────

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

/// Why an integer could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntError {
    /// Input ended before any digit.
    Eof,
    /// A byte that cannot start a number.
    Unexpected(u8),
    /// Value does not fit in i64.
    Overflow,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn rewind(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    /// Consume everything through the next `\n`, or to end of input.
    pub(crate) fn skip_line(&mut self) {
        while let Some(byte) = self.next_byte() {
            if byte == b'\n' {
                break;
            }
        }
    }

    /// Discard consecutive lines starting with `#`.
    pub(crate) fn skip_comment_lines(&mut self) {
        while let Some(byte) = self.next_byte() {
            if byte == b'#' {
                self.skip_line();
            } else {
                self.rewind(1);
                break;
            }
        }
    }

    /// Read one signed decimal integer, skipping leading whitespace.
    ///
    /// The byte after the last digit is left unconsumed.
    pub(crate) fn read_integer(&mut self) -> Result<i64, IntError> {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }

        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        let mut value: i64 = 0;
        let mut digits = 0usize;
        while let Some(byte) = self.peek() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(byte - b'0')))
                .ok_or(IntError::Overflow)?;
            digits += 1;
            self.pos += 1;
        }

        if digits == 0 {
            return match self.peek() {
                None => Err(IntError::Eof),
                Some(byte) => Err(IntError::Unexpected(byte)),
            };
        }
        Ok(if negative { -value } else { value })
    }
}

// ── Header ──────────────────────────────────────────────────────────

/// Parse a PPM header, leaving `data_offset` at the first pixel byte.
pub(crate) fn parse_header(data: &[u8]) -> Result<PpmHeader, PpmError> {
    let mut cursor = Cursor::new(data);

    let magic: [u8; 2] = cursor.read_array().ok_or(PpmError::UnexpectedEof)?;
    let format = FormatTag::from_magic(magic);
    cursor.skip_line();

    cursor.skip_comment_lines();

    let width = read_dimension(&mut cursor, "width")?;
    let height = read_dimension(&mut cursor, "height")?;
    cursor.skip_line();

    let max_val = header_integer(&mut cursor, "max value")?;
    if !(1..=255).contains(&max_val) {
        return Err(PpmError::MaxValOutOfRange(max_val));
    }
    cursor.skip_line();

    log::debug!(
        "ppm header: {format} {width}x{height} max_val={max_val}, data at {}",
        cursor.position()
    );

    Ok(PpmHeader {
        format,
        width,
        height,
        max_val: max_val as u8,
        data_offset: cursor.position(),
    })
}

fn header_integer(cursor: &mut Cursor<'_>, field: &str) -> Result<i64, PpmError> {
    cursor.read_integer().map_err(|e| match e {
        IntError::Eof => PpmError::UnexpectedEof,
        IntError::Unexpected(byte) => PpmError::InvalidHeader(format!(
            "expected {field}, found {:?}",
            byte as char
        )),
        IntError::Overflow => PpmError::InvalidHeader(format!("{field} does not fit in 64 bits")),
    })
}

fn read_dimension(cursor: &mut Cursor<'_>, field: &str) -> Result<u32, PpmError> {
    let value = header_integer(cursor, field)?;
    if value <= 0 {
        return Err(PpmError::InvalidHeader(format!(
            "{field} must be positive, got {value}"
        )));
    }
    u32::try_from(value)
        .map_err(|_| PpmError::InvalidHeader(format!("{field} {value} out of range")))
}
