use super::error::PayloadError;
use super::layout;
use crate::protocols::common::reader::parse_padded_u32;

#[derive(Debug, Clone, Copy)]
pub struct PayloadReader<'a> {
    payload: &'a str,
}

impl<'a> PayloadReader<'a> {
    /// Wrap a payload; byte offsets are only meaningful for ASCII text.
    pub fn new(payload: &'a str) -> Result<Self, PayloadError> {
        if !payload.is_ascii() {
            return Err(PayloadError::NotAscii);
        }
        Ok(Self { payload })
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn as_str(&self) -> &'a str {
        self.payload
    }

    pub fn require_len(&self, needed: usize) -> Result<(), PayloadError> {
        if self.payload.len() < needed {
            return Err(PayloadError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a str, PayloadError> {
        self.payload.get(range.clone()).ok_or(PayloadError::TooShort {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    /// Read a padded numeric field at a fixed range.
    pub fn read_u32(
        &self,
        range: std::ops::Range<usize>,
        field: &'static str,
    ) -> Result<u32, PayloadError> {
        let raw = self.read_slice(range)?;
        parse_number(raw, field)
    }

    /// Read a single-digit field.
    pub fn read_digit(&self, offset: usize, field: &'static str) -> Result<u32, PayloadError> {
        self.read_u32(offset..offset + 1, field)
    }

    /// Read the whole payload as one padded number.
    pub fn read_whole_u32(&self, field: &'static str) -> Result<u32, PayloadError> {
        parse_number(self.payload, field)
    }

    /// Read the whole payload as an `MM:SS` clock, in seconds.
    pub fn read_clock(&self) -> Result<u32, PayloadError> {
        let invalid = || PayloadError::InvalidClock {
            value: self.payload.to_string(),
        };
        let (minutes, seconds) = self
            .payload
            .split_once(layout::CLOCK_SEPARATOR)
            .ok_or_else(invalid)?;
        if seconds.contains(layout::CLOCK_SEPARATOR) {
            return Err(invalid());
        }
        let minutes = parse_padded_u32(minutes).ok_or_else(invalid)?;
        let seconds = parse_padded_u32(seconds).ok_or_else(invalid)?;
        minutes
            .checked_mul(60)
            .and_then(|total| total.checked_add(seconds))
            .ok_or_else(invalid)
    }

    /// Walk the payload in fixed-width chunks, left to right.
    pub fn chunks(&self, width: usize) -> ChunkCursor<'a> {
        ChunkCursor {
            payload: self.payload,
            offset: 0,
            width,
        }
    }
}

fn parse_number(raw: &str, field: &'static str) -> Result<u32, PayloadError> {
    parse_padded_u32(raw).ok_or_else(|| PayloadError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Cursor over back-to-back fixed-width records.
///
/// Ends when the payload is exhausted. A non-empty remainder shorter than
/// one chunk yields `PayloadError::TruncatedChunk` once, then the cursor
/// ends.
pub struct ChunkCursor<'a> {
    payload: &'a str,
    offset: usize,
    width: usize,
}

impl<'a> Iterator for ChunkCursor<'a> {
    type Item = Result<PayloadReader<'a>, PayloadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.payload.len().saturating_sub(self.offset);
        if remaining == 0 || self.width == 0 {
            return None;
        }

        let start = self.offset;
        if remaining < self.width {
            self.offset = self.payload.len();
            return Some(Err(PayloadError::TruncatedChunk {
                width: self.width,
                offset: start,
                actual: remaining,
            }));
        }

        self.offset += self.width;
        Some(
            self.payload
                .get(start..self.offset)
                .map(|payload| PayloadReader { payload })
                .ok_or(PayloadError::NotAscii),
        )
    }
}
