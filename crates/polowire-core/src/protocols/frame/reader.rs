use super::error::FrameError;
use super::layout;
use crate::protocols::common::reader::is_ascii_digits;

pub struct FrameReader<'a> {
    frame: &'a [u8],
}

impl<'a> FrameReader<'a> {
    pub fn new(frame: &'a [u8]) -> Self {
        Self { frame }
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    /// Offsets of every ETB/SYN marker, leftmost first.
    pub fn marker_offsets(&self) -> impl Iterator<Item = usize> + 'a {
        self.frame
            .windows(layout::MARKER.len())
            .enumerate()
            .filter(|(_, window)| *window == layout::MARKER)
            .map(|(offset, _)| offset)
    }

    pub fn read_u8(&self, offset: usize) -> Option<u8> {
        self.frame.get(offset).copied()
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Option<&'a [u8]> {
        self.frame.get(range)
    }

    /// Read exactly `len` ASCII digits starting at `offset`.
    pub fn read_digits(&self, offset: usize, len: usize) -> Option<&'a [u8]> {
        let end = offset.checked_add(len)?;
        self.read_slice(offset..end)
            .filter(|digits| is_ascii_digits(digits, len))
    }

    pub fn expect_u8(&self, offset: usize, value: u8) -> bool {
        self.read_u8(offset) == Some(value)
    }

    pub fn rest(&self, offset: usize) -> &'a [u8] {
        self.frame.get(offset..).unwrap_or_default()
    }
}

/// Decode a frame field as ASCII text.
pub fn read_ascii(bytes: &[u8], field: &'static str) -> Result<String, FrameError> {
    if !bytes.is_ascii() {
        return Err(FrameError::Encoding { field });
    }
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}
