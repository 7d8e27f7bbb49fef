/// Parse a padded ASCII numeric field.
///
/// Surrounding whitespace is trimmed first; the remainder must be a
/// non-empty run of ASCII digits that fits in a `u32`.
pub(crate) fn parse_padded_u32(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Check that a byte slice is exactly `len` ASCII digits.
pub(crate) fn is_ascii_digits(bytes: &[u8], len: usize) -> bool {
    bytes.len() == len && bytes.iter().all(u8::is_ascii_digit)
}
