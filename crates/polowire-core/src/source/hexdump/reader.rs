use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::error::HexRecordError;
use super::layout;

#[derive(Debug, PartialEq)]
pub struct HexRecord {
    pub ts: Option<OffsetDateTime>,
    pub data: Vec<u8>,
}

/// Parse one capture line.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use polowire_core::source::hexdump::reader::parse_record;
///
/// let record = parse_record("2024-03-01T18:00:00Z 41 31 17 16").unwrap().unwrap();
/// assert_eq!(record.data, vec![0x41, 0x31, 0x17, 0x16]);
/// ```
pub fn parse_record(line: &str) -> Result<Option<HexRecord>, HexRecordError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(layout::COMMENT_PREFIX) {
        return Ok(None);
    }

    let mut rest = line;
    let mut ts = None;
    if let Some((first, tail)) = split_first_token(line) {
        if first.contains(layout::TIMESTAMP_MARKER) {
            let parsed = OffsetDateTime::parse(first, &Rfc3339)
                .map_err(|err| HexRecordError::Timestamp(format!("{first:?}: {err}")))?;
            ts = Some(parsed);
            rest = tail;
        }
    }

    let digits: String = rest.split_whitespace().collect();
    if digits.is_empty() {
        return Err(HexRecordError::Hex("record has no frame bytes".to_string()));
    }
    let data = hex::decode(&digits).map_err(|err| HexRecordError::Hex(err.to_string()))?;
    Ok(Some(HexRecord { ts, data }))
}

fn split_first_token(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let first = parts.next()?;
    Some((first, parts.next().unwrap_or("")))
}
