use serde::{Deserialize, Serialize};

use super::error::FrameError;
use super::layout;
use super::reader::{FrameReader, read_ascii};
use crate::protocols::common::reader::is_ascii_digits;

/// Intermediate record extracted from one scoreboard frame.
///
/// `message_type` is always exactly ten ASCII digits; `payload` is raw and
/// not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFrame {
    /// Two-character id preceding the ETB/SYN marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Optional eight-digit block between SYN and SOH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_digits: Option<String>,
    /// Ten-digit message type code, the dispatch key.
    pub message_type: String,
    /// Everything after STX.
    pub payload: String,
}

/// Byte ranges of a structural match, before text decoding.
struct RawFrame<'a> {
    message_id: Option<&'a [u8]>,
    sequence_digits: Option<&'a [u8]>,
    message_type: &'a [u8],
    payload: &'a [u8],
}

/// Decode one already-delimited frame.
///
/// The header is searched for, not anchored: unrelated bytes may precede it.
/// Marker candidates are tried leftmost first and the first one whose
/// remainder matches contiguously wins.
///
/// # Examples
/// ```
/// use polowire_core::decode_frame;
///
/// let frame = decode_frame(b"A1\x17\x16\x010042100000\x0202:15").unwrap();
/// assert_eq!(frame.message_id.as_deref(), Some("A1"));
/// assert_eq!(frame.sequence_digits, None);
/// assert_eq!(frame.message_type, "0042100000");
/// assert_eq!(frame.payload, "02:15");
/// ```
///
/// # Errors
/// Returns `FrameError::Format` when no candidate matches and
/// `FrameError::Encoding` when a matched text field is not ASCII.
pub fn decode_frame(frame: &[u8]) -> Result<DecodedFrame, FrameError> {
    let reader = FrameReader::new(frame);
    if reader.len() < layout::MIN_HEADER_LEN {
        return Err(FrameError::Format {
            reason: "frame shorter than minimal header",
        });
    }

    let mut first_reason = None;
    for marker in reader.marker_offsets() {
        match match_at(&reader, marker) {
            Ok(raw) => return raw.into_decoded(),
            Err(reason) => {
                first_reason.get_or_insert(reason);
            }
        }
    }

    Err(FrameError::Format {
        reason: first_reason.unwrap_or("missing ETB/SYN marker"),
    })
}

fn match_at<'a>(reader: &FrameReader<'a>, marker: usize) -> Result<RawFrame<'a>, &'static str> {
    let message_id = marker
        .checked_sub(layout::MESSAGE_ID_LEN)
        .and_then(|start| reader.read_slice(start..marker));

    let mut offset = marker + layout::MARKER.len();
    let sequence_digits = reader.read_digits(offset, layout::SEQUENCE_LEN);
    if sequence_digits.is_some() {
        offset += layout::SEQUENCE_LEN;
    }

    if !reader.expect_u8(offset, layout::SOH) {
        return Err("missing SOH after ETB/SYN marker");
    }
    offset += 1;

    let message_type = reader
        .read_digits(offset, layout::MESSAGE_TYPE_LEN)
        .ok_or("message type must be 10 ASCII digits")?;
    offset += layout::MESSAGE_TYPE_LEN;

    if !reader.expect_u8(offset, layout::STX) {
        return Err("missing STX after message type");
    }
    offset += 1;

    Ok(RawFrame {
        message_id,
        sequence_digits,
        message_type,
        payload: reader.rest(offset),
    })
}

impl RawFrame<'_> {
    fn into_decoded(self) -> Result<DecodedFrame, FrameError> {
        Ok(DecodedFrame {
            message_id: self
                .message_id
                .map(|bytes| read_ascii(bytes, "message id"))
                .transpose()?,
            sequence_digits: self
                .sequence_digits
                .map(|bytes| read_ascii(bytes, "sequence digits"))
                .transpose()?,
            message_type: read_ascii(self.message_type, "message type")?,
            payload: read_ascii(self.payload, "payload")?,
        })
    }
}

/// Encode a decoded frame back into its wire bytes.
///
/// This is the inverse of [`decode_frame`]: decoding the output yields the
/// same record.
///
/// # Errors
/// Returns `FrameError::Format` when a field has the wrong shape and
/// `FrameError::Encoding` when a text field is not ASCII.
pub fn encode_frame(frame: &DecodedFrame) -> Result<Vec<u8>, FrameError> {
    let mut out = Vec::with_capacity(
        layout::MESSAGE_ID_LEN + layout::SEQUENCE_LEN + layout::MIN_HEADER_LEN + frame.payload.len(),
    );

    if let Some(message_id) = &frame.message_id {
        if !message_id.is_ascii() {
            return Err(FrameError::Encoding { field: "message id" });
        }
        if message_id.len() != layout::MESSAGE_ID_LEN {
            return Err(FrameError::Format {
                reason: "message id must be 2 bytes",
            });
        }
        out.extend_from_slice(message_id.as_bytes());
    }

    out.extend_from_slice(&layout::MARKER);
    if let Some(sequence) = &frame.sequence_digits {
        if !is_ascii_digits(sequence.as_bytes(), layout::SEQUENCE_LEN) {
            return Err(FrameError::Format {
                reason: "sequence digits must be 8 ASCII digits",
            });
        }
        out.extend_from_slice(sequence.as_bytes());
    }

    out.push(layout::SOH);
    if !is_ascii_digits(frame.message_type.as_bytes(), layout::MESSAGE_TYPE_LEN) {
        return Err(FrameError::Format {
            reason: "message type must be 10 ASCII digits",
        });
    }
    out.extend_from_slice(frame.message_type.as_bytes());

    out.push(layout::STX);
    if !frame.payload.is_ascii() {
        return Err(FrameError::Encoding { field: "payload" });
    }
    out.extend_from_slice(frame.payload.as_bytes());

    Ok(out)
}
