//! Scoreboard frame envelope decoding.
//!
//! A frame is a two-byte message id, the ETB/SYN marker, an optional
//! eight-digit block, SOH, a ten-digit message type, STX and the ASCII
//! payload. The decoder searches for the header instead of anchoring at the
//! first byte, since unrelated bytes may precede a frame on the wire.
//!
//! Only the message id and the eight-digit block are optional; any other
//! missing or malformed element rejects the whole frame. Control bytes and
//! widths live in `layout`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::FrameError;
pub use parser::{DecodedFrame, decode_frame, encode_frame};
