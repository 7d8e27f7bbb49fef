mod hexdump;

pub use hexdump::{HexFileSource, HexSource};

use thiserror::Error;
use time::OffsetDateTime;

/// One recorded frame, already delimited.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEvent {
    /// 1-based line of the record in its capture.
    pub line: u64,
    pub ts: Option<OffsetDateTime>,
    pub data: Vec<u8>,
}

pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex on line {line}: {message}")]
    Hex { line: u64, message: String },
    #[error("invalid timestamp on line {line}: {message}")]
    Timestamp { line: u64, message: String },
}

impl SourceError {
    fn from_record(line: u64, err: hexdump::error::HexRecordError) -> Self {
        match err {
            hexdump::error::HexRecordError::Hex(message) => SourceError::Hex { line, message },
            hexdump::error::HexRecordError::Timestamp(message) => {
                SourceError::Timestamp { line, message }
            }
        }
    }
}
