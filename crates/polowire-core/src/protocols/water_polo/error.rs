use thiserror::Error;

/// Errors returned when a recognized message type carries a payload that
/// does not match its micro-format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("truncated {width}-byte chunk at offset {offset}: only {actual} bytes left")]
    TruncatedChunk {
        width: usize,
        offset: usize,
        actual: usize,
    },
    #[error("invalid {field}: {value:?} is not a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid clock value {value:?}: expected MM:SS")]
    InvalidClock { value: String },
    #[error("payload is not ASCII")]
    NotAscii,
}
