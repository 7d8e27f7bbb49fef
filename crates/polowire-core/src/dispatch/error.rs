use thiserror::Error;

use crate::protocols::frame::FrameError;
use crate::protocols::water_polo::PayloadError;

/// Failure of a full decode + dispatch pass over raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl DecodeError {
    /// Short classification used in reports: `frame`, `encoding` or `payload`.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::Frame(FrameError::Format { .. }) => "frame",
            DecodeError::Frame(FrameError::Encoding { .. }) => "encoding",
            DecodeError::Payload(_) => "payload",
        }
    }
}
