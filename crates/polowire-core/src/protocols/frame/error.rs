use thiserror::Error;

/// Errors returned by frame decoding and encoding.
///
/// # Examples
/// ```
/// use polowire_core::{FrameError, decode_frame};
///
/// let err = decode_frame(b"no markers here").unwrap_err();
/// assert!(matches!(err, FrameError::Format { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// The bytes do not match the control-byte structure.
    #[error("frame format error: {reason}")]
    Format { reason: &'static str },
    /// A text field contains non-ASCII bytes.
    #[error("frame encoding error: {field} is not ASCII")]
    Encoding { field: &'static str },
}
