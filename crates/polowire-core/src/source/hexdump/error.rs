use thiserror::Error;

#[derive(Debug, Error)]
pub enum HexRecordError {
    #[error("{0}")]
    Hex(String),
    #[error("{0}")]
    Timestamp(String),
}
