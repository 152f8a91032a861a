use thiserror::Error;

/// Errors produced by C4 type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum C4Error {
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid character 0x{byte:02x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },

    #[error("invalid hex string: {0}")]
    InvalidHex(String),
}
