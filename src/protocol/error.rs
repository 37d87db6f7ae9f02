//! Encoding errors for the Bind message.

use thiserror::Error;

/// Errors that can occur while writing parameters to the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A text parameter contains a literal NULL byte (0x00).
    #[error("Parameter {column} contains NULL byte (0x00) which is invalid in PostgreSQL")]
    NullByte { column: usize },

    /// Too many parameters for the protocol (limit is i16::MAX = 32767).
    #[error("Too many parameters: {0} (Limit is 32767)")]
    TooManyParameters(usize),

    /// A parameter value does not fit the i32 length prefix.
    #[error("Parameter {column} is {len} bytes, more than a Bind message can carry")]
    ValueTooLarge { column: usize, len: usize },
}

/// Result type alias for wire encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;
