use thiserror::Error;

/// Errors raised by the serialization and signing subsystem.
///
/// Every error is fatal to the single call that raised it; there is no
/// partial result or retry policy at this layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A negative number was passed where an unsigned value is expected, or
    /// a size parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input is not an even-length hex string.
    #[error("expected a hex string but got {0:?}")]
    InvalidHex(String),

    /// A transaction's type byte does not match the serializer selected
    /// for it.
    #[error("transaction type mismatch: expected {expected:#04x}, found {found:#04x}")]
    TypeMismatch {
        /// The type byte the serializer handles.
        expected: u8,
        /// The type byte the transaction carries.
        found: u8,
    },

    /// The transaction type has no registered exclusive-payload serializer.
    #[error("unsupported transaction type {0:#04x}")]
    UnsupportedType(u8),

    /// A transaction attribute's data exceeds the wire limit.
    #[error("attribute data is {size} bytes, exceeding the {max} byte maximum")]
    AttributeTooLarge {
        /// Byte length of the offending attribute data.
        size: usize,
        /// Maximum byte length the wire format allows.
        max: usize,
    },

    /// A private key or WIF string could not be decoded.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// An address failed base58check decoding or version validation.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The external signing capability reported a failure.
    #[error("signing failed: {0}")]
    SigningFailed(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
