use graphbinary_buffers::BufferError;
use thiserror::Error;

use crate::DataType;

/// Error type for GraphBinary encoding, decoding and dispatch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("buffer is missing")]
    MissingBuffer,
    #[error("buffer is empty")]
    EmptyBuffer,
    #[error("unexpected type code {actual:#04x}, expected {expected}")]
    UnexpectedTypeCode { expected: DataType, actual: u8 },
    #[error("value flag is missing")]
    MissingPresenceFlag,
    #[error("unexpected value flag {0:#04x}")]
    UnexpectedPresenceFlag(u8),
    #[error("unexpected {data_type} value length: expected {expected} bytes, {remaining} remaining")]
    UnexpectedValueLength {
        data_type: DataType,
        expected: i64,
        remaining: usize,
    },
    #[error("unexpected {data_type} value byte {byte:#04x}")]
    UnexpectedValue { data_type: DataType, byte: u8 },
    #[error("{data_type} value of length {len} does not fit the wire format")]
    ValueTooLarge { data_type: DataType, len: usize },
    #[error("invalid UTF-8 in string value")]
    InvalidUtf8,
    #[error("no serializer found for {0} value")]
    UnknownType(&'static str),
    #[error("no serializer registered for type code {0:#04x}")]
    UnregisteredTypeCode(u8),
    #[error("more than one serializer registered for {0}")]
    DuplicateTypeCode(DataType),
    #[error("values nested deeper than {0} levels")]
    DepthLimitExceeded(usize),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

pub type Result<T> = std::result::Result<T, Error>;
