//! Binary buffer utilities for the graphbinary codec.
//!
//! # Overview
//!
//! - [`Reader`] - Reads big-endian data from a byte slice with cursor tracking
//! - [`Writer`] - Writes big-endian data to an auto-growing buffer
//!
//! Every read on [`Reader`] is bounds checked and reports
//! [`BufferError::TruncatedInput`] instead of panicking, so decoders can run
//! directly over untrusted input.
//!
//! # Example
//!
//! ```
//! use graphbinary_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x04);
//! writer.i64(-1);
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x04);
//! assert_eq!(reader.i64().unwrap(), -1);
//! assert_eq!(reader.remaining(), 0);
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Fewer bytes remain than a read requested.
    TruncatedInput {
        /// Bytes the read needed.
        needed: usize,
        /// Bytes that were left.
        remaining: usize,
    },
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::TruncatedInput { needed, remaining } => write!(
                f,
                "truncated input: needed {needed} bytes, {remaining} remaining"
            ),
        }
    }
}

impl std::error::Error for BufferError {}
