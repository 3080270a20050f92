//! Header layout and validation shared by every typed serializer.
//!
//! A fully-qualified value is laid out as
//!
//! ```text
//! offset 0 : type marker   (1 byte)
//! offset 1 : value flag    (1 byte: 0x00 value follows | 0x01 null)
//! offset 2 : payload       (only when the flag is 0x00)
//! ```
//!
//! Without full qualification only the payload is present.

use graphbinary_buffers::{Reader, Writer};
use log::debug;

use crate::constants::{DataType, ValueFlag};
use crate::error::{Error, Result};

/// A decoded value together with the number of bytes it occupied.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub len: usize,
}

impl<T> Decoded<T> {
    pub fn new(value: T, len: usize) -> Self {
        Self { value, len }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            len: self.len,
        }
    }
}

/// Writes the type marker and the value flag.
pub fn write_header(writer: &mut Writer, data_type: DataType, present: bool) {
    writer.u8(data_type.code());
    writer.u8(if present {
        ValueFlag::Value as u8
    } else {
        ValueFlag::Null as u8
    });
}

/// Validates the header of `buffer` and decodes its payload.
///
/// Checks run in order and stop at the first failure: missing buffer, empty
/// buffer, then (fully-qualified only) type marker, presence and validity of
/// the value flag. A null flag yields `null_value()` after two bytes;
/// otherwise `payload` decodes from the bytes that follow. Without full
/// qualification the whole buffer goes to `payload`.
pub fn read<'a, T>(
    buffer: Option<&'a [u8]>,
    expected: DataType,
    fully_qualified: bool,
    null_value: impl FnOnce() -> T,
    payload: impl FnOnce(&mut Reader<'a>) -> Result<T>,
) -> Result<Decoded<T>> {
    read_inner(buffer, expected, fully_qualified, null_value, payload)
        .inspect_err(|err| debug!("rejected {expected} input: {err}"))
}

fn read_inner<'a, T>(
    buffer: Option<&'a [u8]>,
    expected: DataType,
    fully_qualified: bool,
    null_value: impl FnOnce() -> T,
    payload: impl FnOnce(&mut Reader<'a>) -> Result<T>,
) -> Result<Decoded<T>> {
    let bytes = buffer.ok_or(Error::MissingBuffer)?;
    if bytes.is_empty() {
        return Err(Error::EmptyBuffer);
    }
    let mut reader = Reader::new(bytes);

    if fully_qualified {
        let actual = reader.u8()?;
        if actual != expected.code() {
            return Err(Error::UnexpectedTypeCode { expected, actual });
        }
        let flag = reader.u8().map_err(|_| Error::MissingPresenceFlag)?;
        if ValueFlag::try_from(flag)? == ValueFlag::Null {
            return Ok(Decoded::new(null_value(), reader.x));
        }
    }

    let value = payload(&mut reader)?;
    Ok(Decoded::new(value, reader.x))
}

/// Fails with [`Error::UnexpectedValueLength`] unless `width` bytes remain.
pub fn check_length(reader: &Reader<'_>, data_type: DataType, width: usize) -> Result<()> {
    let remaining = reader.remaining();
    if remaining < width {
        return Err(Error::UnexpectedValueLength {
            data_type,
            expected: width as i64,
            remaining,
        });
    }
    Ok(())
}

/// Reads a 4-byte signed length prefix, rejecting negative values.
pub fn read_length(reader: &mut Reader<'_>, data_type: DataType) -> Result<usize> {
    check_length(reader, data_type, 4)?;
    let len = reader.i32()?;
    usize::try_from(len).map_err(|_| Error::UnexpectedValueLength {
        data_type,
        expected: i64::from(len),
        remaining: reader.remaining(),
    })
}

/// Writes a 4-byte signed length prefix.
pub fn write_length(writer: &mut Writer, data_type: DataType, len: usize) -> Result<()> {
    let len32 = i32::try_from(len).map_err(|_| Error::ValueTooLarge { data_type, len })?;
    writer.i32(len32);
    Ok(())
}
