//! Binary buffer reader with cursor tracking.

use crate::BufferError;

/// A binary buffer reader over an immutable byte slice.
///
/// The reader only ever moves its cursor; the underlying bytes are borrowed
/// and never touched, so independent readers over independent buffers can be
/// used from different threads freely. A single reader must be advanced by
/// one caller at a time.
///
/// # Example
///
/// ```
/// use graphbinary_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.i16().unwrap(), 0x0203);
/// assert_eq!(reader.remaining(), 1);
/// assert!(reader.i32().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

macro_rules! read_be {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&mut self) -> Result<$ty, BufferError> {
            let mut bytes = [0u8; std::mem::size_of::<$ty>()];
            bytes.copy_from_slice(self.read_exact(std::mem::size_of::<$ty>())?);
            Ok(<$ty>::from_be_bytes(bytes))
        }
    };
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn remaining(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns the next byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.uint8.get(self.x).copied()
    }

    /// Returns the unread part of the buffer without advancing the cursor.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..]
    }

    /// Returns the next `n` bytes and advances the cursor past them.
    ///
    /// Fails with [`BufferError::TruncatedInput`] when fewer than `n` bytes
    /// remain, in which case the cursor does not move.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], BufferError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(BufferError::TruncatedInput {
                needed: n,
                remaining,
            });
        }
        let start = self.x;
        self.x += n;
        Ok(&self.uint8[start..self.x])
    }

    /// Advances the cursor by `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<(), BufferError> {
        self.read_exact(n).map(|_| ())
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.read_exact(1)?[0])
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.read_exact(1)?[0] as i8)
    }

    read_be!(
        /// Reads a signed 16-bit integer (big-endian).
        i16,
        i16
    );
    read_be!(
        /// Reads a signed 32-bit integer (big-endian).
        i32,
        i32
    );
    read_be!(
        /// Reads a signed 64-bit integer (big-endian).
        i64,
        i64
    );
    read_be!(
        /// Reads a 32-bit floating point number (big-endian).
        f32,
        f32
    );
    read_be!(
        /// Reads a 64-bit floating point number (big-endian).
        f64,
        f64
    );
}
