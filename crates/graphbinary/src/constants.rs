//! Type markers and presence flags shared by every serializer.

use std::fmt;

use crate::error::Error;

/// One-byte type marker identifying a value kind on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataType(pub u8);

impl DataType {
    pub const INT: DataType = DataType(0x01);
    pub const LONG: DataType = DataType(0x02);
    pub const STRING: DataType = DataType(0x03);
    pub const DATE: DataType = DataType(0x04);
    pub const TIMESTAMP: DataType = DataType(0x05);
    pub const DOUBLE: DataType = DataType(0x07);
    pub const FLOAT: DataType = DataType(0x08);
    pub const LIST: DataType = DataType(0x09);
    pub const MAP: DataType = DataType(0x0A);
    pub const BYTE: DataType = DataType(0x24);
    pub const SHORT: DataType = DataType(0x26);
    pub const BOOLEAN: DataType = DataType(0x27);
    pub const UNSPECIFIED_NULL: DataType = DataType(0xFE);

    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Name of a built-in kind, `None` for markers this crate does not define.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            DataType::INT => "int",
            DataType::LONG => "long",
            DataType::STRING => "string",
            DataType::DATE => "date",
            DataType::TIMESTAMP => "timestamp",
            DataType::DOUBLE => "double",
            DataType::FLOAT => "float",
            DataType::LIST => "list",
            DataType::MAP => "map",
            DataType::BYTE => "byte",
            DataType::SHORT => "short",
            DataType::BOOLEAN => "boolean",
            DataType::UNSPECIFIED_NULL => "unspecified null",
            _ => return None,
        })
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({:#04x})", self.0),
            None => write!(f, "{:#04x}", self.0),
        }
    }
}

/// Presence flag following the type marker in fully-qualified encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ValueFlag {
    /// A payload follows.
    Value = 0x00,
    /// The value is absent; no payload follows.
    Null = 0x01,
}

impl TryFrom<u8> for ValueFlag {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x00 => Ok(ValueFlag::Value),
            0x01 => Ok(ValueFlag::Null),
            other => Err(Error::UnexpectedPresenceFlag(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_known_and_unknown_markers() {
        assert_eq!(DataType::DATE.to_string(), "date (0x04)");
        assert_eq!(DataType(0x42).to_string(), "0x42");
    }

    #[test]
    fn value_flag_accepts_only_two_bytes() {
        assert_eq!(ValueFlag::try_from(0x00), Ok(ValueFlag::Value));
        assert_eq!(ValueFlag::try_from(0x01), Ok(ValueFlag::Null));
        assert_eq!(
            ValueFlag::try_from(0x10),
            Err(Error::UnexpectedPresenceFlag(0x10))
        );
    }
}
