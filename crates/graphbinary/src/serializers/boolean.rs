use graphbinary_buffers::{Reader, Writer};

use super::TypeSerializer;
use crate::error::{Error, Result};
use crate::framing;
use crate::{DataType, Dispatcher, GValue};

/// One byte: `0x00` false, `0x01` true. Any other byte is malformed.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanSerializer;

impl TypeSerializer for BooleanSerializer {
    type Value = bool;

    const DATA_TYPE: DataType = DataType::BOOLEAN;

    fn null_value(&self) -> bool {
        false
    }

    fn extract<'v>(&self, value: &'v GValue) -> Option<&'v bool> {
        match value {
            GValue::Boolean(b) => Some(b),
            _ => None,
        }
    }

    fn into_gvalue(&self, value: bool) -> GValue {
        GValue::Boolean(value)
    }

    fn write_value(&self, value: &bool, writer: &mut Writer, _: &Dispatcher) -> Result<()> {
        writer.u8(u8::from(*value));
        Ok(())
    }

    fn read_value(&self, reader: &mut Reader<'_>, _: &Dispatcher) -> Result<bool> {
        framing::check_length(reader, Self::DATA_TYPE, 1)?;
        match reader.u8()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            byte => Err(Error::UnexpectedValue {
                data_type: Self::DATA_TYPE,
                byte,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::Decoded;

    #[test]
    fn encodes_single_byte() {
        assert_eq!(BooleanSerializer.serialize(Some(&true), true), Ok(vec![0x27, 0x00, 0x01]));
        assert_eq!(BooleanSerializer.serialize(None, false), Ok(vec![0x00]));
    }

    #[test]
    fn rejects_other_bytes() {
        assert_eq!(
            BooleanSerializer.deserialize(Some(&[0x27, 0x00, 0x02]), true),
            Err(Error::UnexpectedValue {
                data_type: DataType::BOOLEAN,
                byte: 0x02
            })
        );
        assert_eq!(
            BooleanSerializer.deserialize(Some(&[0x01]), false),
            Ok(Decoded::new(true, 1))
        );
    }
}
