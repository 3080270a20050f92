use graphbinary_buffers::{Reader, Writer};

use super::TypeSerializer;
use crate::error::{Error, Result};
use crate::framing::{self, Decoded};
use crate::{DataType, Dispatcher, GValue, ValueFlag};

/// A null whose kind is unknown: `0xFE 0x01`, never a payload.
///
/// The dispatcher uses this for [`GValue::Null`]. Without full qualification
/// there is nothing to write.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnspecifiedNullSerializer;

impl TypeSerializer for UnspecifiedNullSerializer {
    type Value = ();

    const DATA_TYPE: DataType = DataType::UNSPECIFIED_NULL;

    fn null_value(&self) {}

    fn extract<'v>(&self, value: &'v GValue) -> Option<&'v ()> {
        match value {
            GValue::Null => Some(&()),
            _ => None,
        }
    }

    fn into_gvalue(&self, _: ()) -> GValue {
        GValue::Null
    }

    fn write_value(&self, _: &(), _: &mut Writer, _: &Dispatcher) -> Result<()> {
        Ok(())
    }

    fn read_value(&self, _: &mut Reader<'_>, _: &Dispatcher) -> Result<()> {
        Ok(())
    }

    fn write(
        &self,
        _: Option<&()>,
        fully_qualified: bool,
        writer: &mut Writer,
        _: &Dispatcher,
    ) -> Result<()> {
        if fully_qualified {
            framing::write_header(writer, Self::DATA_TYPE, false);
        }
        Ok(())
    }

    fn deserialize_with(
        &self,
        buffer: Option<&[u8]>,
        fully_qualified: bool,
        _: &Dispatcher,
    ) -> Result<Decoded<()>> {
        framing::read(
            buffer,
            Self::DATA_TYPE,
            fully_qualified,
            || (),
            |_| {
                if fully_qualified {
                    Err(Error::UnexpectedPresenceFlag(ValueFlag::Value as u8))
                } else {
                    Ok(())
                }
            },
        )
    }
}
