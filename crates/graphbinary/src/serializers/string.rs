use graphbinary_buffers::{Reader, Writer};

use super::TypeSerializer;
use crate::error::{Error, Result};
use crate::framing;
use crate::{DataType, Dispatcher, GValue};

/// 4-byte signed byte length followed by UTF-8 text.
///
/// A null string written without a header becomes the empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringSerializer;

impl TypeSerializer for StringSerializer {
    type Value = String;

    const DATA_TYPE: DataType = DataType::STRING;

    fn null_value(&self) -> String {
        String::new()
    }

    fn extract<'v>(&self, value: &'v GValue) -> Option<&'v String> {
        match value {
            GValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn into_gvalue(&self, value: String) -> GValue {
        GValue::String(value)
    }

    fn write_value(&self, value: &String, writer: &mut Writer, _: &Dispatcher) -> Result<()> {
        framing::write_length(writer, Self::DATA_TYPE, value.len())?;
        writer.utf8(value);
        Ok(())
    }

    fn read_value(&self, reader: &mut Reader<'_>, _: &Dispatcher) -> Result<String> {
        let len = framing::read_length(reader, Self::DATA_TYPE)?;
        framing::check_length(reader, Self::DATA_TYPE, len)?;
        let bytes = reader.read_exact(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| Error::InvalidUtf8)
    }
}
