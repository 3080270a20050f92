use graphbinary_buffers::{Reader, Writer};

use super::TypeSerializer;
use crate::error::Result;
use crate::framing;
use crate::{DataType, Dispatcher, GValue};

/// 4-byte signed entry count followed by fully-qualified key/value pairs.
/// Entry order is preserved in both directions.
#[derive(Debug, Default, Clone, Copy)]
pub struct MapSerializer;

impl TypeSerializer for MapSerializer {
    type Value = Vec<(GValue, GValue)>;

    const DATA_TYPE: DataType = DataType::MAP;

    fn null_value(&self) -> Vec<(GValue, GValue)> {
        Vec::new()
    }

    fn extract<'v>(&self, value: &'v GValue) -> Option<&'v Vec<(GValue, GValue)>> {
        match value {
            GValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    fn into_gvalue(&self, value: Vec<(GValue, GValue)>) -> GValue {
        GValue::Map(value)
    }

    fn write_value(
        &self,
        value: &Vec<(GValue, GValue)>,
        writer: &mut Writer,
        dispatcher: &Dispatcher,
    ) -> Result<()> {
        framing::write_length(writer, Self::DATA_TYPE, value.len())?;
        if value.is_empty() {
            return Ok(());
        }
        let nested = dispatcher.nested()?;
        for (key, val) in value {
            nested.write(key, true, writer)?;
            nested.write(val, true, writer)?;
        }
        Ok(())
    }

    fn read_value(
        &self,
        reader: &mut Reader<'_>,
        dispatcher: &Dispatcher,
    ) -> Result<Vec<(GValue, GValue)>> {
        let len = framing::read_length(reader, Self::DATA_TYPE)?;
        let mut entries = Vec::with_capacity(len.min(reader.remaining() / 4));
        if len == 0 {
            return Ok(entries);
        }
        let nested = dispatcher.nested()?;
        for _ in 0..len {
            let key = nested.read(reader)?;
            let val = nested.read(reader)?;
            entries.push((key, val));
        }
        Ok(entries)
    }
}
