use graphbinary_buffers::{Reader, Writer};

use super::TypeSerializer;
use crate::error::Result;
use crate::framing;
use crate::{DataType, Dispatcher, GValue};

/// 4-byte signed item count followed by that many fully-qualified items.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListSerializer;

impl TypeSerializer for ListSerializer {
    type Value = Vec<GValue>;

    const DATA_TYPE: DataType = DataType::LIST;

    fn null_value(&self) -> Vec<GValue> {
        Vec::new()
    }

    fn extract<'v>(&self, value: &'v GValue) -> Option<&'v Vec<GValue>> {
        match value {
            GValue::List(items) => Some(items),
            _ => None,
        }
    }

    fn into_gvalue(&self, value: Vec<GValue>) -> GValue {
        GValue::List(value)
    }

    fn write_value(
        &self,
        value: &Vec<GValue>,
        writer: &mut Writer,
        dispatcher: &Dispatcher,
    ) -> Result<()> {
        framing::write_length(writer, Self::DATA_TYPE, value.len())?;
        if value.is_empty() {
            return Ok(());
        }
        let items = dispatcher.nested()?;
        for item in value {
            items.write(item, true, writer)?;
        }
        Ok(())
    }

    fn read_value(&self, reader: &mut Reader<'_>, dispatcher: &Dispatcher) -> Result<Vec<GValue>> {
        let len = framing::read_length(reader, Self::DATA_TYPE)?;
        // Every item takes at least a two-byte header.
        let mut items = Vec::with_capacity(len.min(reader.remaining() / 2));
        if len == 0 {
            return Ok(items);
        }
        let nested = dispatcher.nested()?;
        for _ in 0..len {
            items.push(nested.read(reader)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::framing::Decoded;
    use crate::Date;

    #[test]
    fn items_are_fully_qualified() {
        let list = vec![GValue::Int(1), GValue::Null];
        assert_eq!(
            ListSerializer.serialize(Some(&list), true),
            Ok(vec![0x09, 0x00, 0, 0, 0, 2, 0x01, 0x00, 0, 0, 0, 1, 0xfe, 0x01])
        );
        assert_eq!(
            ListSerializer.deserialize(
                Some(&[0x09, 0x00, 0, 0, 0, 2, 0x01, 0x00, 0, 0, 0, 1, 0xfe, 0x01]),
                true
            ),
            Ok(Decoded::new(list, 14))
        );
    }

    #[test]
    fn null_list_is_empty_without_header() {
        assert_eq!(ListSerializer.serialize(None, false), Ok(vec![0, 0, 0, 0]));
        assert_eq!(
            ListSerializer.deserialize(Some(&[0x09, 0x01]), true),
            Ok(Decoded::new(Vec::new(), 2))
        );
    }

    #[test]
    fn missing_items_fail() {
        assert_eq!(
            ListSerializer.deserialize(Some(&[0, 0, 0, 1]), false),
            Err(Error::EmptyBuffer)
        );
    }

    #[test]
    fn nesting_is_bounded_both_ways() {
        let shallow = Dispatcher::builder()
            .with_defaults()
            .max_depth(1)
            .build()
            .unwrap();
        let one_level = vec![GValue::List(vec![])];
        let two_levels = vec![GValue::List(vec![GValue::Int(1)])];

        let bytes = ListSerializer
            .serialize_with(Some(&one_level), true, &shallow)
            .unwrap();
        assert_eq!(
            ListSerializer.deserialize_with(Some(&bytes), true, &shallow),
            Ok(Decoded::new(one_level, bytes.len()))
        );

        assert_eq!(
            ListSerializer.serialize_with(Some(&two_levels), true, &shallow),
            Err(Error::DepthLimitExceeded(1))
        );
        let bytes = ListSerializer.serialize(Some(&two_levels), true).unwrap();
        assert_eq!(
            ListSerializer.deserialize_with(Some(&bytes), true, &shallow),
            Err(Error::DepthLimitExceeded(1))
        );
    }

    #[test]
    fn does_not_claim_its_items() {
        let dates = GValue::List(vec![GValue::Date(Date::EPOCH)]);
        assert!(ListSerializer.can_be_used_for(&dates));
        assert!(!ListSerializer.can_be_used_for(&GValue::Date(Date::EPOCH)));
    }
}
