//! Date and timestamp serializers.
//!
//! Payload: 8 bytes, big-endian two's-complement milliseconds since the epoch.
//! A null date decodes to the epoch, and a null written without a header is
//! written as the epoch, so `null -> epoch` is stable across round-trips.

use graphbinary_buffers::{Reader, Writer};

use super::TypeSerializer;
use crate::error::Result;
use crate::framing;
use crate::{DataType, Date, Dispatcher, GValue, Timestamp};

const INSTANT_WIDTH: usize = 8;

#[derive(Debug, Default, Clone, Copy)]
pub struct DateSerializer;

impl TypeSerializer for DateSerializer {
    type Value = Date;

    const DATA_TYPE: DataType = DataType::DATE;

    fn null_value(&self) -> Date {
        Date::EPOCH
    }

    fn extract<'v>(&self, value: &'v GValue) -> Option<&'v Date> {
        match value {
            GValue::Date(date) => Some(date),
            _ => None,
        }
    }

    fn into_gvalue(&self, value: Date) -> GValue {
        GValue::Date(value)
    }

    fn write_value(&self, value: &Date, writer: &mut Writer, _: &Dispatcher) -> Result<()> {
        writer.i64(value.as_millis());
        Ok(())
    }

    fn read_value(&self, reader: &mut Reader<'_>, _: &Dispatcher) -> Result<Date> {
        framing::check_length(reader, Self::DATA_TYPE, INSTANT_WIDTH)?;
        Ok(Date::from_millis(reader.i64()?))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampSerializer;

impl TypeSerializer for TimestampSerializer {
    type Value = Timestamp;

    const DATA_TYPE: DataType = DataType::TIMESTAMP;

    fn null_value(&self) -> Timestamp {
        Timestamp::EPOCH
    }

    fn extract<'v>(&self, value: &'v GValue) -> Option<&'v Timestamp> {
        match value {
            GValue::Timestamp(timestamp) => Some(timestamp),
            _ => None,
        }
    }

    fn into_gvalue(&self, value: Timestamp) -> GValue {
        GValue::Timestamp(value)
    }

    fn write_value(&self, value: &Timestamp, writer: &mut Writer, _: &Dispatcher) -> Result<()> {
        writer.i64(value.as_millis());
        Ok(())
    }

    fn read_value(&self, reader: &mut Reader<'_>, _: &Dispatcher) -> Result<Timestamp> {
        framing::check_length(reader, Self::DATA_TYPE, INSTANT_WIDTH)?;
        Ok(Timestamp::from_millis(reader.i64()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::framing::Decoded;

    const ZEROES: [u8; 8] = [0x00; 8];

    #[test]
    fn null_is_header_only_when_qualified() {
        assert_eq!(DateSerializer.serialize(None, true), Ok(vec![0x04, 0x01]));
        assert_eq!(DateSerializer.serialize(None, false), Ok(ZEROES.to_vec()));
    }

    #[test]
    fn null_flag_decodes_to_epoch() {
        assert_eq!(
            DateSerializer.deserialize(Some(&[0x04, 0x01]), true),
            Ok(Decoded::new(Date::EPOCH, 2))
        );
    }

    #[test]
    fn boundary_instants() {
        let epoch: Date = "1970-01-01T00:00:00.000Z".parse().unwrap();
        let before: Date = "1969-12-31T23:59:59.999Z".parse().unwrap();
        assert_eq!(DateSerializer.serialize(Some(&epoch), false), Ok(ZEROES.to_vec()));
        assert_eq!(DateSerializer.serialize(Some(&before), false), Ok(vec![0xff; 8]));
        assert_eq!(
            DateSerializer.serialize(Some(&before), true),
            Ok(vec![0x04, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff])
        );
    }

    #[test]
    fn short_payload_is_rejected() {
        assert_eq!(
            DateSerializer.deserialize(Some(&[0x04, 0x00, 0, 0, 0, 0, 0, 0, 0]), true),
            Err(Error::UnexpectedValueLength {
                data_type: DataType::DATE,
                expected: 8,
                remaining: 7
            })
        );
    }

    #[test]
    fn timestamp_uses_its_own_marker() {
        let ts = Timestamp::from_millis(1);
        assert_eq!(
            TimestampSerializer.serialize(Some(&ts), true),
            Ok(vec![0x05, 0x00, 0, 0, 0, 0, 0, 0, 0, 1])
        );
        assert_eq!(
            DateSerializer.deserialize(Some(&[0x05, 0x00, 0, 0, 0, 0, 0, 0, 0, 1]), true),
            Err(Error::UnexpectedTypeCode {
                expected: DataType::DATE,
                actual: 0x05
            })
        );
        assert!(!DateSerializer.can_be_used_for(&GValue::Timestamp(ts)));
        assert!(TimestampSerializer.can_be_used_for(&GValue::Timestamp(ts)));
    }
}
