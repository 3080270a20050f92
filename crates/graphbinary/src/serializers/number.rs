//! Fixed-width numeric serializers.

use graphbinary_buffers::{Reader, Writer};

use super::TypeSerializer;
use crate::error::Result;
use crate::framing;
use crate::{DataType, Dispatcher, GValue};

macro_rules! fixed_width_serializer {
    (
        $(#[$meta:meta])*
        $name:ident: $value:ty, $variant:ident, $data_type:expr, $width:expr, $null:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl TypeSerializer for $name {
            type Value = $value;

            const DATA_TYPE: DataType = $data_type;

            fn null_value(&self) -> $value {
                $null
            }

            fn extract<'v>(&self, value: &'v GValue) -> Option<&'v $value> {
                match value {
                    GValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn into_gvalue(&self, value: $value) -> GValue {
                GValue::$variant(value)
            }

            fn write_value(&self, value: &$value, writer: &mut Writer, _: &Dispatcher) -> Result<()> {
                BigEndian::write(*value, writer);
                Ok(())
            }

            fn read_value(&self, reader: &mut Reader<'_>, _: &Dispatcher) -> Result<$value> {
                framing::check_length(reader, Self::DATA_TYPE, $width)?;
                Ok(<$value as BigEndian>::read(reader)?)
            }
        }
    };
}

trait BigEndian: Sized {
    fn read(reader: &mut Reader<'_>) -> std::result::Result<Self, graphbinary_buffers::BufferError>;
    fn write(self, writer: &mut Writer);
}

macro_rules! big_endian {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl BigEndian for $ty {
                fn read(reader: &mut Reader<'_>) -> std::result::Result<Self, graphbinary_buffers::BufferError> {
                    reader.$method()
                }

                fn write(self, writer: &mut Writer) {
                    writer.$method(self);
                }
            }
        )*
    };
}

big_endian! {
    i8 => i8,
    i16 => i16,
    i32 => i32,
    i64 => i64,
    f32 => f32,
    f64 => f64,
}

fixed_width_serializer!(
    /// 4-byte signed integer.
    IntSerializer: i32, Int, DataType::INT, 4, 0
);
fixed_width_serializer!(
    /// 8-byte signed integer.
    LongSerializer: i64, Long, DataType::LONG, 8, 0
);
fixed_width_serializer!(
    /// 2-byte signed integer.
    ShortSerializer: i16, Short, DataType::SHORT, 2, 0
);
fixed_width_serializer!(
    /// 1-byte signed integer.
    ByteSerializer: i8, Byte, DataType::BYTE, 1, 0
);
fixed_width_serializer!(
    /// 8-byte IEEE-754 double.
    DoubleSerializer: f64, Double, DataType::DOUBLE, 8, 0.0
);
fixed_width_serializer!(
    /// 4-byte IEEE-754 float.
    FloatSerializer: f32, Float, DataType::FLOAT, 4, 0.0
);
