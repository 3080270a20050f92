//! Typed serializers, one per value kind.
//!
//! Every kind implements [`TypeSerializer`], which only has to describe its
//! payload; the header, the null handling and the fully-qualified duality are
//! provided once on top of [`crate::framing`]. [`GraphBinarySerializer`] is the
//! object-safe view of the same serializers that the [`Dispatcher`] stores.

mod boolean;
mod date;
mod list;
mod map;
mod number;
mod string;
mod unspecified_null;

pub use boolean::BooleanSerializer;
pub use date::{DateSerializer, TimestampSerializer};
pub use list::ListSerializer;
pub use map::MapSerializer;
pub use number::{
    ByteSerializer, DoubleSerializer, FloatSerializer, IntSerializer, LongSerializer,
    ShortSerializer,
};
pub use string::StringSerializer;
pub use unspecified_null::UnspecifiedNullSerializer;

use graphbinary_buffers::{Reader, Writer};

use crate::error::{Error, Result};
use crate::framing::{self, Decoded};
use crate::{DataType, Dispatcher, GValue};

/// Encodes and decodes one value kind.
///
/// Implementors describe the payload (`write_value` / `read_value`), the
/// value that stands in for null, and how to recognise their kind inside a
/// [`GValue`]. Nested values (list items, map entries) are written through the
/// `dispatcher` argument.
pub trait TypeSerializer: Send + Sync {
    type Value;

    const DATA_TYPE: DataType;

    /// Value decoded from a null flag, and the payload written for a null in
    /// non-fully-qualified mode.
    fn null_value(&self) -> Self::Value;

    /// Exact-kind projection; never looks inside containers.
    fn extract<'v>(&self, value: &'v GValue) -> Option<&'v Self::Value>;

    fn into_gvalue(&self, value: Self::Value) -> GValue;

    fn write_value(
        &self,
        value: &Self::Value,
        writer: &mut Writer,
        dispatcher: &Dispatcher,
    ) -> Result<()>;

    /// Decodes one payload. Must check the remaining length explicitly and
    /// leave trailing bytes unread.
    fn read_value(&self, reader: &mut Reader<'_>, dispatcher: &Dispatcher) -> Result<Self::Value>;

    /// Whether `value` is exactly of this serializer's kind.
    fn can_be_used_for(&self, value: &GValue) -> bool {
        self.extract(value).is_some()
    }

    fn write(
        &self,
        value: Option<&Self::Value>,
        fully_qualified: bool,
        writer: &mut Writer,
        dispatcher: &Dispatcher,
    ) -> Result<()> {
        match value {
            Some(value) => {
                if fully_qualified {
                    framing::write_header(writer, Self::DATA_TYPE, true);
                }
                self.write_value(value, writer, dispatcher)
            }
            None if fully_qualified => {
                framing::write_header(writer, Self::DATA_TYPE, false);
                Ok(())
            }
            None => self.write_value(&self.null_value(), writer, dispatcher),
        }
    }

    /// Serializes `value`, `None` standing for null.
    fn serialize(&self, value: Option<&Self::Value>, fully_qualified: bool) -> Result<Vec<u8>> {
        self.serialize_with(value, fully_qualified, Dispatcher::global())
    }

    fn serialize_with(
        &self,
        value: Option<&Self::Value>,
        fully_qualified: bool,
        dispatcher: &Dispatcher,
    ) -> Result<Vec<u8>> {
        let mut writer = Writer::new();
        self.write(value, fully_qualified, &mut writer, dispatcher)?;
        Ok(writer.flush())
    }

    /// Decodes one value from the start of `buffer`.
    fn deserialize(
        &self,
        buffer: Option<&[u8]>,
        fully_qualified: bool,
    ) -> Result<Decoded<Self::Value>> {
        self.deserialize_with(buffer, fully_qualified, Dispatcher::global())
    }

    fn deserialize_with(
        &self,
        buffer: Option<&[u8]>,
        fully_qualified: bool,
        dispatcher: &Dispatcher,
    ) -> Result<Decoded<Self::Value>> {
        framing::read(
            buffer,
            Self::DATA_TYPE,
            fully_qualified,
            || self.null_value(),
            |reader| self.read_value(reader, dispatcher),
        )
    }
}

/// Object-safe form of [`TypeSerializer`] working on [`GValue`].
pub trait GraphBinarySerializer: Send + Sync {
    fn data_type(&self) -> DataType;

    fn accepts(&self, value: &GValue) -> bool;

    fn write_gvalue(
        &self,
        value: &GValue,
        fully_qualified: bool,
        writer: &mut Writer,
        dispatcher: &Dispatcher,
    ) -> Result<()>;

    fn read_gvalue(
        &self,
        buffer: Option<&[u8]>,
        fully_qualified: bool,
        dispatcher: &Dispatcher,
    ) -> Result<Decoded<GValue>>;
}

impl<S: TypeSerializer> GraphBinarySerializer for S {
    fn data_type(&self) -> DataType {
        S::DATA_TYPE
    }

    fn accepts(&self, value: &GValue) -> bool {
        self.can_be_used_for(value)
    }

    fn write_gvalue(
        &self,
        value: &GValue,
        fully_qualified: bool,
        writer: &mut Writer,
        dispatcher: &Dispatcher,
    ) -> Result<()> {
        match self.extract(value) {
            Some(inner) => self.write(Some(inner), fully_qualified, writer, dispatcher),
            None if value.is_null() => self.write(None, fully_qualified, writer, dispatcher),
            None => Err(Error::UnknownType(value.kind())),
        }
    }

    fn read_gvalue(
        &self,
        buffer: Option<&[u8]>,
        fully_qualified: bool,
        dispatcher: &Dispatcher,
    ) -> Result<Decoded<GValue>> {
        self.deserialize_with(buffer, fully_qualified, dispatcher)
            .map(|decoded| decoded.map(|value| self.into_gvalue(value)))
    }
}
