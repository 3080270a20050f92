//! [`GValue`]: runtime values exchanged with the dispatcher.

use crate::{Date, Timestamp};

/// A value of any kind the codec knows how to classify.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GValue {
    #[default]
    Null,
    Int(i32),
    Long(i64),
    String(String),
    Date(Date),
    Timestamp(Timestamp),
    Double(f64),
    Float(f32),
    List(Vec<GValue>),
    /// Entries in insertion order; keys may be any value.
    Map(Vec<(GValue, GValue)>),
    Byte(i8),
    Short(i16),
    Boolean(bool),
}

impl GValue {
    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            GValue::Null => "null",
            GValue::Int(_) => "int",
            GValue::Long(_) => "long",
            GValue::String(_) => "string",
            GValue::Date(_) => "date",
            GValue::Timestamp(_) => "timestamp",
            GValue::Double(_) => "double",
            GValue::Float(_) => "float",
            GValue::List(_) => "list",
            GValue::Map(_) => "map",
            GValue::Byte(_) => "byte",
            GValue::Short(_) => "short",
            GValue::Boolean(_) => "boolean",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GValue::Null)
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for GValue {
                fn from(value: $ty) -> Self {
                    GValue::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    i32 => Int,
    i64 => Long,
    String => String,
    Date => Date,
    Timestamp => Timestamp,
    f64 => Double,
    f32 => Float,
    Vec<GValue> => List,
    Vec<(GValue, GValue)> => Map,
    i8 => Byte,
    i16 => Short,
    bool => Boolean,
}

impl From<&str> for GValue {
    fn from(value: &str) -> Self {
        GValue::String(value.to_owned())
    }
}

impl<T: Into<GValue>> From<Option<T>> for GValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(GValue::Null, Into::into)
    }
}
