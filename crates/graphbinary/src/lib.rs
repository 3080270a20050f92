//! Typed GraphBinary codec.
//!
//! Values are framed as `type marker | value flag | payload`. Each value kind
//! has a typed serializer ([`serializers`]) that shares the framing and
//! validation rules in [`framing`]; the [`Dispatcher`] picks a serializer by
//! capability test when encoding and by type marker when decoding.
//!
//! # Example
//!
//! ```
//! use graphbinary::serializers::{DateSerializer, TypeSerializer};
//! use graphbinary::Date;
//!
//! let date: Date = "1969-12-31T23:59:59.999Z".parse().unwrap();
//! let bytes = DateSerializer.serialize(Some(&date), false).unwrap();
//! assert_eq!(bytes, [0xff; 8]);
//!
//! let decoded = DateSerializer.deserialize(Some(&bytes), false).unwrap();
//! assert_eq!(decoded.value, date);
//! assert_eq!(decoded.len, 8);
//! ```

mod constants;
mod dispatcher;
mod error;
mod json;
mod temporal;
mod value;

pub mod framing;
pub mod serializers;

pub use constants::{DataType, ValueFlag};
pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use error::{Error, Result};
pub use framing::Decoded;
pub use temporal::{Date, ParseInstantError, Timestamp};
pub use value::GValue;

pub use graphbinary_buffers::{BufferError, Reader, Writer};
