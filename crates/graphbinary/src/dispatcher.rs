//! Selects the serializer for a value or for an encoded type marker.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, OnceLock};

use graphbinary_buffers::{Reader, Writer};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::framing::Decoded;
use crate::serializers::{
    BooleanSerializer, ByteSerializer, DateSerializer, DoubleSerializer, FloatSerializer,
    GraphBinarySerializer, IntSerializer, ListSerializer, LongSerializer, MapSerializer,
    ShortSerializer, StringSerializer, TimestampSerializer, UnspecifiedNullSerializer,
};
use crate::{DataType, GValue};

/// Ordered registry of serializers.
///
/// Encoding picks the first serializer (in registration order) whose
/// capability test accepts the value. Decoding looks the leading type marker
/// up; since each kind owns exactly one marker, a value that round-trips is
/// handled by the same serializer both ways.
///
/// List and map items go through [`Dispatcher::nested`], which counts the
/// nesting level and stops at the configured maximum.
///
/// ```
/// use graphbinary::{Date, Dispatcher, GValue};
///
/// let dispatcher = Dispatcher::new();
/// let bytes = dispatcher.serialize(&GValue::Date(Date::from_millis(-1)), true).unwrap();
/// assert_eq!(bytes, [0x04, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
///
/// let decoded = dispatcher.deserialize(Some(&bytes)).unwrap();
/// assert_eq!(decoded.value, GValue::Date(Date::from_millis(-1)));
/// assert_eq!(decoded.len, 10);
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    depth: usize,
}

struct Registry {
    serializers: Vec<Arc<dyn GraphBinarySerializer>>,
    by_code: HashMap<u8, usize>,
    max_depth: usize,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("data_types", &self.data_types().collect::<Vec<_>>())
            .field("max_depth", &self.registry.max_depth)
            .field("depth", &self.depth)
            .finish()
    }
}

impl Dispatcher {
    /// Nesting limit used unless the builder sets another one.
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// A dispatcher with every built-in kind registered.
    pub fn new() -> Self {
        Self::index(default_serializers(), Self::DEFAULT_MAX_DEPTH)
    }

    /// Shared dispatcher with the built-in kinds, built on first use.
    pub fn global() -> &'static Dispatcher {
        static GLOBAL: OnceLock<Dispatcher> = OnceLock::new();
        GLOBAL.get_or_init(Dispatcher::new)
    }

    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    fn index(serializers: Vec<Arc<dyn GraphBinarySerializer>>, max_depth: usize) -> Self {
        let mut by_code = HashMap::with_capacity(serializers.len());
        for (i, serializer) in serializers.iter().enumerate() {
            by_code.entry(serializer.data_type().code()).or_insert(i);
        }
        Self {
            registry: Arc::new(Registry {
                serializers,
                by_code,
                max_depth,
            }),
            depth: 0,
        }
    }

    /// Type markers in priority order.
    pub fn data_types(&self) -> impl Iterator<Item = DataType> + '_ {
        self.registry.serializers.iter().map(|s| s.data_type())
    }

    pub fn max_depth(&self) -> usize {
        self.registry.max_depth
    }

    /// Nesting level of the values this dispatcher handles; 0 at the top.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The same registry one nesting level deeper, for the items of a list
    /// or map.
    ///
    /// Fails with [`Error::DepthLimitExceeded`] once [`max_depth`] levels
    /// are in use.
    ///
    /// [`max_depth`]: Dispatcher::max_depth
    pub fn nested(&self) -> Result<Dispatcher> {
        if self.depth >= self.registry.max_depth {
            debug!("nesting limit of {} levels reached", self.registry.max_depth);
            return Err(Error::DepthLimitExceeded(self.registry.max_depth));
        }
        Ok(Dispatcher {
            registry: Arc::clone(&self.registry),
            depth: self.depth + 1,
        })
    }

    /// First registered serializer whose capability test accepts `value`.
    pub fn serializer_for(&self, value: &GValue) -> Result<&dyn GraphBinarySerializer> {
        match self.registry.serializers.iter().find(|s| s.accepts(value)) {
            Some(serializer) => {
                trace!("{} value -> {}", value.kind(), serializer.data_type());
                Ok(serializer.as_ref())
            }
            None => {
                debug!("no serializer accepts {} value", value.kind());
                Err(Error::UnknownType(value.kind()))
            }
        }
    }

    /// Serializer registered for `code`.
    pub fn serializer_for_code(&self, code: u8) -> Result<&dyn GraphBinarySerializer> {
        match self.registry.by_code.get(&code) {
            Some(&i) => {
                let serializer = self.registry.serializers[i].as_ref();
                trace!("type code {code:#04x} -> {}", serializer.data_type());
                Ok(serializer)
            }
            None => {
                debug!("no serializer registered for type code {code:#04x}");
                Err(Error::UnregisteredTypeCode(code))
            }
        }
    }

    pub fn serialize(&self, value: &GValue, fully_qualified: bool) -> Result<Vec<u8>> {
        let mut writer = Writer::new();
        self.write(value, fully_qualified, &mut writer)?;
        Ok(writer.flush())
    }

    /// Appends the encoding of `value` to `writer`.
    pub fn write(&self, value: &GValue, fully_qualified: bool, writer: &mut Writer) -> Result<()> {
        self.serializer_for(value)?
            .write_gvalue(value, fully_qualified, writer, self)
    }

    /// Decodes one fully-qualified value from the start of `buffer`.
    ///
    /// The type marker is peeked, not consumed: the selected serializer
    /// validates the whole header itself.
    pub fn deserialize(&self, buffer: Option<&[u8]>) -> Result<Decoded<GValue>> {
        let bytes = buffer.ok_or(Error::MissingBuffer)?;
        let code = *bytes.first().ok_or(Error::EmptyBuffer)?;
        self.serializer_for_code(code)?
            .read_gvalue(Some(bytes), true, self)
    }

    /// Decodes one fully-qualified value at the cursor and advances past it.
    pub fn read(&self, reader: &mut Reader<'_>) -> Result<GValue> {
        let decoded = self.deserialize(Some(reader.rest()))?;
        reader.skip(decoded.len)?;
        Ok(decoded.value)
    }

    /// Decodes consecutive fully-qualified values until `buffer` is exhausted.
    pub fn deserialize_all(&self, buffer: &[u8]) -> Result<Vec<GValue>> {
        let mut reader = Reader::new(buffer);
        let mut values = Vec::new();
        while reader.remaining() > 0 {
            values.push(self.read(&mut reader)?);
        }
        Ok(values)
    }
}

/// Builds a [`Dispatcher`] with a custom set of serializers.
///
/// Registration order is priority order for encoding.
pub struct DispatcherBuilder {
    serializers: Vec<Arc<dyn GraphBinarySerializer>>,
    max_depth: usize,
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self {
            serializers: Vec::new(),
            max_depth: Dispatcher::DEFAULT_MAX_DEPTH,
        }
    }
}

impl DispatcherBuilder {
    pub fn register<S: GraphBinarySerializer + 'static>(mut self, serializer: S) -> Self {
        self.serializers.push(Arc::new(serializer));
        self
    }

    /// Appends every built-in serializer.
    pub fn with_defaults(mut self) -> Self {
        self.serializers.extend(default_serializers());
        self
    }

    /// Deepest list/map nesting accepted in either direction.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Fails with [`Error::DuplicateTypeCode`] if two serializers share a
    /// type marker.
    pub fn build(self) -> Result<Dispatcher> {
        let mut seen = HashSet::with_capacity(self.serializers.len());
        for serializer in &self.serializers {
            let data_type = serializer.data_type();
            if !seen.insert(data_type.code()) {
                return Err(Error::DuplicateTypeCode(data_type));
            }
        }
        Ok(Dispatcher::index(self.serializers, self.max_depth))
    }
}

fn default_serializers() -> Vec<Arc<dyn GraphBinarySerializer>> {
    let serializers: [Arc<dyn GraphBinarySerializer>; 13] = [
        Arc::new(UnspecifiedNullSerializer),
        Arc::new(IntSerializer),
        Arc::new(LongSerializer),
        Arc::new(DoubleSerializer),
        Arc::new(FloatSerializer),
        Arc::new(ShortSerializer),
        Arc::new(ByteSerializer),
        Arc::new(BooleanSerializer),
        Arc::new(StringSerializer),
        Arc::new(DateSerializer),
        Arc::new(TimestampSerializer),
        Arc::new(ListSerializer),
        Arc::new(MapSerializer),
    ];
    serializers.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Date;

    #[test]
    fn default_registry_is_consistent() {
        let dispatcher = Dispatcher::new();
        for data_type in dispatcher.data_types() {
            let serializer = dispatcher.serializer_for_code(data_type.code()).unwrap();
            assert_eq!(serializer.data_type(), data_type);
        }
        assert!(Dispatcher::builder().with_defaults().build().is_ok());
    }

    #[test]
    fn duplicate_markers_are_rejected() {
        let result = Dispatcher::builder()
            .register(DateSerializer)
            .register(DateSerializer)
            .build();
        assert_eq!(result.err(), Some(Error::DuplicateTypeCode(DataType::DATE)));
    }

    #[test]
    fn missing_serializer_errors() {
        let dispatcher = Dispatcher::builder().register(DateSerializer).build().unwrap();
        assert_eq!(
            dispatcher.serialize(&GValue::Int(1), true),
            Err(Error::UnknownType("int"))
        );
        assert_eq!(
            dispatcher.deserialize(Some(&[0x01, 0x00, 0, 0, 0, 1])).err(),
            Some(Error::UnregisteredTypeCode(0x01))
        );
        assert_eq!(
            dispatcher.serialize(&GValue::Date(Date::EPOCH), false),
            Ok(vec![0; 8])
        );
    }

    #[test]
    fn nested_shares_registry_and_counts_levels() {
        let dispatcher = Dispatcher::builder()
            .with_defaults()
            .max_depth(2)
            .build()
            .unwrap();
        assert_eq!(dispatcher.depth(), 0);
        let one = dispatcher.nested().unwrap();
        let two = one.nested().unwrap();
        assert_eq!((one.depth(), two.depth(), two.max_depth()), (1, 2, 2));
        assert!(Arc::ptr_eq(&dispatcher.registry, &two.registry));
        assert_eq!(two.nested().err(), Some(Error::DepthLimitExceeded(2)));
    }

    #[test]
    fn default_depth_limit() {
        assert_eq!(Dispatcher::new().max_depth(), Dispatcher::DEFAULT_MAX_DEPTH);
        assert_eq!(
            Dispatcher::builder().build().unwrap().max_depth(),
            Dispatcher::DEFAULT_MAX_DEPTH
        );
    }

    #[test]
    fn empty_inputs_fail_before_lookup() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.deserialize(None).err(), Some(Error::MissingBuffer));
        assert_eq!(dispatcher.deserialize(Some(&[])).err(), Some(Error::EmptyBuffer));
    }
}
