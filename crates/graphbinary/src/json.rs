//! Diagnostic JSON view of [`GValue`].

use serde_json::{Map, Number, Value as JsonValue};

use crate::GValue;

impl GValue {
    /// Renders the value as JSON.
    ///
    /// Dates and timestamps become ISO-8601 strings, non-finite floats become
    /// `null`. Maps whose keys are all strings become objects; any other map
    /// becomes an array of `[key, value]` pairs.
    pub fn to_json(&self) -> JsonValue {
        match self {
            GValue::Null => JsonValue::Null,
            GValue::Int(i) => JsonValue::from(*i),
            GValue::Long(i) => JsonValue::from(*i),
            GValue::Short(i) => JsonValue::from(*i),
            GValue::Byte(i) => JsonValue::from(*i),
            GValue::Double(f) => float(*f),
            GValue::Float(f) => float(f64::from(*f)),
            GValue::Boolean(b) => JsonValue::Bool(*b),
            GValue::String(s) => JsonValue::String(s.clone()),
            GValue::Date(d) => JsonValue::String(d.to_string()),
            GValue::Timestamp(t) => JsonValue::String(t.to_string()),
            GValue::List(items) => JsonValue::Array(items.iter().map(GValue::to_json).collect()),
            GValue::Map(entries) => map(entries),
        }
    }
}

fn float(f: f64) -> JsonValue {
    Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
}

fn map(entries: &[(GValue, GValue)]) -> JsonValue {
    if entries.iter().all(|(k, _)| matches!(k, GValue::String(_))) {
        let mut object = Map::with_capacity(entries.len());
        for (key, value) in entries {
            if let GValue::String(key) = key {
                object.insert(key.clone(), value.to_json());
            }
        }
        return JsonValue::Object(object);
    }
    JsonValue::Array(
        entries
            .iter()
            .map(|(k, v)| JsonValue::Array(vec![k.to_json(), v.to_json()]))
            .collect(),
    )
}
