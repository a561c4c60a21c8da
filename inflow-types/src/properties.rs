use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A host-supplied key/value map of event parameters or user traits.
///
/// Keys are unique and insertion order is preserved through sanitization
/// and serialization.
pub type Properties = IndexMap<String, PropertyValue>;

/// One host-supplied parameter value.
///
/// `Timestamp` values are converted to integer epoch seconds by the
/// parameter sanitizer before leaving the engine; `Opaque` values have no
/// transport representation and are dropped by it.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A string value.
    String(String),

    /// An integer value.
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// A boolean value.
    Bool(bool),

    /// A date/timestamp value, sanitized to epoch seconds.
    Timestamp(DateTime<Utc>),

    /// A nested list of parameter values.
    List(Vec<PropertyValue>),

    /// A nested parameter map.
    Map(Properties),

    /// A value with no wire representation. Dropped during sanitization.
    Opaque,
}

impl PropertyValue {
    /// Whether this value has no transport representation.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque)
    }

    /// The variant name, for log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
            Self::Timestamp(_) => "Timestamp",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Opaque => "Opaque",
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Bool(b) => serializer.serialize_bool(*b),
            // Timestamps go on the wire as epoch seconds.
            Self::Timestamp(ts) => serializer.serialize_i64(ts.timestamp()),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Self::Opaque => serializer.serialize_unit(),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(items: Vec<PropertyValue>) -> Self {
        Self::List(items)
    }
}

impl From<Properties> for PropertyValue {
    fn from(map: Properties) -> Self {
        Self::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_serializes_as_epoch_seconds() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        let value = PropertyValue::Timestamp(ts);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!(ts.timestamp()));
    }

    #[test]
    fn map_preserves_insertion_order() {
        let mut props = Properties::new();
        props.insert("zeta".to_string(), PropertyValue::from(1));
        props.insert("alpha".to_string(), PropertyValue::from(2));
        let keys: Vec<_> = props.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
