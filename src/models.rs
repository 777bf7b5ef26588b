use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// A filterable record: anything that can resolve an attribute name to a
/// numeric value.
///
/// Resource descriptors arrive in different shapes depending on how far the
/// caller got with deserialization - a typed map, a raw `serde_json::Value`
/// object, or something domain-specific. Implementing this trait is the only
/// requirement the engine places on them.
pub trait NumericRecord {
    /// Resolve `name` to a numeric value, or `None` if the attribute is
    /// absent or not numeric-convertible. Absent attributes are treated as
    /// non-matching by the engine, never as errors.
    fn numeric_attribute(&self, name: &str) -> Option<f64>;
}

/// Best-effort numeric coercion for dynamic JSON values. Integers, floats
/// and numeric strings all resolve; everything else is treated as absent.
pub fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

impl NumericRecord for HashMap<String, f64> {
    fn numeric_attribute(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl NumericRecord for BTreeMap<String, f64> {
    fn numeric_attribute(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl NumericRecord for HashMap<String, Value> {
    fn numeric_attribute(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(coerce_numeric)
    }
}

impl NumericRecord for serde_json::Map<String, Value> {
    fn numeric_attribute(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(coerce_numeric)
    }
}

/// Non-object values have no attributes at all.
impl NumericRecord for Value {
    fn numeric_attribute(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(coerce_numeric)
    }
}

/// A resource descriptor as listed by an API: a display name plus whatever
/// attributes the service reports (ram, vcpus, disk, price, ...).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResourceInfo {
    pub name: String,

    #[serde(flatten)]
    pub attributes: HashMap<String, Value>, // Catch unknown fields
}

impl NumericRecord for ResourceInfo {
    fn numeric_attribute(&self, name: &str) -> Option<f64> {
        self.attributes.get(name).and_then(coerce_numeric)
    }
}
