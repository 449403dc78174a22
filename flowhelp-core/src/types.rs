//! Value kind enumeration

use serde_json::Value;

/// Kind of a dynamic value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// JSON null
    Null,
    /// Boolean value
    Bool,
    /// Integer or floating point number
    Number,
    /// Text string
    String,
    /// Ordered list
    Array,
    /// Key/value mapping
    Object,
}

impl ValueKind {
    /// Classify a value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Type name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }

    /// Whether values of this kind can be iterated without being text
    pub fn is_iterable(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }
}
