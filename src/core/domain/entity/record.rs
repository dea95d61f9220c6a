//! Helpers for reading and writing plain records.

use super::field::FieldSpec;
use serde_json::{Map, Value};
use tracing::debug;

/// The plain key-value representation of an entity, keyed by wire name.
pub type PlainRecord = Map<String, Value>;

/// Returns true for the values JavaScript treats as falsy:
/// `null`, `false`, numeric zero and the empty string.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Short name of a value's JSON type, for log and error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a field, keeping it only if it passes the field's type guard.
pub(crate) fn read_checked(input: &PlainRecord, spec: &FieldSpec) -> Option<Value> {
    let value = input.get(spec.wire)?;
    if spec.kind.accepts(value) {
        return Some(value.clone());
    }
    if !value.is_null() {
        debug!(
            field = spec.wire,
            expected = ?spec.kind,
            received = kind_name(value),
            "dropping mistyped field"
        );
    }
    None
}

/// Reads a field without the type guard. `null` still counts as absent.
pub(crate) fn read_unchecked(input: &PlainRecord, spec: &FieldSpec) -> Option<Value> {
    input.get(spec.wire).filter(|value| !value.is_null()).cloned()
}

/// Writes a field under its wire name if it is set.
pub(crate) fn write_field(out: &mut PlainRecord, spec: &FieldSpec, slot: &Option<Value>) {
    if let Some(value) = slot {
        out.insert(spec.wire.to_string(), value.clone());
    }
}
