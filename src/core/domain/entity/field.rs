//! Static field metadata shared by all instances of an entity type.

use serde_json::Value;

/// The declared type of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON boolean.
    Boolean,
    /// A payload this layer passes through without interpretation.
    Opaque,
}

impl FieldKind {
    /// Returns true if `value` may be stored in a field of this kind.
    ///
    /// `null` is the plain-data spelling of "absent" and is never accepted.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Number => value.is_number(),
            FieldKind::String => value.is_string(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Opaque => !value.is_null(),
        }
    }

    /// Primitive kinds take part in validation; opaque fields do not.
    pub fn is_primitive(self) -> bool {
        !matches!(self, FieldKind::Opaque)
    }
}

/// One row of an entity's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the plain-data representation (e.g. `dns_port`).
    pub wire: &'static str,
    /// Key used for property access and merge input (e.g. `dnsPort`).
    pub accessor: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(wire: &'static str, accessor: &'static str, kind: FieldKind) -> Self {
        Self {
            wire,
            accessor,
            kind,
        }
    }
}

/// Looks up the wire name for an accessor name in a field table.
pub fn wire_name(fields: &[FieldSpec], accessor: &str) -> Option<&'static str> {
    fields
        .iter()
        .find(|spec| spec.accessor == accessor)
        .map(|spec| spec.wire)
}
