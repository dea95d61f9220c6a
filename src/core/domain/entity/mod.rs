//! The contract implemented by every schema-shaped entity record.

pub mod field;
pub mod merge;
pub mod record;

pub use field::{FieldKind, FieldSpec};
pub use merge::{MergeValue, Partial};
pub use record::{PlainRecord, is_falsy};

use crate::core::domain::{
    config::ValidationConfig,
    error::{EntityError, EntityResult, ValidationError},
};
use record::kind_name;
use serde_json::Value;
use tracing::{debug, trace};

/// A value that can flatten itself to plain data.
///
/// Entities implement it, and it is what lets a nested entity be passed to
/// [`Entity::merge_deep_with`] in place of raw data.
pub trait Serializable: Send + Sync {
    /// Returns the plain representation, keyed by wire name.
    ///
    /// Unset fields are omitted rather than written as `null`.
    fn to_record(&self) -> PlainRecord;
}

/// An immutable record with a fixed set of optional fields.
///
/// Implementors provide the field table and the two constructors; conversion,
/// validation and both update flavours are derived from those.
///
/// # Examples
///
/// ```
/// use entity_record::{AddressesInfo, Entity, Partial, Serializable};
/// use serde_json::json;
///
/// let info = AddressesInfo::from_value(json!({ "dns_port": 53, "web_port": 80 })).unwrap();
/// let moved = info.merge_deep_with(Partial::new().set("dnsPort", 9953));
///
/// assert_eq!(moved.to_record().get("dns_port"), Some(&json!(9953)));
/// assert_eq!(info.to_record().get("dns_port"), Some(&json!(53)));
/// assert!(moved.validate().is_empty());
/// ```
pub trait Entity: Serializable + Sized {
    /// Field table in declared order. Validation reports in this order.
    const FIELDS: &'static [FieldSpec];

    /// Builds a record, keeping only values that pass their field's type
    /// guard. Never fails; unknown keys are ignored.
    fn create(input: &PlainRecord) -> Self;

    /// Builds a record without type guards.
    ///
    /// Every known, non-null field is stored as given. Use [`Entity::validate`]
    /// to find out whether the result is well typed.
    fn new_unchecked(input: &PlainRecord) -> Self;

    /// Builds a record from arbitrary JSON.
    ///
    /// # Errors
    /// Returns `EntityError::Decode` if `value` is not an object.
    fn from_value(value: Value) -> EntityResult<Self> {
        match value {
            Value::Object(record) => Ok(Self::create(&record)),
            other => Err(EntityError::Decode(format!(
                "expected an object, found {}",
                kind_name(&other)
            ))),
        }
    }

    /// Translates an accessor name (e.g. `dnsPort`) to its wire name.
    fn wire_name(accessor: &str) -> Option<&'static str> {
        field::wire_name(Self::FIELDS, accessor)
    }

    /// Returns the wire names of fields whose stored value has the wrong
    /// type, using the default [`ValidationConfig`].
    ///
    /// Unset and falsy values always pass, so `create(&{}).validate()` is
    /// empty.
    fn validate(&self) -> Vec<&'static str> {
        self.validate_with(&ValidationConfig::default())
    }

    fn validate_with(&self, config: &ValidationConfig) -> Vec<&'static str> {
        let record = self.to_record();
        Self::FIELDS
            .iter()
            .filter(|spec| spec.kind.is_primitive())
            .filter(|spec| match record.get(spec.wire) {
                None => false,
                Some(value) if config.falsy_is_absent && is_falsy(value) => false,
                Some(value) => !spec.kind.accepts(value),
            })
            .map(|spec| spec.wire)
            .collect()
    }

    /// Like [`Entity::validate`], but as a `Result`.
    ///
    /// # Errors
    /// Returns `EntityError::Validation` listing the failing fields.
    fn ensure_valid(&self) -> EntityResult<()> {
        let fields = self.validate();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields { fields }.into())
        }
    }

    /// Replaces the record wholesale. The current fields are not consulted.
    fn update(&self, input: &PlainRecord) -> Self {
        Self::create(input)
    }

    /// Overlays `partial` on the current record and builds a new one.
    ///
    /// Nested entities are flattened one level; the overlay itself is
    /// shallow, so a key in `partial` replaces the whole wire value. Merged
    /// values go through the same type guards as [`Entity::create`], and a
    /// raw `null` clears the field. Accessor names missing from the field
    /// table are ignored.
    fn merge_deep_with(&self, partial: Partial) -> Self {
        let mut merged = self.to_record();
        for (accessor, value) in partial.into_entries() {
            match Self::wire_name(&accessor) {
                Some(wire) => {
                    merged.insert(wire.to_string(), value.into_value());
                }
                None => debug!(accessor = %accessor, "ignoring unknown field in merge"),
            }
        }
        trace!(fields = merged.len(), "merged record");
        Self::create(&merged)
    }
}
