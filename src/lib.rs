//! Immutable, schema-shaped entity records.
//!
//! An entity holds a fixed set of optional fields and supports:
//! - Construction from a plain key-value record, dropping mistyped values
//! - Flattening back to a plain record that omits unset fields
//! - Advisory type validation
//! - Full replacement and merge updates that always produce a new instance
//!
//! # Examples
//!
//! ```
//! use entity_record::{AddressesInfo, Entity, Partial, Serializable};
//! use serde_json::json;
//!
//! # fn main() -> entity_record::EntityResult<()> {
//! let info = AddressesInfo::from_value(json!({ "dns_port": 53, "web_port": 80 }))?;
//! info.ensure_valid()?;
//!
//! let updated = info.merge_deep_with(Partial::new().set("webPort", 3000));
//! assert_eq!(
//!     serde_json::Value::Object(updated.to_record()),
//!     json!({ "dns_port": 53, "web_port": 3000 })
//! );
//! # Ok(())
//! # }
//! ```

mod core;

pub use crate::core::domain::{
    config::ValidationConfig,
    entity::{
        Entity, FieldKind, FieldSpec, MergeValue, Partial, PlainRecord, Serializable, is_falsy,
    },
    error::{EntityError, EntityResult, ValidationError},
    model::addresses_info::AddressesInfo,
};
