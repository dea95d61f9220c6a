//! Domain model for the listening addresses offered during initial setup.
//!
//! This is the record a DNS filtering server returns when asked which ports
//! and interfaces it can bind its DNS and web servers to.

use crate::core::domain::entity::{
    Entity, FieldKind, FieldSpec, PlainRecord, Serializable,
    record::{read_checked, read_unchecked, write_field},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// Ports and network interfaces available for the DNS and web servers.
///
/// All fields are optional. A port of `0` is stored and reported as set,
/// which is distinct from the port being absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressesInfo {
    dns_port: Option<Value>,
    interfaces: Option<Value>,
    web_port: Option<Value>,
}

impl AddressesInfo {
    /// DNS server port (e.g. `53`).
    pub const DNS_PORT: FieldSpec = FieldSpec::new("dns_port", "dnsPort", FieldKind::Number);
    /// Interface listing, passed through as-is.
    pub const INTERFACES: FieldSpec =
        FieldSpec::new("interfaces", "interfaces", FieldKind::Opaque);
    /// Web interface port (e.g. `80`).
    pub const WEB_PORT: FieldSpec = FieldSpec::new("web_port", "webPort", FieldKind::Number);

    /// DNS server port, if set.
    pub fn dns_port(&self) -> Option<&Number> {
        as_number(&self.dns_port)
    }

    /// Network interfaces, if set. The shape is not interpreted here.
    pub fn interfaces(&self) -> Option<&Value> {
        self.interfaces.as_ref()
    }

    /// Web interface port, if set.
    pub fn web_port(&self) -> Option<&Number> {
        as_number(&self.web_port)
    }

    fn slots(&self) -> [(&'static FieldSpec, &Option<Value>); 3] {
        [
            (&Self::DNS_PORT, &self.dns_port),
            (&Self::INTERFACES, &self.interfaces),
            (&Self::WEB_PORT, &self.web_port),
        ]
    }
}

fn as_number(slot: &Option<Value>) -> Option<&Number> {
    match slot {
        Some(Value::Number(n)) => Some(n),
        _ => None,
    }
}

impl Serializable for AddressesInfo {
    fn to_record(&self) -> PlainRecord {
        let mut record = PlainRecord::new();
        for (spec, slot) in self.slots() {
            write_field(&mut record, spec, slot);
        }
        record
    }
}

impl Entity for AddressesInfo {
    const FIELDS: &'static [FieldSpec] = &[Self::DNS_PORT, Self::INTERFACES, Self::WEB_PORT];

    fn create(input: &PlainRecord) -> Self {
        Self {
            dns_port: read_checked(input, &Self::DNS_PORT),
            interfaces: read_checked(input, &Self::INTERFACES),
            web_port: read_checked(input, &Self::WEB_PORT),
        }
    }

    fn new_unchecked(input: &PlainRecord) -> Self {
        Self {
            dns_port: read_unchecked(input, &Self::DNS_PORT),
            interfaces: read_unchecked(input, &Self::INTERFACES),
            web_port: read_unchecked(input, &Self::WEB_PORT),
        }
    }
}

impl Serialize for AddressesInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddressesInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = PlainRecord::deserialize(deserializer)?;
        Ok(Self::create(&record))
    }
}
