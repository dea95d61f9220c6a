use crate::{AddressesInfo, Entity, MergeValue, Partial, PlainRecord, Serializable};
use serde_json::{Value, json};

fn record(value: Value) -> PlainRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

fn base() -> AddressesInfo {
    AddressesInfo::create(&record(json!({ "dns_port": 53, "web_port": 80 })))
}

/// A nested record standing in for a generated interface entity.
struct NetInterface {
    name: &'static str,
    mtu: u32,
}

impl Serializable for NetInterface {
    fn to_record(&self) -> PlainRecord {
        record(json!({ "name": self.name, "mtu": self.mtu }))
    }
}

#[test]
fn test_merge_overwrites_only_given_fields() {
    let merged = base().merge_deep_with(Partial::new().set("dnsPort", 9953));
    assert_eq!(
        merged.to_record(),
        record(json!({ "dns_port": 9953, "web_port": 80 }))
    );
}

#[test]
fn test_merge_leaves_original_untouched() {
    let original = base();
    let before = original.to_record();

    let _merged = original.merge_deep_with(Partial::new().set("dnsPort", 1).set("webPort", 2));
    let _replaced = original.update(&PlainRecord::new());

    assert_eq!(original.to_record(), before);
}

#[test]
fn test_merge_with_empty_partial_is_a_copy() {
    let original = base();
    assert_eq!(original.merge_deep_with(Partial::new()), original);
}

#[test]
fn test_merge_flattens_nested_entity() {
    let merged = base().merge_deep_with(
        Partial::new().set_entity("interfaces", NetInterface { name: "eth0", mtu: 1500 }),
    );
    assert_eq!(
        merged.interfaces(),
        Some(&json!({ "name": "eth0", "mtu": 1500 }))
    );
    assert_eq!(merged.to_record().len(), 3);
}

#[test]
fn test_merge_accepts_another_entity() {
    let nested = AddressesInfo::create(&record(json!({ "dns_port": 5353 })));
    let merged = AddressesInfo::default().merge_deep_with(
        Partial::new().set_entity("interfaces", nested),
    );
    assert_eq!(merged.interfaces(), Some(&json!({ "dns_port": 5353 })));
}

#[test]
fn test_merge_replaces_nested_value_shallowly() {
    let original = AddressesInfo::create(&record(json!({
        "interfaces": { "eth0": { "mtu": 1500 }, "lo": { "mtu": 65536 } }
    })));
    let merged = original.merge_deep_with(
        Partial::new().set("interfaces", json!({ "eth0": { "mtu": 9000 } })),
    );
    assert_eq!(
        merged.interfaces(),
        Some(&json!({ "eth0": { "mtu": 9000 } }))
    );
}

#[test]
fn test_merge_applies_type_guards() {
    let merged = base().merge_deep_with(Partial::new().set("dnsPort", "fifty-three"));
    assert_eq!(merged.dns_port(), None);
    assert_eq!(merged.to_record(), record(json!({ "web_port": 80 })));
    assert!(merged.validate().is_empty());
}

#[test]
fn test_merge_null_clears_field() {
    let merged = base().merge_deep_with(Partial::new().set("webPort", Value::Null));
    assert_eq!(merged.to_record(), record(json!({ "dns_port": 53 })));
}

#[test]
fn test_merge_ignores_unknown_and_wire_names() {
    let merged = base().merge_deep_with(
        Partial::new()
            .set("dns_port", 1)
            .set("bindHost", "0.0.0.0"),
    );
    assert_eq!(merged, base());
}

#[test]
fn test_merge_with_inserted_values() {
    let mut partial = Partial::new();
    partial.insert("webPort", MergeValue::from(json!(3000)));
    partial.insert("webPort", MergeValue::from(json!(3001)));

    let merged = base().merge_deep_with(partial);
    assert_eq!(
        merged.to_record(),
        record(json!({ "dns_port": 53, "web_port": 3001 }))
    );
}
