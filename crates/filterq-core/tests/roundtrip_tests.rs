//! Hand-written roundtrip tests: decode(encode(filter)) == filter.

use filterq_core::{decode, encode};
use serde_json::{json, Value};

/// Assert that encode → decode returns the same JSON value.
fn assert_roundtrip(filter: &Value) {
    let encoded = encode(filter);
    let decoded = decode(&encoded).expect("decode failed");
    assert_eq!(
        *filter, decoded,
        "Roundtrip failed:\n  input:   {filter}\n  encoded: {encoded}\n  output:  {decoded}"
    );
}

#[test]
fn roundtrip_scalars() {
    assert_roundtrip(&json!(null));
    assert_roundtrip(&json!(true));
    assert_roundtrip(&json!(false));
    assert_roundtrip(&json!(42));
    assert_roundtrip(&json!(-7));
    assert_roundtrip(&json!(3.14));
    assert_roundtrip(&json!("developer"));
}

#[test]
fn roundtrip_strings_with_reserved_characters() {
    assert_roundtrip(&json!("a b&c=d?e/f"));
    assert_roundtrip(&json!("{\"nested\":\"looking\"}"));
    assert_roundtrip(&json!("100%"));
    assert_roundtrip(&json!("plus+sign"));
    assert_roundtrip(&json!(""));
}

#[test]
fn roundtrip_unicode_strings() {
    assert_roundtrip(&json!("café"));
    assert_roundtrip(&json!("你好"));
}

#[test]
fn roundtrip_leaf_filter() {
    assert_roundtrip(&json!({"field": "role", "operator": "eq", "value": "developer"}));
}

#[test]
fn roundtrip_range_filter() {
    assert_roundtrip(&json!({"field": "age", "operator": "between", "value": [25, 30]}));
}

#[test]
fn roundtrip_deeply_nested_combinators() {
    assert_roundtrip(&json!({
        "or": [
            {"and": [
                {"field": "role", "operator": "eq", "value": "developer"},
                {"or": [
                    {"field": "age", "operator": "gt", "value": 25},
                    {"field": "age", "operator": "lt", "value": 18}
                ]}
            ]},
            {"field": "role", "operator": "eq", "value": "manager"}
        ]
    }));
}

#[test]
fn roundtrip_all_fixtures() {
    for (name, filter) in filterq_core::entries() {
        let encoded = encode(filter);
        let decoded = decode(&encoded).expect("fixture must roundtrip");
        assert_eq!(*filter, decoded, "fixture '{name}' failed to roundtrip");
    }
}
