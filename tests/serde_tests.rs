//! Integration tests for JSON conversion.
//!
//! Data read from JSON can be focused with lenses and written back out.

#![cfg(feature = "serde")]

use pointfree::compose::identity;
use pointfree::equality::deep_equals;
use pointfree::optics::path_lens;
use pointfree::{Class, FpError, Object, Value, values};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn json_round_trips_through_a_lens_write() {
    let document = Value::from(json!({
        "name": "Rich",
        "addresses": [{"street": "A"}, {"street": "B"}],
    }));
    let street = path_lens(&Value::array(values!["addresses", 1, "street"])).unwrap();
    let moved = street.set("Z", &document).unwrap();

    let written = serde_json::Value::try_from(&moved).unwrap();
    assert_eq!(
        written,
        json!({"name": "Rich", "addresses": [{"street": "A"}, {"street": "Z"}]})
    );
}

#[rstest]
fn equal_documents_are_deep_equal() {
    let document = json!({"a": [1, 2, {"b": null}], "c": true});
    let left = Value::from(document.clone());
    let right = Value::from(document);
    assert!(deep_equals(&left, &right).unwrap());
}

#[rstest]
fn undefined_is_written_as_null() {
    let written = serde_json::Value::try_from(Value::array([Value::Undefined, Value::Null])).unwrap();
    assert_eq!(written, json!([null, null]));
}

#[rstest]
fn instances_are_written_as_their_fields() {
    let point = Class::declare("Point").instantiate([("x", 1), ("y", 2)]);
    assert_eq!(serde_json::Value::try_from(&point).unwrap(), json!({"x": 1, "y": 2}));
}

#[rstest]
fn serialize_goes_through_serde_json() {
    let value = Value::object([("ratio", Value::from(0.5)), ("count", Value::from(3))]);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"count":3,"ratio":0.5}"#);
}

#[rstest]
fn functions_have_no_json_form() {
    let value = Value::array([Value::from(identity())]);
    let error = serde_json::Value::try_from(&value).unwrap_err();
    assert!(matches!(error, FpError::TypeMismatch { operation: "to_json", .. }));
    assert!(serde_json::to_string(&value).is_err());
}

#[rstest]
fn cycles_are_reported() {
    let looped = Object::new();
    looped.insert("self", Value::Object(looped.clone()));
    let error = serde_json::Value::try_from(Value::Object(looped)).unwrap_err();
    assert_eq!(error, FpError::CycleDetected);
}
