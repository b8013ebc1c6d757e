//! Integration tests for lenses.
//!
//! Exercises property lenses, path composition through `flow`/`compose` and
//! `path_lens`, element-wise focus with `mapped`, and lenses over
//! user-defined associative containers.

use std::any::Any;
use std::collections::BTreeMap;

use pointfree::compose::{compose, flow};
use pointfree::equality::deep_equals;
use pointfree::optics::{Lens, lens, lens_prop, mapped, over, path_lens, set, view};
use pointfree::{Container, FpError, Function, Result, Value, values};
use rstest::{fixture, rstest};

// =============================================================================
// Fixtures
// =============================================================================

#[fixture]
fn rich() -> Value {
    Value::object([
        ("name", Value::from("Rich")),
        (
            "addresses",
            Value::array([
                Value::object([("street", "A"), ("city", "Austin")]),
                Value::object([("street", "B"), ("city", "Boston")]),
            ]),
        ),
    ])
}

fn prop(key: impl Into<Value>) -> Value {
    Value::from(lens_prop(key).unwrap())
}

fn upper() -> Function {
    Function::unary("upper", |text| Ok(Value::from(text.as_str().unwrap_or_default().to_uppercase())))
}

// =============================================================================
// Property Lenses
// =============================================================================

#[rstest]
fn view_reads_a_property(rich: Value) {
    assert_eq!(view().call2(prop("name"), rich).unwrap(), Value::from("Rich"));
}

#[rstest]
fn set_preserves_siblings_and_the_original(rich: Value) {
    let renamed = set().call(&[prop("name"), Value::from("Ana"), rich.clone()]).unwrap();

    assert_eq!(view().call2(prop("name"), renamed.clone()).unwrap(), Value::from("Ana"));
    assert_eq!(view().call2(prop("name"), rich.clone()).unwrap(), Value::from("Rich"));

    let original_addresses = view().call2(prop("addresses"), rich).unwrap();
    let renamed_addresses = view().call2(prop("addresses"), renamed).unwrap();
    assert_eq!(original_addresses, renamed_addresses);
}

#[rstest]
fn over_on_an_array_index_keeps_an_array() {
    let items = Value::array(["a", "b", "c"]);
    let updated = over().call(&[prop(1), Value::from(upper()), items.clone()]).unwrap();
    assert_eq!(updated.to_string(), r#"["a", "B", "c"]"#);
    assert_eq!(items.to_string(), r#"["a", "b", "c"]"#);
}

#[rstest]
fn setting_past_the_end_pads_with_undefined() {
    let items = Value::array([1]);
    let updated = lens_prop(2).unwrap().set(3, &items).unwrap();
    assert_eq!(updated.to_string(), "[1, undefined, 3]");
}

#[rstest]
fn reading_a_missing_property_is_undefined(rich: Value) {
    assert_eq!(lens_prop("age").unwrap().view(&rich).unwrap(), Value::Undefined);
}

#[rstest]
fn lens_prop_rejects_non_key_values() {
    let error = lens_prop(true).unwrap_err();
    assert!(matches!(error, FpError::InvalidArgument { operation: "lens_prop", .. }));
}

#[rstest]
fn writing_a_named_key_into_an_array_is_a_type_mismatch() {
    let error = lens_prop("name").unwrap().set(1, &Value::array([1])).unwrap_err();
    assert!(matches!(error, FpError::TypeMismatch { operation: "lens_prop", .. }));
}

#[rstest]
#[case(1e18)]
#[case(1e9)]
fn writing_far_past_the_end_of_an_array_is_rejected(#[case] index: f64) {
    let items = Value::array([0]);
    let error = lens_prop(index).unwrap().set(1, &items).unwrap_err();
    assert!(matches!(error, FpError::InvalidArgument { operation: "lens_prop", .. }));
    assert_eq!(items.to_string(), "[0]");
}

#[rstest]
fn writing_into_a_scalar_is_a_type_mismatch() {
    let error = lens_prop("name").unwrap().set(1, &Value::from(5)).unwrap_err();
    assert!(matches!(error, FpError::TypeMismatch { .. }));
}

#[rstest]
fn lens_from_functions() {
    let first = Function::unary("first", |pair| {
        Ok(pair.as_array().and_then(|items| items.get(0)).unwrap_or_default())
    });
    let with_first = Function::binary("with_first", |focus, pair| {
        let mut items = pair.as_array().map(|items| items.to_vec()).unwrap_or_default();
        if items.is_empty() {
            items.push(focus);
        } else {
            items[0] = focus;
        }
        Ok(Value::from(items))
    });
    let first_lens = lens().call2(first, with_first).unwrap();

    let pair = Value::array([1, 2]);
    assert_eq!(view().call2(first_lens.clone(), pair.clone()).unwrap(), Value::from(1));
    assert_eq!(set().call(&[first_lens, Value::from(9), pair]).unwrap().to_string(), "[9, 2]");
}

// =============================================================================
// Path Composition
// =============================================================================

#[rstest]
fn flow_of_lenses_reads_innermost_first(rich: Value) {
    let first_street = flow([prop("street"), prop(0), prop("addresses")]).unwrap();
    assert_eq!(view().call2(first_street, rich).unwrap(), Value::from("A"));
}

#[rstest]
fn compose_of_lenses_reads_outermost_first(rich: Value) {
    let first_street = compose([prop("addresses"), prop(0), prop("street")]).unwrap();
    assert_eq!(view().call2(first_street, rich).unwrap(), Value::from("A"));
}

#[rstest]
fn flow_and_path_lens_agree(rich: Value) {
    let through_flow = flow([prop("city"), prop(1), prop("addresses")]).unwrap();
    let through_path = path_lens(&Value::array(values!["addresses", 1, "city"])).unwrap();

    assert_eq!(view().call2(through_flow, rich.clone()).unwrap(), Value::from("Boston"));
    assert_eq!(through_path.view(&rich).unwrap(), Value::from("Boston"));
}

#[rstest]
fn a_deep_write_copies_only_the_path(rich: Value) {
    let first_street = path_lens(&Value::array(values!["addresses", 0, "street"])).unwrap();
    let moved = first_street.set("Z", &rich).unwrap();

    assert_eq!(first_street.view(&moved).unwrap(), Value::from("Z"));
    assert_eq!(first_street.view(&rich).unwrap(), Value::from("A"));

    let second = path_lens(&Value::array(values!["addresses", 1])).unwrap();
    assert_eq!(second.view(&moved).unwrap(), second.view(&rich).unwrap());
    assert_eq!(lens_prop("name").unwrap().view(&moved).unwrap(), Value::from("Rich"));
}

#[rstest]
fn reading_through_missing_intermediates_is_undefined(rich: Value) {
    let zip = path_lens(&Value::array(values!["employer", "address", "zip"])).unwrap();
    assert_eq!(zip.view(&rich).unwrap(), Value::Undefined);
    assert_eq!(zip.view(&Value::Null).unwrap(), Value::Undefined);
}

#[rstest]
fn writing_through_missing_intermediates_materializes_objects(rich: Value) {
    let zip = path_lens(&Value::array(values!["employer", "address", "zip"])).unwrap();
    let hired = zip.set("78701", &rich).unwrap();

    assert_eq!(zip.view(&hired).unwrap(), Value::from("78701"));
    let employer = lens_prop("employer").unwrap().view(&hired).unwrap();
    assert_eq!(employer.to_string(), r#"{address: {zip: "78701"}}"#);
    assert_eq!(lens_prop("name").unwrap().view(&hired).unwrap(), Value::from("Rich"));
}

#[rstest]
fn writing_a_partial_path_keeps_existing_deeper_siblings() {
    let settings = Value::object([(
        "settings",
        Value::object([("theme", Value::object([("color", "blue")]))]),
    )]);
    let font = path_lens(&Value::array(values!["settings", "theme", "font"])).unwrap();
    let updated = font.set("mono", &settings).unwrap();
    assert_eq!(
        updated.to_string(),
        r#"{settings: {theme: {color: "blue", font: "mono"}}}"#
    );
}

#[rstest]
fn an_empty_path_focuses_on_the_whole_structure(rich: Value) {
    let whole = path_lens(&Value::array(Vec::<Value>::new())).unwrap();
    assert_eq!(whole.view(&rich).unwrap(), rich);
    assert_eq!(whole.set(1, &rich).unwrap(), Value::from(1));
}

#[rstest]
#[case(Value::from("addresses.0.street"))]
#[case(Value::Undefined)]
#[case(Value::object([("0", "addresses")]))]
fn path_lens_requires_an_array(#[case] path: Value) {
    let error = path_lens(&path).unwrap_err();
    assert!(matches!(error, FpError::InvalidArgument { operation: "path_lens", .. }));
}

#[rstest]
fn composition_is_associative(rich: Value) {
    let addresses = lens_prop("addresses").unwrap();
    let first = lens_prop(0).unwrap();
    let street = lens_prop("street").unwrap();

    let left = addresses.compose(&first).compose(&street);
    let right = addresses.compose(&first.compose(&street));

    assert_eq!(left.view(&rich).unwrap(), right.view(&rich).unwrap());
    let left_set = left.set("Q", &rich).unwrap();
    let right_set = right.set("Q", &rich).unwrap();
    assert!(deep_equals(&left_set, &right_set).unwrap());
}

#[rstest]
fn mixing_lenses_and_functions_is_rejected() {
    let error = flow([prop("name"), Value::from(upper())]).unwrap_err();
    assert!(matches!(error, FpError::InvalidArgument { operation: "flow", .. }));
}

// =============================================================================
// mapped
// =============================================================================

#[rstest]
fn mapped_views_every_element(rich: Value) {
    let streets = flow([prop("street"), Value::from(mapped()), prop("addresses")]).unwrap();
    let result = view().call2(streets, rich).unwrap();
    assert_eq!(result.to_string(), r#"["A", "B"]"#);
}

#[rstest]
fn mapped_sets_every_element(rich: Value) {
    let cities = compose([prop("addresses"), Value::from(mapped()), prop("city")]).unwrap();
    let redacted = set().call(&[cities.clone(), Value::from("redacted"), rich.clone()]).unwrap();

    assert_eq!(
        view().call2(cities.clone(), redacted.clone()).unwrap().to_string(),
        r#"["redacted", "redacted"]"#
    );
    assert_eq!(
        view().call2(cities, rich).unwrap().to_string(),
        r#"["Austin", "Boston"]"#
    );
}

#[rstest]
fn mapped_over_keeps_order_and_length() {
    let names = Value::array([
        Value::object([("name", "ada")]),
        Value::object([("name", "grace")]),
        Value::object([("name", "edsger")]),
    ]);
    let each_name = mapped().compose(&lens_prop("name").unwrap());
    let shouted = each_name.over(&upper(), &names).unwrap();
    assert_eq!(
        each_name.view(&shouted).unwrap().to_string(),
        r#"["ADA", "GRACE", "EDSGER"]"#
    );
}

#[rstest]
fn mapped_treats_a_scalar_as_one_element() {
    let shouted = mapped().over(&upper(), &Value::from("solo")).unwrap();
    assert_eq!(shouted, Value::from("SOLO"));
}

// =============================================================================
// Associative Containers
// =============================================================================

#[derive(Debug, Clone, Default)]
struct Registry(BTreeMap<String, Value>);

impl Container for Registry {
    fn type_name(&self) -> &str {
        "Registry"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn get(&self, key: &Value) -> Option<Result<Value>> {
        Some(Ok(self.0.get(&key.to_string()).cloned().unwrap_or_default()))
    }

    fn set(&self, key: &Value, value: Value) -> Option<Result<Value>> {
        let mut entries = self.0.clone();
        entries.insert(key.to_string(), value);
        Some(Ok(Value::custom(Self(entries))))
    }
}

#[rstest]
fn lens_prop_reads_and_writes_associative_containers() {
    let registry = Value::custom(Registry::default());
    let port: Lens = lens_prop("port").unwrap();

    let updated = port.set(8080, &registry).unwrap();

    assert_eq!(port.view(&updated).unwrap(), Value::from(8080));
    assert_eq!(port.view(&registry).unwrap(), Value::Undefined);
    assert!(updated.downcast_custom::<Registry>().is_some());
}

#[rstest]
fn path_lens_descends_into_associative_containers() {
    let config = Value::object([("registry", Value::custom(Registry::default()))]);
    let port = path_lens(&Value::array(values!["registry", "port"])).unwrap();
    let updated = port.set(9090, &config).unwrap();
    assert_eq!(port.view(&updated).unwrap(), Value::from(9090));
}
