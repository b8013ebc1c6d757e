//! Property access shared by `lens_prop`, `path_lens` and `pluck`.
//!
//! Reads never fail on a missing property or an absent structure; they yield
//! `Undefined`. Writes never touch their input: the container on the path is
//! shallow-cloned, the property replaced, and every sibling shared.

use std::rc::Rc;

use super::{Instance, Object, Value, reserve};
use crate::error::{FpError, Result};

/// Largest run of `Undefined` holes a write may open past the end of an array.
pub(crate) const MAX_ARRAY_PADDING: usize = 1 << 20;

/// A validated property key.
#[derive(Debug, Clone)]
pub(crate) struct PropertyKey {
    raw: Value,
    index: Option<usize>,
    name: Rc<str>,
}

impl PropertyKey {
    /// Accepts strings and numbers; canonical non-negative integers also index arrays.
    pub(crate) fn from_value(operation: &'static str, key: &Value) -> Result<Self> {
        match key {
            Value::Number(number) => {
                let index = key.expect_count(operation).ok();
                Ok(Self {
                    raw: key.clone(),
                    index,
                    name: Rc::from(Value::Number(*number).to_string()),
                })
            }
            Value::Str(name) => {
                let index = name
                    .parse::<usize>()
                    .ok()
                    .filter(|index| index.to_string() == name.as_ref());
                Ok(Self {
                    raw: key.clone(),
                    index,
                    name: Rc::clone(name),
                })
            }
            other => Err(FpError::invalid_argument(
                operation,
                format!("property keys must be strings or numbers, found {}", other.kind()),
            )),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    fn mismatch(&self, operation: &'static str, structure: &Value) -> FpError {
        FpError::TypeMismatch {
            operation,
            expected: "a numeric key for an array",
            found: format!("key {:?} on {}", self.name, structure.kind()),
        }
    }
}

/// Reads `key` from `structure`.
pub(crate) fn get_property(structure: &Value, key: &PropertyKey) -> Result<Value> {
    let value = match structure {
        Value::Object(object) => object.get(key.name()),
        Value::Instance(instance) => instance.fields().get(key.name()),
        Value::Array(array) if key.name() == "length" => Some(Value::from(array.len())),
        Value::Array(array) => key.index.and_then(|index| array.get(index)),
        Value::Str(text) if key.name() == "length" => Some(Value::from(text.chars().count())),
        Value::Str(text) => key
            .index
            .and_then(|index| text.chars().nth(index))
            .map(|character| Value::from(character.to_string())),
        Value::Custom(container) => container.get(&key.raw).transpose()?,
        _ => None,
    };
    Ok(value.unwrap_or_default())
}

/// Returns a copy of `structure` with `key` bound to `value`.
///
/// An absent structure is materialized as an empty object.
pub(crate) fn assoc_property(
    operation: &'static str,
    structure: &Value,
    key: &PropertyKey,
    value: Value,
) -> Result<Value> {
    match structure {
        Value::Object(object) => {
            let mut entries = object.borrow().clone();
            entries.insert(key.name().to_owned(), value);
            Ok(Value::Object(Object::from_map(entries)))
        }
        Value::Instance(instance) => {
            let mut fields = instance.fields().borrow().clone();
            fields.insert(key.name().to_owned(), value);
            Ok(Value::Instance(Instance::new(
                instance.class().clone(),
                Object::from_map(fields),
            )))
        }
        Value::Array(array) => {
            let index = key.index.ok_or_else(|| key.mismatch(operation, structure))?;
            let mut items = array.to_vec();
            if index >= items.len() {
                let padding = index - items.len();
                if padding > MAX_ARRAY_PADDING {
                    return Err(FpError::invalid_argument(
                        operation,
                        format!(
                            "index {index} is {padding} past the end of the array (at most {MAX_ARRAY_PADDING})"
                        ),
                    ));
                }
                reserve(operation, &mut items, padding + 1)?;
                items.resize(index + 1, Value::Undefined);
            }
            items[index] = value;
            Ok(Value::from(items))
        }
        Value::Custom(container) => container.set(&key.raw, value).unwrap_or_else(|| {
            Err(FpError::type_mismatch(
                operation,
                "an associative container",
                structure,
            ))
        }),
        Value::Undefined | Value::Null => {
            let object = Object::new();
            object.insert(key.name(), value);
            Ok(Value::Object(object))
        }
        other => Err(FpError::type_mismatch(
            operation,
            "an array, object or associative container",
            other,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(raw: impl Into<Value>) -> PropertyKey {
        PropertyKey::from_value("test", &raw.into()).unwrap()
    }

    #[rstest]
    #[case(Value::from(0), Some(0))]
    #[case(Value::from("3"), Some(3))]
    #[case(Value::from("03"), None)]
    #[case(Value::from(1.5), None)]
    #[case(Value::from("name"), None)]
    fn numeric_keys_resolve_to_indices(#[case] raw: Value, #[case] expected: Option<usize>) {
        assert_eq!(key(raw).index, expected);
    }

    #[rstest]
    fn non_scalar_keys_are_rejected() {
        let result = PropertyKey::from_value("lens_prop", &Value::array([1]));
        assert!(matches!(result, Err(FpError::InvalidArgument { operation: "lens_prop", .. })));
    }

    #[rstest]
    fn reads_through_absent_structures_yield_undefined() {
        assert_eq!(get_property(&Value::Undefined, &key("a")).unwrap(), Value::Undefined);
        assert_eq!(get_property(&Value::from(5), &key("a")).unwrap(), Value::Undefined);
    }

    #[rstest]
    fn strings_are_indexable() {
        assert_eq!(get_property(&Value::from("abc"), &key(1)).unwrap(), Value::from("b"));
        assert_eq!(get_property(&Value::from("abc"), &key("length")).unwrap(), Value::from(3));
    }

    #[rstest]
    fn assoc_pads_arrays() {
        let updated = assoc_property("test", &Value::array([1]), &key(2), Value::from(3)).unwrap();
        let items = updated.as_array().unwrap().to_vec();
        assert_eq!(items, vec![Value::from(1), Value::Undefined, Value::from(3)]);
    }

    #[rstest]
    #[case(Value::from(1e18))]
    #[case(Value::from(1e9))]
    #[case(Value::from("4000000000"))]
    fn assoc_refuses_to_pad_arrays_without_bound(#[case] raw: Value) {
        let result = assoc_property("test", &Value::array([0]), &key(raw), Value::from(1));
        assert!(matches!(result, Err(FpError::InvalidArgument { operation: "test", .. })));
    }

    #[rstest]
    fn assoc_pads_up_to_the_limit() {
        let index = MAX_ARRAY_PADDING + 1;
        let updated =
            assoc_property("test", &Value::array([0]), &key(Value::from(index)), Value::from(1)).unwrap();
        let array = updated.as_array().unwrap();
        assert_eq!(array.len(), index + 1);
        assert_eq!(array.get(index), Some(Value::from(1)));
    }

    #[rstest]
    fn assoc_materializes_missing_objects() {
        let updated = assoc_property("test", &Value::Undefined, &key("a"), Value::from(1)).unwrap();
        assert_eq!(updated.as_object().unwrap().get("a"), Some(Value::from(1)));
    }

    #[rstest]
    fn assoc_rejects_named_keys_on_arrays() {
        let result = assoc_property("test", &Value::array([1]), &key("name"), Value::from(1));
        assert!(matches!(result, Err(FpError::TypeMismatch { .. })));
    }

    #[rstest]
    fn assoc_rejects_scalars() {
        let result = assoc_property("test", &Value::from(true), &key("a"), Value::from(1));
        assert!(matches!(result, Err(FpError::TypeMismatch { .. })));
    }
}
