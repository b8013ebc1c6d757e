//! Sequence helpers.

use crate::compose::{curry1, curry2, curry3};
use crate::control::Maybe;
use crate::error::{FpError, Result};
use crate::value::{Function, Object, PropertyKey, Value, reserve};

fn characters(text: &str) -> Vec<Value> {
    text.chars().map(|character| Value::from(character.to_string())).collect()
}

/// Elements of an array, or characters of a string. Absent values are empty.
fn elements(operation: &'static str, target: &Value) -> Result<Vec<Value>> {
    match target {
        Value::Array(array) => Ok(array.to_vec()),
        Value::Str(text) => Ok(characters(text)),
        Value::Undefined | Value::Null => Ok(Vec::new()),
        other => Err(FpError::type_mismatch(operation, "an array or string", other)),
    }
}

/// `head(items)`: the first element as a [`Maybe`].
pub fn head() -> Function {
    curry1("head", |items| {
        Ok(Maybe::of(elements("head", &items)?.into_iter().next()).into())
    })
}

/// `last(items)`: the last element as a [`Maybe`].
pub fn last() -> Function {
    curry1("last", |items| {
        Ok(Maybe::of(elements("last", &items)?.pop()).into())
    })
}

/// `tail(items)`: everything but the first element.
///
/// Strings stay strings.
pub fn tail() -> Function {
    curry1("tail", |items| match &items {
        Value::Str(text) => Ok(Value::from(text.chars().skip(1).collect::<String>())),
        other => Ok(Value::from(
            elements("tail", other)?.into_iter().skip(1).collect::<Vec<_>>(),
        )),
    })
}

/// `unwrap(items)`: flattens one level; non-array elements are kept as is.
pub fn unwrap() -> Function {
    curry1("unwrap", |items| {
        let mut flat = Vec::new();
        for item in items.expect_array("unwrap")?.to_vec() {
            match item {
                Value::Array(inner) => flat.extend(inner.to_vec()),
                other => flat.push(other),
            }
        }
        Ok(Value::from(flat))
    })
}

/// `array_wrap(value)`: `[value]`.
pub fn array_wrap() -> Function {
    curry1("array_wrap", |value| Ok(Value::array([value])))
}

/// `times(function)(count)`: `[function(0), .., function(count - 1)]`.
pub fn times() -> Function {
    curry2("times", |function, count| {
        let function = function.expect_function("times")?;
        let count = count.expect_count("times")?;
        let mut results = Vec::new();
        reserve("times", &mut results, count)?;
        for index in 0..count {
            results.push(function.call1(index)?);
        }
        Ok(Value::from(results))
    })
}

/// `x_prod(left)(right)`: every `[l, r]` pair in row-major order.
pub fn x_prod() -> Function {
    curry2("x_prod", |left, right| {
        let right = right.expect_array("x_prod")?.to_vec();
        let pairs = left
            .expect_array("x_prod")?
            .to_vec()
            .into_iter()
            .flat_map(|first| {
                right
                    .iter()
                    .map(move |second| Value::array([first.clone(), second.clone()]))
            })
            .collect::<Vec<_>>();
        Ok(Value::from(pairs))
    })
}

/// `zip_by(function)(left)(right)`: combines elements pairwise up to the
/// shorter length.
///
/// An array result is spliced into the output; any other result is appended.
/// Neither input is modified.
///
/// # Examples
///
/// ```
/// use pointfree::collection::zip_by;
/// use pointfree::{Function, Value};
///
/// let pair = Function::binary("pair", |left, right| Ok(Value::array([Value::array([left, right])])));
/// let left = Value::array([1, 2, 3]);
/// let zipped = zip_by().call(&[pair.into(), left.clone(), Value::array(["a", "b"])])?;
///
/// assert_eq!(zipped.to_string(), r#"[[1, "a"], [2, "b"]]"#);
/// assert_eq!(left.to_string(), "[1, 2, 3]");
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn zip_by() -> Function {
    curry3("zip_by", |function, left, right| {
        let function = function.expect_function("zip_by")?;
        let right = right.expect_array("zip_by")?.to_vec();
        let mut zipped = Vec::new();
        for (first, second) in left.expect_array("zip_by")?.to_vec().into_iter().zip(right) {
            match function.call2(first, second)? {
                Value::Array(spliced) => zipped.extend(spliced.to_vec()),
                other => zipped.push(other),
            }
        }
        Ok(Value::from(zipped))
    })
}

/// `zip_object(keys)(values)`: an object pairing each key with the value at
/// the same index. Missing values are `Undefined`; extra values are ignored.
pub fn zip_object() -> Function {
    curry2("zip_object", |keys, values| {
        let keys = keys.as_array().ok_or_else(|| {
            FpError::invalid_argument(
                "zip_object",
                format!("keys must be an array, found {}", keys.kind()),
            )
        })?;
        let values = values.as_array().ok_or_else(|| {
            FpError::invalid_argument(
                "zip_object",
                format!("values must be an array, found {}", values.kind()),
            )
        })?;
        let object = Object::new();
        for (index, key) in keys.to_vec().iter().enumerate() {
            let key = PropertyKey::from_value("zip_object", key)?;
            object.insert(key.name(), values.get(index).unwrap_or_default());
        }
        Ok(Value::Object(object))
    })
}

/// `shallow_clone(value)`: a copy of one level of an array or object.
pub fn shallow_clone() -> Function {
    curry1("shallow_clone", |value| match &value {
        Value::Array(array) => Ok(Value::from(array.to_vec())),
        Value::Object(object) => Ok(Value::Object(Object::from_entries(object.entries()))),
        other => Err(FpError::type_mismatch(
            "shallow_clone",
            "an array or object",
            other,
        )),
    })
}

/// `chain_l(function)(items)`: folds a non-empty array left to right with
/// `function(accumulator, element)`, seeded by the first element.
pub fn chain_l() -> Function {
    curry2("chain_l", |function, items| {
        let function = function.expect_function("chain_l")?;
        let mut items = items.expect_array("chain_l")?.to_vec().into_iter();
        let seed = items.next().ok_or_else(|| {
            FpError::invalid_argument("chain_l", "cannot fold an empty array without a seed")
        })?;
        items.try_fold(seed, |accumulator, item| function.call2(accumulator, item))
    })
}
