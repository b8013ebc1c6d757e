//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! JSON covers the data subset of the model. Functions, lenses, classes,
//! custom containers and placeholders have no JSON form and fail the
//! conversion; `Undefined` becomes `null`. Instances serialize as their fields.

use ::serde::ser::Error as _;
use ::serde::{Serialize, Serializer};
use serde_json::{Map, Number};

use super::{Object, Value};
use crate::error::{FpError, Result};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(text) => Self::from(text),
            serde_json::Value::Array(items) => {
                Self::array(items.into_iter().map(Self::from))
            }
            serde_json::Value::Object(entries) => Self::Object(Object::from_entries(
                entries.into_iter().map(|(key, value)| (key, Self::from(value))),
            )),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = FpError;

    fn try_from(value: &Value) -> Result<Self> {
        to_json(value, &mut Vec::new())
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = FpError;

    fn try_from(value: Value) -> Result<Self> {
        Self::try_from(&value)
    }
}

fn to_json(value: &Value, path: &mut Vec<*const ()>) -> Result<serde_json::Value> {
    let json = match value {
        Value::Undefined | Value::Null => serde_json::Value::Null,
        Value::Bool(flag) => serde_json::Value::Bool(*flag),
        Value::Number(number) => number_to_json(*number),
        Value::Str(text) => serde_json::Value::String(text.to_string()),
        Value::Array(array) => {
            enter(array.address(), path)?;
            let items = array
                .to_vec()
                .iter()
                .map(|item| to_json(item, path))
                .collect::<Result<Vec<_>>>()?;
            path.pop();
            serde_json::Value::Array(items)
        }
        Value::Object(object) => object_to_json(object, path)?,
        Value::Instance(instance) => object_to_json(instance.fields(), path)?,
        Value::Error(error) => serde_json::Value::String(error.to_string()),
        other => {
            return Err(FpError::type_mismatch(
                "to_json",
                "a JSON-representable value",
                other,
            ));
        }
    };
    Ok(json)
}

fn object_to_json(object: &Object, path: &mut Vec<*const ()>) -> Result<serde_json::Value> {
    enter(object.address(), path)?;
    let entries = object
        .entries()
        .into_iter()
        .map(|(key, item)| Ok((key, to_json(&item, path)?)))
        .collect::<Result<Map<_, _>>>()?;
    path.pop();
    Ok(serde_json::Value::Object(entries))
}

fn enter(address: *const (), path: &mut Vec<*const ()>) -> Result<()> {
    if path.contains(&address) {
        return Err(FpError::CycleDetected);
    }
    path.push(address);
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn number_to_json(number: f64) -> serde_json::Value {
    if number.trunc() == number && number.abs() < 9_007_199_254_740_992.0 {
        serde_json::Value::Number(Number::from(number as i64))
    } else {
        Number::from_f64(number).map_or(serde_json::Value::Null, serde_json::Value::Number)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde_json::Value::try_from(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
