use tracing::debug;

use super::strict::equals;
use crate::compose::curry2;
use crate::error::{FpError, Result};
use crate::value::{Function, Value};

/// Structural equality over arrays and objects.
///
/// Both sides are first checked for cycles: a node that appears again on its
/// own path from the root fails with [`FpError::CycleDetected`]. Shared but
/// acyclic nodes are fine. Leaves are compared with
/// [`equals`](super::equals).
///
/// # Errors
///
/// Returns [`FpError::CycleDetected`] when either side is self-referential.
pub fn deep_equals(left: &Value, right: &Value) -> Result<bool> {
    ensure_acyclic(left, &mut Vec::new())?;
    ensure_acyclic(right, &mut Vec::new())?;
    Ok(compare(left, right))
}

fn ensure_acyclic(value: &Value, path: &mut Vec<*const ()>) -> Result<()> {
    let (address, children) = match value {
        Value::Array(array) => (array.address(), array.to_vec()),
        Value::Object(object) => (
            object.address(),
            object.entries().into_iter().map(|(_, child)| child).collect(),
        ),
        _ => return Ok(()),
    };
    if path.contains(&address) {
        debug!(depth = path.len(), "deep_eq found a cycle");
        return Err(FpError::CycleDetected);
    }
    path.push(address);
    for child in &children {
        ensure_acyclic(child, path)?;
    }
    path.pop();
    Ok(())
}

fn compare(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .to_vec()
                    .iter()
                    .zip(right.to_vec().iter())
                    .all(|(left, right)| compare(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.entries().iter().all(|(key, value)| {
                    right
                        .get(key)
                        .is_some_and(|other| compare(value, &other))
                })
        }
        _ => equals(left, right),
    }
}

/// `deep_eq(left)(right)`: see [`deep_equals`].
///
/// # Examples
///
/// ```
/// use pointfree::equality::deep_eq;
/// use pointfree::{FpError, Object, Value};
///
/// let left = Value::object([("tags", Value::array(["a"]))]);
/// let right = Value::object([("tags", Value::array(["a"]))]);
/// assert_eq!(deep_eq().call2(left, right)?, Value::from(true));
///
/// let looped = Object::new();
/// looped.insert("self", Value::Object(looped.clone()));
/// let result = deep_eq().call2(Value::Object(looped), Value::object(Vec::<(String, Value)>::new()));
/// assert_eq!(result, Err(FpError::CycleDetected));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn deep_eq() -> Function {
    curry2("deep_eq", |left, right| deep_equals(&left, &right).map(Value::from))
}
