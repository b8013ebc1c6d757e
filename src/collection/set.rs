//! Set-like operations keyed by a derived value.
//!
//! Keys are compared with strict equality, so two distinct objects never
//! share a key even when they look alike. Keys are not hashable, so lookup
//! is a linear scan: every operation here is quadratic in its input length.

use crate::compose::{curry2, curry3};
use crate::error::Result;
use crate::value::{Function, Value};

fn keys_of(key_of: &Function, items: &[Value]) -> Result<Vec<Value>> {
    items.iter().map(|item| key_of.call1(item.clone())).collect()
}

fn dedupe_by(key_of: &Function, items: Vec<Value>) -> Result<Vec<Value>> {
    let mut seen: Vec<Value> = Vec::new();
    let mut kept = Vec::new();
    for item in items {
        let key = key_of.call1(item.clone())?;
        if !seen.contains(&key) {
            seen.push(key);
            kept.push(item);
        }
    }
    Ok(kept)
}

fn partition_by(
    operation: &'static str,
    key_of: &Value,
    left: &Value,
    right: &Value,
    keep_shared: bool,
) -> Result<Value> {
    let key_of = key_of.expect_function(operation)?;
    let right_keys = keys_of(key_of, &right.expect_array(operation)?.to_vec())?;
    let mut kept = Vec::new();
    for item in left.expect_array(operation)?.to_vec() {
        let shared = right_keys.contains(&key_of.call1(item.clone())?);
        if shared == keep_shared {
            kept.push(item);
        }
    }
    dedupe_by(key_of, kept).map(Value::from)
}

/// `uniq_by(key_of)(items)`: keeps the first element for every distinct key.
///
/// # Examples
///
/// ```
/// use pointfree::collection::uniq_by;
/// use pointfree::{Function, Value};
///
/// let parity = Function::unary("parity", |number| {
///     Ok(Value::from(number.as_number().unwrap_or(0.0) % 2.0))
/// });
/// let result = uniq_by().call2(parity, Value::array([1, 3, 2, 5, 4]))?;
/// assert_eq!(result.to_string(), "[1, 2]");
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn uniq_by() -> Function {
    curry2("uniq_by", |key_of, items| {
        let key_of = key_of.expect_function("uniq_by")?;
        dedupe_by(key_of, items.expect_array("uniq_by")?.to_vec()).map(Value::from)
    })
}

/// `difference_by(key_of)(left)(right)`: elements of `left` whose key does
/// not occur in `right`, deduplicated by key.
pub fn difference_by() -> Function {
    curry3("difference_by", |key_of, left, right| {
        partition_by("difference_by", &key_of, &left, &right, false)
    })
}

/// `intersection_by(key_of)(left)(right)`: elements of `left` whose key
/// occurs in `right`, deduplicated by key.
pub fn intersection_by() -> Function {
    curry3("intersection_by", |key_of, left, right| {
        partition_by("intersection_by", &key_of, &left, &right, true)
    })
}

/// `difference(left)(right)`: `difference_by(identity)`.
pub fn difference() -> Function {
    curry2("difference", |left, right| {
        let identity = Value::from(crate::compose::identity());
        partition_by("difference", &identity, &left, &right, false)
    })
}
