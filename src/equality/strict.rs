use crate::compose::{curry2, curry3, curry4};
use crate::value::{Function, Value};

/// Custom equality when the left side is a container that defines it,
/// strict equality otherwise.
pub fn equals(left: &Value, right: &Value) -> bool {
    match left {
        Value::Custom(container) => container
            .equals(right)
            .unwrap_or_else(|| left.strict_equals(right)),
        _ => left.strict_equals(right),
    }
}

/// `eq(left)(right)`: see [`equals`].
///
/// # Examples
///
/// ```
/// use pointfree::equality::eq;
/// use pointfree::Value;
///
/// assert_eq!(eq().call2("a", "a")?, Value::from(true));
/// assert_eq!(eq().call2(Value::array([1]), Value::array([1]))?, Value::from(false));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn eq() -> Function {
    curry2("eq", |left, right| Ok(Value::from(equals(&left, &right))))
}

/// `eq_fn(project_left)(project_right)(left)(right)`:
/// `eq(project_left(left))(project_right(right))`.
pub fn eq_fn() -> Function {
    curry4("eq_fn", |project_left, project_right, left, right| {
        let left = project_left.call1(left)?;
        let right = project_right.call1(right)?;
        Ok(Value::from(equals(&left, &right)))
    })
}

/// `eq_lens(lens)(left)(right)`: compares the foci of `lens` in both values.
pub fn eq_lens() -> Function {
    curry3("eq_lens", |lens, left, right| {
        let lens = lens
            .as_lens()
            .ok_or_else(|| crate::error::FpError::type_mismatch("eq_lens", "a lens", &lens))?;
        Ok(Value::from(equals(&lens.view(&left)?, &lens.view(&right)?)))
    })
}
