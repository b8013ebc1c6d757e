//! Value dispatch.

use std::rc::Rc;

use tracing::debug;

use crate::compose::curry1;
use crate::error::{FpError, Result};
use crate::value::{Function, Value};

/// Tests one matcher against `value`, in this order:
///
/// 1. a class accepts its instances
/// 2. a function is called with no arguments and its result compared strictly
/// 3. anything else is compared strictly
fn accepts(matcher: &Value, value: &Value) -> Result<bool> {
    let accepted = match matcher {
        Value::Class(class) => class.is_instance(value),
        Value::Function(produce) => produce.call0()?.strict_equals(value),
        _ => false,
    };
    Ok(accepted || matcher.strict_equals(value))
}

/// Builds a function that hands its argument to the handler of the first
/// accepting matcher.
///
/// Matchers are classes, zero-argument functions or plain values; see the
/// order above. When nothing accepts the value the call fails with
/// [`FpError::NoMatch`] carrying it.
///
/// # Examples
///
/// ```
/// use pointfree::compose::always;
/// use pointfree::control::match_on;
/// use pointfree::{Class, FpError, Value};
///
/// let describe = match_on([
///     (Value::from(Class::string()), always("text")),
///     (Value::from(0), always("zero")),
/// ]);
///
/// assert_eq!(describe.call1("hi")?, Value::from("text"));
/// assert_eq!(describe.call1(0)?, Value::from("zero"));
/// assert!(matches!(describe.call1(42), Err(FpError::NoMatch { .. })));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn match_on<I, M>(pairs: I) -> Function
where
    I: IntoIterator<Item = (M, Function)>,
    M: Into<Value>,
{
    let pairs: Rc<[(Value, Function)]> = pairs
        .into_iter()
        .map(|(matcher, handler)| (matcher.into(), handler))
        .collect();
    curry1("match_on", move |value| {
        for (matcher, handler) in pairs.iter() {
            if accepts(matcher, &value)? {
                return handler.call1(value);
            }
        }
        debug!(%value, matchers = pairs.len(), "no matcher accepted the value");
        Err(FpError::NoMatch { value })
    })
}

/// Builds a function that hands its argument to the handler of the first
/// clause whose predicate is truthy for it, or returns `Undefined`.
///
/// # Examples
///
/// ```
/// use pointfree::compose::{always, always_true};
/// use pointfree::control::cond;
/// use pointfree::{Function, Value};
///
/// let is_negative = Function::unary("is_negative", |value| {
///     Ok(Value::from(value.as_number().is_some_and(|number| number < 0.0)))
/// });
/// let sign = cond([(is_negative, always(-1)), (always_true(), always(1))]);
///
/// assert_eq!(sign.call1(-5)?, Value::from(-1));
/// assert_eq!(sign.call1(5)?, Value::from(1));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn cond<I>(clauses: I) -> Function
where
    I: IntoIterator<Item = (Function, Function)>,
{
    let clauses: Rc<[(Function, Function)]> = clauses.into_iter().collect();
    curry1("cond", move |value| {
        for (predicate, handler) in clauses.iter() {
            if predicate.call1(value.clone())?.is_truthy() {
                return handler.call1(value);
            }
        }
        Ok(Value::Undefined)
    })
}
