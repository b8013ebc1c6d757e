//! Guarded invocation.
//!
//! [`safe`] is the one place where failures are recovered: it turns absent
//! arguments and failed calls into a default value. [`either`] and
//! [`recover`] never catch anything; they branch on whether a value already
//! is an error.

use tracing::debug;

use crate::compose::{curry, curry2, curry3};
use crate::error::FpError;
use crate::value::{Function, Value};

/// `safe(arity)(function)(default)`: a function curried at `arity` that
/// returns `default` when any argument is `Undefined` or `Null`, or when
/// `function` fails, and otherwise returns what `function` returns.
///
/// # Examples
///
/// ```
/// use pointfree::control::safe;
/// use pointfree::{FpError, Function, Value};
///
/// let parse = Function::unary("parse", |text| {
///     text.as_str()
///         .and_then(|text| text.parse::<f64>().ok())
///         .map(Value::from)
///         .ok_or_else(|| FpError::raised("not a number"))
/// });
/// let parse_or_zero = safe().call(&[Value::from(1), parse.into(), Value::from(0)])?;
///
/// assert_eq!(parse_or_zero.call1("2.5")?, Value::from(2.5));
/// assert_eq!(parse_or_zero.call1("abc")?, Value::from(0));
/// assert_eq!(parse_or_zero.call1(Value::Null)?, Value::from(0));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn safe() -> Function {
    curry3("safe", |arity, function, default| {
        let arity = arity.expect_count("safe").map_err(|_| {
            FpError::invalid_argument("safe", format!("arity must be a non-negative integer, found {arity}"))
        })?;
        let function = function
            .as_function()
            .cloned()
            .ok_or_else(|| {
                FpError::invalid_argument("safe", format!("expected a function, found {}", function.kind()))
            })?;
        let guarded = Function::new(function.name().to_owned(), move |arguments| {
            if arguments.iter().any(Value::is_nil) {
                debug!(function = function.name(), "safe returned its default for an absent argument");
                return Ok(default.clone());
            }
            Ok(function.call(arguments).unwrap_or_else(|error| {
                debug!(function = function.name(), %error, "safe returned its default for a failed call");
                default.clone()
            }))
        });
        Ok(Value::Function(curry(arity, guarded)))
    })
}

/// `either(function)(value)`: passes error values through, applies
/// `function` to anything else.
pub fn either() -> Function {
    curry2("either", |function, value| {
        if value.is_error() {
            Ok(value)
        } else {
            function.call1(value)
        }
    })
}

/// `recover(function)(value)`: applies `function` only to error values and
/// passes anything else through. The dual of [`either`].
#[doc(alias = "unsafe")]
pub fn recover() -> Function {
    curry2("recover", |function, value| {
        if value.is_error() {
            function.call1(value)
        } else {
            Ok(value)
        }
    })
}
