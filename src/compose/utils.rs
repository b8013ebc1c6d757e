//! Utility combinators.
//!
//! This module provides the small building blocks the rest of the crate and
//! its callers compose with:
//!
//! - [`identity`]: returns its argument unchanged (the I combinator)
//! - [`always`]: ignores its arguments and returns a fixed value (the K combinator)
//! - [`always_true`] / [`always_false`]: `always(true)` / `always(false)`
//! - [`noop`]: returns `Undefined`
//! - [`not`]: negates truthiness
//! - [`and`] / [`or`] / [`any_pass`]: combine predicate arrays
//! - [`once`]: runs a function's side effect at most once

use std::cell::Cell;

use tracing::debug;

use super::curry::{curry1, curry2};
use crate::error::Result;
use crate::value::{Function, Value};

/// The identity function.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::identity;
/// use pointfree::Value;
///
/// assert_eq!(identity().call1(42)?, Value::from(42));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn identity() -> Function {
    curry1("identity", Ok)
}

/// Creates a function that always returns `value`, ignoring its arguments.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::always;
/// use pointfree::Value;
///
/// let answer = always(42);
/// assert_eq!(answer.call0()?, Value::from(42));
/// assert_eq!(answer.call1("ignored")?, Value::from(42));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn always(value: impl Into<Value>) -> Function {
    let value = value.into();
    Function::new("always", move |_| Ok(value.clone()))
}

/// `always(true)`.
pub fn always_true() -> Function {
    always(true)
}

/// `always(false)`.
pub fn always_false() -> Function {
    always(false)
}

/// A function that does nothing and returns `Undefined`.
pub fn noop() -> Function {
    Function::new("noop", |_| Ok(Value::Undefined))
}

/// Boolean negation of truthiness.
pub fn not() -> Function {
    curry1("not", |value| Ok(Value::from(!value.is_truthy())))
}

/// `and(predicates)(value)`: calls predicates in order while the running
/// result is truthy and returns the last result (`true` for no predicates).
pub fn and() -> Function {
    curry2("and", |predicates, value| {
        fold_predicates("and", &predicates, &value, Value::from(true), Value::is_truthy)
    })
}

/// `or(predicates)(value)`: calls predicates in order until one returns a
/// truthy result and returns it (`false` for no predicates).
pub fn or() -> Function {
    curry2("or", |predicates, value| {
        fold_predicates("or", &predicates, &value, Value::from(false), |current| {
            !current.is_truthy()
        })
    })
}

/// `any_pass(predicates)(value)`: `true` when any predicate is truthy for `value`.
pub fn any_pass() -> Function {
    curry2("any_pass", |predicates, value| {
        for predicate in predicates.expect_array("any_pass")?.to_vec() {
            if predicate.call1(value.clone())?.is_truthy() {
                return Ok(Value::from(true));
            }
        }
        Ok(Value::from(false))
    })
}

fn fold_predicates(
    operation: &'static str,
    predicates: &Value,
    value: &Value,
    seed: Value,
    keep_going: impl Fn(&Value) -> bool,
) -> Result<Value> {
    predicates
        .expect_array(operation)?
        .to_vec()
        .iter()
        .try_fold(seed, |current, predicate| {
            if keep_going(&current) {
                predicate.call1(value.clone())
            } else {
                Ok(current)
            }
        })
}

/// Wraps `function` so that its body runs at most once.
///
/// The first call forwards every argument and discards the result; later
/// calls do nothing. Every call returns `Undefined`.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use pointfree::compose::once;
/// use pointfree::{Function, Value};
///
/// let count = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&count);
/// let initialize = once(Function::new("initialize", move |_| {
///     counter.set(counter.get() + 1);
///     Ok(Value::Undefined)
/// }));
///
/// initialize.call0()?;
/// initialize.call0()?;
/// assert_eq!(count.get(), 1);
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn once(function: Function) -> Function {
    let called = Cell::new(false);
    Function::new("once", move |arguments| {
        if called.replace(true) {
            debug!(function = function.name(), "suppressed repeated call");
            return Ok(Value::Undefined);
        }
        function.call(arguments)?;
        Ok(Value::Undefined)
    })
}
