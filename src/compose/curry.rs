//! The curry engine.
//!
//! [`curry`] turns a [`Function`] into one that accumulates arguments until
//! `arity` concrete values are available. Positional [`__`] placeholders
//! reserve a slot without filling it; later calls fill placeholders left to
//! right and append whatever remains.
//!
//! Each partial application captures its own immutable slot list, so a
//! partially applied function can be called any number of times with
//! different continuations.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::compose::{__, curry3};
//! use pointfree::Value;
//!
//! let triple = curry3("triple", |first, second, third| Ok(Value::array([first, second, third])));
//!
//! let partial = triple.call(&[__, Value::from(2), __])?;
//! let result = partial.call(&[Value::from(1), Value::from(3)])?;
//! assert_eq!(result.to_string(), "[1, 2, 3]");
//! # Ok::<(), pointfree::FpError>(())
//! ```

use smallvec::SmallVec;
use tracing::trace;

use crate::error::{FpError, Result};
use crate::value::{Function, Value};

/// The placeholder sentinel.
///
/// A placeholder occupies an argument slot without satisfying it. It is only
/// equal to itself, never to `Undefined` or `Null`.
pub const __: Value = Value::Placeholder;

/// Argument slots captured by a partial application.
type Slots = SmallVec<[Value; 6]>;

/// Curries `function` at `arity`.
///
/// When called, the returned function counts the gaps left by its arguments:
/// `arity` minus the number of arguments plus the number of placeholders.
/// With no gap it calls `function` with the first `arity` arguments and drops
/// the rest. Otherwise it returns a new curried function whose arity is the
/// gap count.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::curry;
/// use pointfree::{Function, Value};
///
/// let pair = curry(2, Function::new("pair", |arguments| Ok(Value::array(arguments.to_vec()))));
///
/// let one = pair.call1(1)?;
/// assert_eq!(one.call1(2)?.to_string(), "[1, 2]");
/// assert_eq!(one.call1(9)?.to_string(), "[1, 9]");
/// assert_eq!(pair.call(&[Value::from(1), Value::from(2), Value::from(3)])?.to_string(), "[1, 2]");
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn curry(arity: usize, function: Function) -> Function {
    let name = function.name().to_owned();
    Function::new(name, move |arguments| apply(arity, &function, arguments))
}

fn apply(arity: usize, function: &Function, arguments: &[Value]) -> Result<Value> {
    let holes = arguments.iter().filter(|argument| argument.is_placeholder()).count();
    let gaps = arity.saturating_add(holes).saturating_sub(arguments.len());

    if gaps == 0 {
        trace!(function = function.name(), arity, "curried function saturated");
        return function.call(&arguments[..arity.min(arguments.len())]);
    }

    trace!(function = function.name(), arity, gaps, "partial application");
    let captured: Slots = arguments.iter().cloned().collect();
    let target = function.clone();
    let fill = Function::new(function.name().to_owned(), move |fillers| {
        let mut fillers = fillers.iter();
        let mut slots: Slots = captured
            .iter()
            .map(|slot| {
                if slot.is_placeholder() {
                    fillers.next().cloned().unwrap_or_default()
                } else {
                    slot.clone()
                }
            })
            .collect();
        slots.extend(fillers.cloned());
        slots.truncate(arity);
        target.call(&slots)
    });
    Ok(Value::Function(curry(gaps, fill)))
}

/// Curries a dynamically supplied function at a dynamically supplied arity.
///
/// # Errors
///
/// Returns [`FpError::InvalidArgument`] when `arity` is not a non-negative
/// integer or `function` is not a function.
pub fn make_curried(arity: &Value, function: &Value) -> Result<Function> {
    let arity = arity.expect_count("make_curried").map_err(|_| {
        FpError::invalid_argument(
            "make_curried",
            format!("arity must be a non-negative integer, found {arity}"),
        )
    })?;
    let function = function.as_function().ok_or_else(|| {
        FpError::invalid_argument(
            "make_curried",
            format!("expected a function, found {}", function.kind()),
        )
    })?;
    Ok(curry(arity, function.clone()))
}

macro_rules! value_type {
    ($parameter:ident) => {
        Value
    };
}

macro_rules! define_curry_n {
    ($($arity:literal => ($($parameter:ident),+)),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Curries a closure over ", stringify!($arity), " positional values.")]
                ///
                /// See [`curry`] for the calling convention.
                pub fn [<curry $arity>]<F>(name: &'static str, body: F) -> Function
                where
                    F: Fn($(value_type!($parameter)),+) -> Result<Value> + 'static,
                {
                    curry(
                        $arity,
                        Function::new(name, move |arguments| {
                            let mut arguments = arguments.iter().cloned();
                            $(let $parameter = arguments.next().unwrap_or_default();)+
                            body($($parameter),+)
                        }),
                    )
                }
            )+
        }
    };
}

define_curry_n! {
    1 => (first),
    2 => (first, second),
    3 => (first, second, third),
    4 => (first, second, third, fourth),
    5 => (first, second, third, fourth, fifth),
    6 => (first, second, third, fourth, fifth, sixth),
}
