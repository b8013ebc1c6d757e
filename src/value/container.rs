//! Capability-based dispatch for user-defined containers.
//!
//! Collection operations such as `map` and `filter` accept three shapes of
//! target, resolved once through [`Value::shape`]:
//!
//! - [`Shape::Sequence`]: a built-in array, iterated directly
//! - [`Shape::Custom`]: a [`Container`] that may implement the operation
//! - [`Shape::Scalar`]: anything else, to which the function is applied directly
//!
//! Every capability on [`Container`] defaults to `None`, meaning "not
//! supported". A container that does not support an operation is treated as
//! a scalar for that operation.

use std::any::Any;
use std::fmt;

use super::{Array, Function, Value};
use crate::error::Result;

/// A user-defined value that opts into collection and lens capabilities.
///
/// Implement only the capabilities that make sense for the type; the
/// remaining ones report `None`.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use pointfree::{Container, Function, Result, Value};
/// use pointfree::collection::map;
///
/// #[derive(Debug)]
/// struct Boxed(Value);
///
/// impl Container for Boxed {
///     fn type_name(&self) -> &str {
///         "Boxed"
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn map(&self, function: &Function) -> Option<Result<Value>> {
///         Some(function.call1(self.0.clone()).map(|inner| Value::custom(Boxed(inner))))
///     }
/// }
///
/// let double = Function::unary("double", |value| {
///     Ok(Value::from(value.as_number().unwrap_or(0.0) * 2.0))
/// });
/// let mapped = map().call2(double, Value::custom(Boxed(Value::from(21))))?;
/// assert_eq!(mapped.downcast_custom::<Boxed>().map(|boxed| boxed.0.clone()), Some(Value::from(42)));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub trait Container: fmt::Debug {
    /// Name used in diagnostics.
    fn type_name(&self) -> &str;

    /// Upcast used by [`Value::downcast_custom`].
    fn as_any(&self) -> &dyn Any;

    /// Applies `function` to every element and rebuilds the container.
    fn map(&self, _function: &Function) -> Option<Result<Value>> {
        None
    }

    /// Keeps the elements for which `predicate` is truthy.
    fn filter(&self, _predicate: &Function) -> Option<Result<Value>> {
        None
    }

    /// Returns `true` when `predicate` is truthy for any element.
    fn some(&self, _predicate: &Function) -> Option<Result<bool>> {
        None
    }

    /// Returns `true` when `predicate` is truthy for every element.
    fn every(&self, _predicate: &Function) -> Option<Result<bool>> {
        None
    }

    /// Returns the first element for which `predicate` is truthy, or `None`
    /// when no element matches.
    fn find(&self, _predicate: &Function) -> Option<Result<Option<Value>>> {
        None
    }

    /// Folds the elements with `reducer(accumulator, element)`.
    fn reduce(&self, _seed: Value, _reducer: &Function) -> Option<Result<Value>> {
        None
    }

    /// Reads the value under `key`.
    fn get(&self, _key: &Value) -> Option<Result<Value>> {
        None
    }

    /// Returns a new container with `key` bound to `value`.
    fn set(&self, _key: &Value, _value: Value) -> Option<Result<Value>> {
        None
    }

    /// Custom equality against any other value.
    fn equals(&self, _other: &Value) -> Option<bool> {
        None
    }
}

/// The dispatch path a value takes through collection operations.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// A built-in array.
    Sequence(&'a Array),
    /// A user-defined container.
    Custom(&'a dyn Container),
    /// Any other value.
    Scalar(&'a Value),
}
