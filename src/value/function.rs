//! Native callables.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::error::Result;

type Body = dyn Fn(&[Value]) -> Result<Value>;

/// A named, reference-counted callable taking a positional argument list.
///
/// A `Function` accepts any number of arguments; arity is imposed from the
/// outside by the curry engine. Two handles are strictly equal only when they
/// share the same allocation.
///
/// # Examples
///
/// ```rust
/// use pointfree::{Function, Value};
///
/// let add = Function::binary("add", |first, second| {
///     Ok(Value::from(first.as_number().unwrap_or(0.0) + second.as_number().unwrap_or(0.0)))
/// });
/// assert_eq!(add.call2(1, 2)?, Value::from(3));
/// # Ok::<(), pointfree::FpError>(())
/// ```
#[derive(Clone)]
pub struct Function(Rc<Inner>);

struct Inner {
    name: Cow<'static, str>,
    body: Box<Body>,
}

impl Function {
    /// Creates a function from a closure over the whole argument list.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self(Rc::new(Inner {
            name: name.into(),
            body: Box::new(body),
        }))
    }

    /// Creates a function that reads only its first argument.
    ///
    /// A missing argument is received as `Undefined`.
    pub fn unary<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + 'static,
    {
        Self::new(name, move |arguments| {
            body(arguments.first().cloned().unwrap_or_default())
        })
    }

    /// Creates a function that reads only its first two arguments.
    pub fn binary<F>(name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn(Value, Value) -> Result<Value> + 'static,
    {
        Self::new(name, move |arguments| {
            let mut arguments = arguments.iter().cloned();
            let first = arguments.next().unwrap_or_default();
            let second = arguments.next().unwrap_or_default();
            body(first, second)
        })
    }

    /// The name given at construction.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Invokes the function with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body produces.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        (self.0.body)(arguments)
    }

    /// Invokes the function with no arguments.
    ///
    /// # Errors
    ///
    /// See [`Function::call`].
    pub fn call0(&self) -> Result<Value> {
        self.call(&[])
    }

    /// Invokes the function with one argument.
    ///
    /// # Errors
    ///
    /// See [`Function::call`].
    pub fn call1(&self, first: impl Into<Value>) -> Result<Value> {
        self.call(&[first.into()])
    }

    /// Invokes the function with two arguments.
    ///
    /// # Errors
    ///
    /// See [`Function::call`].
    pub fn call2(&self, first: impl Into<Value>, second: impl Into<Value>) -> Result<Value> {
        self.call(&[first.into(), second.into()])
    }

    /// Invokes the function with three arguments.
    ///
    /// # Errors
    ///
    /// See [`Function::call`].
    pub fn call3(
        &self,
        first: impl Into<Value>,
        second: impl Into<Value>,
        third: impl Into<Value>,
    ) -> Result<Value> {
        self.call(&[first.into(), second.into(), third.into()])
    }

    /// Returns `true` when both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[Function: {}]", self.name())
    }
}
