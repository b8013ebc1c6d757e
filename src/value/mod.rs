//! The dynamic value model every combinator operates on.
//!
//! Point-free combinators are defined over heterogeneous argument lists: a
//! curried function does not know how many of its slots are still open until
//! it is called, `map` accepts arrays, custom containers and bare scalars
//! alike, and a lens can be passed through `flow` exactly like a function.
//! [`Value`] is the closed sum type that carries all of these.
//!
//! # Reference semantics
//!
//! [`Array`] and [`Object`] are shared references. Cloning a `Value` never
//! copies a collection, and two values are strictly equal (`==`) only when
//! they point at the same collection. This is what makes structural sharing
//! observable: a lens update allocates a new node for every level on the path
//! to its focus and shares every other node with the input.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::{Value, ValueKind};
//!
//! let person = Value::object([("name", Value::from("Rich")), ("age", Value::from(42))]);
//! assert_eq!(person.kind(), ValueKind::Object);
//!
//! // Strict equality: primitives by value, collections by identity.
//! assert_eq!(Value::from(1), Value::from(1.0));
//! assert_ne!(Value::array([1, 2]), Value::array([1, 2]));
//! assert_eq!(person.clone(), person);
//! ```

mod class;
mod collections;
mod container;
mod function;
mod property;
#[cfg(feature = "serde")]
mod serde;

pub use class::{Class, Instance};
pub use collections::{Array, Object};
pub(crate) use collections::reserve;
pub use container::{Container, Shape};
pub use function::Function;

pub(crate) use property::{PropertyKey, assoc_property, get_property};

use std::fmt;
use std::rc::Rc;

use crate::error::{FpError, Result};
use crate::optics::Lens;

/// A dynamically typed value.
///
/// See the [module documentation](self) for the equality and sharing rules.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A shared array.
    Array(Array),
    /// A shared string-keyed object.
    Object(Object),
    /// A callable.
    Function(Function),
    /// A composable lens.
    Lens(Lens),
    /// An error carried as data.
    Error(Rc<FpError>),
    /// A constructor used by `match_on` instance checks.
    Class(Class),
    /// A value created from a declared [`Class`].
    Instance(Instance),
    /// A user-defined container exposing optional capabilities.
    Custom(Rc<dyn Container>),
    /// The placeholder sentinel, exported as [`__`](crate::compose::__).
    Placeholder,
}

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Undefined`]
    Undefined,
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Boolean,
    /// [`Value::Number`]
    Number,
    /// [`Value::Str`]
    String,
    /// [`Value::Array`]
    Array,
    /// [`Value::Object`]
    Object,
    /// [`Value::Function`]
    Function,
    /// [`Value::Lens`]
    Lens,
    /// [`Value::Error`]
    Error,
    /// [`Value::Class`]
    Class,
    /// [`Value::Instance`]
    Instance,
    /// [`Value::Custom`]
    Custom,
    /// [`Value::Placeholder`]
    Placeholder,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Function => "Function",
            Self::Lens => "Lens",
            Self::Error => "Error",
            Self::Class => "Class",
            Self::Instance => "Instance",
            Self::Custom => "Custom",
            Self::Placeholder => "Placeholder",
        };
        formatter.write_str(name)
    }
}

impl Value {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an array value from anything convertible into values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Creates an object value from key/value pairs.
    pub fn object<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Self>,
    {
        Self::Object(Object::from_entries(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        ))
    }

    /// Creates a function value from a native closure.
    pub fn function<F>(name: &'static str, body: F) -> Self
    where
        F: Fn(&[Self]) -> Result<Self> + 'static,
    {
        Self::Function(Function::new(name, body))
    }

    /// Wraps an error as data.
    pub fn error(error: FpError) -> Self {
        Self::Error(Rc::new(error))
    }

    /// Wraps a user-defined container.
    pub fn custom<C: Container + 'static>(container: C) -> Self {
        Self::Custom(Rc::new(container))
    }

    /// Converts a result into a value, reifying the error side.
    pub fn from_result(result: Result<Self>) -> Self {
        result.unwrap_or_else(Self::error)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the runtime kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::Str(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Function(_) => ValueKind::Function,
            Self::Lens(_) => ValueKind::Lens,
            Self::Error(_) => ValueKind::Error,
            Self::Class(_) => ValueKind::Class,
            Self::Instance(_) => ValueKind::Instance,
            Self::Custom(_) => ValueKind::Custom,
            Self::Placeholder => ValueKind::Placeholder,
        }
    }

    /// Resolves which dispatch path collection operations take for this value.
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Self::Array(array) => Shape::Sequence(array),
            Self::Custom(container) => Shape::Custom(container.as_ref()),
            other => Shape::Scalar(other),
        }
    }

    /// Returns `true` for the placeholder sentinel.
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns `true` for `Undefined` and `Null`.
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns `true` when this value is an error carried as data.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Truthiness: `Undefined`, `Null`, `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null | Self::Placeholder => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Str(text) => !text.is_empty(),
            _ => true,
        }
    }

    /// Strict (`===`) equality.
    ///
    /// Numbers compare by IEEE equality, strings by content, every reference
    /// variant by identity.
    pub fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined)
            | (Self::Null, Self::Null)
            | (Self::Placeholder, Self::Placeholder) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left.ptr_eq(right),
            (Self::Object(left), Self::Object(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (Self::Lens(left), Self::Lens(right)) => left.ptr_eq(right),
            (Self::Error(left), Self::Error(right)) => Rc::ptr_eq(left, right),
            (Self::Class(left), Self::Class(right)) => left == right,
            (Self::Instance(left), Self::Instance(right)) => left.ptr_eq(right),
            (Self::Custom(left), Self::Custom(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the number if this is a `Number`.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool`.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the array if this is an `Array`.
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the object if this is an `Object`.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the function if this is a `Function`.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the lens if this is a `Lens`.
    pub const fn as_lens(&self) -> Option<&Lens> {
        match self {
            Self::Lens(lens) => Some(lens),
            _ => None,
        }
    }

    /// Returns the carried error if this is an `Error`.
    pub fn as_error(&self) -> Option<&FpError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Downcasts a `Custom` value to its concrete container type.
    pub fn downcast_custom<C: Container + 'static>(&self) -> Option<&C> {
        match self {
            Self::Custom(container) => container.as_any().downcast_ref::<C>(),
            _ => None,
        }
    }

    /// Returns the array or fails with a [`FpError::TypeMismatch`] naming `operation`.
    pub(crate) fn expect_array(&self, operation: &'static str) -> Result<&Array> {
        self.as_array()
            .ok_or_else(|| FpError::type_mismatch(operation, "an array", self))
    }

    /// Returns the function or fails with a [`FpError::TypeMismatch`] naming `operation`.
    pub(crate) fn expect_function(&self, operation: &'static str) -> Result<&Function> {
        self.as_function()
            .ok_or_else(|| FpError::type_mismatch(operation, "a function", self))
    }

    /// Returns the value as a non-negative integer count.
    pub(crate) fn expect_count(&self, operation: &'static str) -> Result<usize> {
        match self {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::float_cmp
            )]
            Self::Number(number) if *number >= 0.0 && number.trunc() == *number => {
                Ok(*number as usize)
            }
            other => Err(FpError::type_mismatch(
                operation,
                "a non-negative integer",
                other,
            )),
        }
    }

    // =========================================================================
    // Invocation
    // =========================================================================

    /// Calls this value as a function.
    ///
    /// # Errors
    ///
    /// Returns [`FpError::TypeMismatch`] when the value is not a function, or
    /// whatever error the function itself produces.
    pub fn call(&self, arguments: &[Self]) -> Result<Self> {
        self.expect_function("call")?.call(arguments)
    }

    /// Calls this value with a single argument.
    ///
    /// # Errors
    ///
    /// See [`Value::call`].
    pub fn call1(&self, first: impl Into<Self>) -> Result<Self> {
        self.call(&[first.into()])
    }

    /// Calls this value with two arguments.
    ///
    /// # Errors
    ///
    /// See [`Value::call`].
    pub fn call2(&self, first: impl Into<Self>, second: impl Into<Self>) -> Result<Self> {
        self.call(&[first.into(), second.into()])
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<Rc<str>> for Value {
    fn from(text: Rc<str>) -> Self {
        Self::Str(text)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(Array::from_vec(items))
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Self::Array(array)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Lens> for Value {
    fn from(lens: Lens) -> Self {
        Self::Lens(lens)
    }
}

impl From<Class> for Value {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

impl From<FpError> for Value {
    fn from(error: FpError) -> Self {
        Self::error(error)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Undefined, Into::into)
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Identity key used to stop rendering at cycles.
type NodeAddress = *const ();

fn render(
    value: &Value,
    formatter: &mut fmt::Formatter<'_>,
    quote_strings: bool,
    path: &mut Vec<NodeAddress>,
) -> fmt::Result {
    match value {
        Value::Undefined => formatter.write_str("undefined"),
        Value::Null => formatter.write_str("null"),
        Value::Bool(flag) => write!(formatter, "{flag}"),
        Value::Number(number) => render_number(*number, formatter),
        Value::Str(text) if quote_strings => write!(formatter, "{text:?}"),
        Value::Str(text) => formatter.write_str(text),
        Value::Array(array) => {
            let address = array.address();
            if path.contains(&address) {
                return formatter.write_str("[Circular]");
            }
            path.push(address);
            formatter.write_str("[")?;
            for (index, item) in array.to_vec().iter().enumerate() {
                if index > 0 {
                    formatter.write_str(", ")?;
                }
                render(item, formatter, true, path)?;
            }
            path.pop();
            formatter.write_str("]")
        }
        Value::Object(object) => {
            let address = object.address();
            if path.contains(&address) {
                return formatter.write_str("[Circular]");
            }
            path.push(address);
            formatter.write_str("{")?;
            for (index, (key, item)) in object.entries().iter().enumerate() {
                if index > 0 {
                    formatter.write_str(", ")?;
                }
                write!(formatter, "{key}: ")?;
                render(item, formatter, true, path)?;
            }
            path.pop();
            formatter.write_str("}")
        }
        Value::Function(function) => write!(formatter, "[Function: {}]", function.name()),
        Value::Lens(_) => formatter.write_str("[Lens]"),
        Value::Error(error) => write!(formatter, "Error: {error}"),
        Value::Class(class) => write!(formatter, "[class {}]", class.name()),
        Value::Instance(instance) => {
            write!(formatter, "{} ", instance.class().name())?;
            render(&Value::Object(instance.fields().clone()), formatter, true, path)
        }
        Value::Custom(container) => write!(formatter, "{container:?}"),
        Value::Placeholder => formatter.write_str("__"),
    }
}

#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn render_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number.trunc() == number && number.abs() < 1e15 {
        write!(formatter, "{}", number as i64)
    } else {
        write!(formatter, "{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, formatter, false, &mut Vec::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, formatter, true, &mut Vec::new())
    }
}

/// Builds a `Vec<Value>` from heterogeneous expressions.
///
/// Each element is converted with [`Value::from`], so literals, strings,
/// functions, lenses and the placeholder can be mixed freely.
///
/// # Examples
///
/// ```rust
/// use pointfree::{Value, values};
/// use pointfree::compose::__;
///
/// let arguments = values![1, "two", __, true];
/// assert_eq!(arguments.len(), 4);
/// assert!(arguments[2].is_placeholder());
/// assert_eq!(arguments[1], Value::from("two"));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($item)),+]
    };
}

static_assertions::assert_impl_all!(Value: Clone, Default, fmt::Debug, fmt::Display);
static_assertions::assert_not_impl_any!(Value: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, false)]
    #[case(Value::Null, false)]
    #[case(Value::from(false), false)]
    #[case(Value::from(0), false)]
    #[case(Value::from(f64::NAN), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from(true), true)]
    #[case(Value::from(-1), true)]
    #[case(Value::from("a"), true)]
    #[case(Value::array(Vec::<Value>::new()), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn placeholder_is_distinct_from_absent_values() {
        assert_ne!(Value::Placeholder, Value::Undefined);
        assert_ne!(Value::Placeholder, Value::Null);
        assert_eq!(Value::Placeholder, Value::Placeholder);
    }

    #[rstest]
    fn nan_is_not_strictly_equal_to_itself() {
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
    }

    #[rstest]
    fn collections_compare_by_identity() {
        let array = Value::array([1, 2, 3]);
        let same = array.clone();
        assert_eq!(array, same);
        assert_ne!(array, Value::array([1, 2, 3]));
    }

    #[rstest]
    fn display_renders_structures() {
        let value = Value::object([
            ("name", Value::from("Rich")),
            ("tags", Value::array(["a", "b"])),
        ]);
        assert_eq!(value.to_string(), r#"{name: "Rich", tags: ["a", "b"]}"#);
    }

    #[rstest]
    fn display_stops_at_cycles() {
        let object = Object::new();
        object.insert("self", Value::Object(object.clone()));
        assert_eq!(Value::Object(object).to_string(), "{self: [Circular]}");
    }

    #[rstest]
    #[case(Value::from(3), "3")]
    #[case(Value::from(1.5), "1.5")]
    #[case(Value::from(f64::NAN), "NaN")]
    #[case(Value::Undefined, "undefined")]
    fn display_numbers_and_absent_values(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn option_conversion_maps_none_to_undefined() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some(2)), Value::from(2));
    }

    #[rstest]
    fn calling_a_non_function_is_a_type_mismatch() {
        let error = Value::from(1).call(&[]).unwrap_err();
        assert!(matches!(error, FpError::TypeMismatch { operation: "call", .. }));
    }
}
