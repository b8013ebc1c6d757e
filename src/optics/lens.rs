//! Lens optics for focusing on part of a value.
//!
//! A [`Lens`] is a getter/setter pair packaged as a single function that is
//! polymorphic over the functor it is run with. Running it with the constant
//! functor reads the focus; running it with the identity functor rebuilds the
//! structure around a transformed focus. Composition is plain function
//! composition of these runners, so it is associative by construction.
//!
//! # Laws
//!
//! Every lens built from a well-behaved getter and setter satisfies:
//!
//! 1. **GetPut Law**: Setting what was read leaves the structure unchanged.
//!    ```text
//!    deep_eq(lens.set(lens.view(&s)?, &s)?, s)
//!    ```
//!
//! 2. **PutGet Law**: Reading after a set yields the set value.
//!    ```text
//!    lens.view(&lens.set(v, &s)?)? == v
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets are equivalent to the last one.
//!    ```text
//!    deep_eq(lens.set(v2, &lens.set(v1, &s)?)?, lens.set(v2, &s)?)
//!    ```
//!
//! Writes never mutate their input: every level on the path to the focus is
//! shallow-cloned and every sibling is shared.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::shim::{Access, Lift, Shim};
use crate::compose::{always, compose_lenses};
use crate::error::{FpError, Result};
use crate::value::{Function, PropertyKey, Value, assoc_property, get_property};

type Runner = dyn Fn(&Lift, &Value) -> Result<Shim>;

/// A composable focus into a [`Value`].
///
/// # Examples
///
/// ```
/// use pointfree::optics::lens_prop;
/// use pointfree::Value;
///
/// let name = lens_prop("name")?;
/// let person = Value::object([("name", "Rich"), ("city", "Austin")]);
///
/// assert_eq!(name.view(&person)?, Value::from("Rich"));
///
/// let renamed = name.set("Ana", &person)?;
/// assert_eq!(name.view(&renamed)?, Value::from("Ana"));
/// assert_eq!(name.view(&person)?, Value::from("Rich"));
/// # Ok::<(), pointfree::FpError>(())
/// ```
#[derive(Clone)]
pub struct Lens(Rc<Runner>);

impl Lens {
    pub(crate) fn from_runner<R>(runner: R) -> Self
    where
        R: Fn(&Lift, &Value) -> Result<Shim> + 'static,
    {
        Self(Rc::new(runner))
    }

    /// Creates a lens from native accessor closures.
    ///
    /// `setter(focus, structure)` must return a new structure.
    pub fn from_accessors<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn(&Value) -> Result<Value> + 'static,
        S: Fn(Value, &Value) -> Result<Value> + 'static,
    {
        Self::from_runner(move |lift, structure| {
            lift.call(getter(structure)?)?.map(|focus| setter(focus, structure))
        })
    }

    /// Creates a lens from a getter `structure -> focus` and a setter
    /// `(focus, structure) -> structure`.
    pub fn new(getter: Function, setter: Function) -> Self {
        Self::from_accessors(
            move |structure| getter.call1(structure.clone()),
            move |focus, structure| setter.call2(focus, structure.clone()),
        )
    }

    /// The lens whose focus is the whole structure.
    pub fn identity() -> Self {
        Self::from_accessors(|structure| Ok(structure.clone()), |focus, _| Ok(focus))
    }

    pub(crate) fn run(&self, lift: &Lift, structure: &Value) -> Result<Shim> {
        (self.0)(lift, structure)
    }

    /// Focuses through this lens and then through `inner`.
    pub fn compose(&self, inner: &Self) -> Self {
        let outer = self.clone();
        let inner = inner.clone();
        Self::from_runner(move |lift, structure| {
            let inner = inner.clone();
            let through = lift.through(move |lift, focus| inner.run(lift, &focus));
            outer.run(&through, structure)
        })
    }

    /// Reads the focus.
    ///
    /// # Errors
    ///
    /// Propagates failures of the getter.
    pub fn view(&self, structure: &Value) -> Result<Value> {
        self.run(&Access::Get.lift(), structure)
            .map(Shim::into_value)
    }

    /// Returns a copy of `structure` with the focus replaced by `transform(focus)`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the getter, the setter and `transform`.
    pub fn over(&self, transform: &Function, structure: &Value) -> Result<Value> {
        self.run(&Access::Transform(transform.clone()).lift(), structure)
            .map(Shim::into_value)
    }

    /// Returns a copy of `structure` with the focus replaced by `value`.
    ///
    /// # Errors
    ///
    /// See [`Lens::over`].
    pub fn set(&self, value: impl Into<Value>, structure: &Value) -> Result<Value> {
        self.over(&always(value), structure)
    }

    /// Returns `true` when both handles are the same lens.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Lens {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[Lens]")
    }
}

/// A lens over a single property of an object, array, string, instance or
/// associative container.
///
/// Reading a missing property, or reading through `Undefined`/`Null`, yields
/// `Undefined`. Writing preserves every other key and the kind of the
/// structure, and writes into `Undefined`/`Null` create a fresh object.
///
/// # Errors
///
/// Returns [`FpError::InvalidArgument`] when `key` is not a string or number.
/// Writes through the lens fail with [`FpError::TypeMismatch`] when the
/// structure cannot hold the key.
pub fn lens_prop(key: impl Into<Value>) -> Result<Lens> {
    let key = PropertyKey::from_value("lens_prop", &key.into())?;
    let setter_key = key.clone();
    Ok(Lens::from_accessors(
        move |structure| get_property(structure, &key),
        move |focus, structure| assoc_property("lens_prop", structure, &setter_key, focus),
    ))
}

/// A lens over a path of property keys, outermost first.
///
/// Reads through missing levels yield `Undefined`; writes materialize each
/// missing level as an empty object.
///
/// # Errors
///
/// Returns [`FpError::InvalidArgument`] when `path` is not an array or one of
/// its keys is not a string or number.
///
/// # Examples
///
/// ```
/// use pointfree::optics::path_lens;
/// use pointfree::Value;
///
/// let street = path_lens(&Value::array([Value::from("address"), Value::from("street")]))?;
/// let moved = street.set("Oak Ave", &Value::object([("name", "Rich")]))?;
/// assert_eq!(moved.to_string(), r#"{address: {street: "Oak Ave"}, name: "Rich"}"#);
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn path_lens(path: &Value) -> Result<Lens> {
    let keys = path.as_array().ok_or_else(|| {
        FpError::invalid_argument(
            "path_lens",
            format!("path must be an array, found {}", path.kind()),
        )
    })?;
    trace!(depth = keys.len(), "building path lens");
    let lenses = keys
        .to_vec()
        .into_iter()
        .map(lens_prop)
        .collect::<Result<Vec<_>>>()?;
    Ok(compose_lenses(lenses).unwrap_or_else(Lens::identity))
}
