//! Curried lens operations.

use super::lens::Lens;
use super::shim::Shim;
use crate::collection::map_with;
use crate::compose::{curry2, curry3};
use crate::error::{FpError, Result};
use crate::value::{Function, Value};

fn expect_lens<'a>(operation: &'static str, value: &'a Value) -> Result<&'a Lens> {
    value
        .as_lens()
        .ok_or_else(|| FpError::type_mismatch(operation, "a lens", value))
}

/// `lens(getter)(setter)`: builds a lens from two functions.
///
/// `getter(structure)` reads the focus and `setter(focus, structure)` returns
/// a new structure.
pub fn lens() -> Function {
    curry2("lens", |getter, setter| {
        let getter = getter.expect_function("lens")?.clone();
        let setter = setter.expect_function("lens")?.clone();
        Ok(Value::Lens(Lens::new(getter, setter)))
    })
}

/// `view(lens)(structure)`: reads the focus.
///
/// # Examples
///
/// ```
/// use pointfree::optics::{lens_prop, view};
/// use pointfree::Value;
///
/// let name = view().call1(lens_prop("name")?)?;
/// assert_eq!(name.call1(Value::object([("name", "Rich")]))?, Value::from("Rich"));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn view() -> Function {
    curry2("view", |lens, structure| {
        expect_lens("view", &lens)?.view(&structure)
    })
}

/// `over(lens)(transform)(structure)`: replaces the focus with
/// `transform(focus)` in a copy of `structure`.
pub fn over() -> Function {
    curry3("over", |lens, transform, structure| {
        let transform = transform.expect_function("over")?;
        expect_lens("over", &lens)?.over(transform, &structure)
    })
}

/// `set(lens)(value)(structure)`: `over(lens)(always(value))(structure)`.
pub fn set() -> Function {
    curry3("set", |lens, value, structure| {
        expect_lens("set", &lens)?.set(value, &structure)
    })
}

/// A lens focusing on every element of a collection at once.
///
/// Composed outside another lens, it reads that lens across every element
/// (returning an array of foci) and writes through it element-wise, keeping
/// order and length. Anything that is not an array is treated as a single
/// element, and custom containers are mapped through their own `map`.
///
/// # Examples
///
/// ```
/// use pointfree::optics::{lens_prop, mapped};
/// use pointfree::Value;
///
/// let ids = mapped().compose(&lens_prop("id")?);
/// let rows = Value::array([Value::object([("id", 1)]), Value::object([("id", 2)])]);
///
/// assert_eq!(ids.view(&rows)?.to_string(), "[1, 2]");
/// assert_eq!(ids.set(0, &rows)?.to_string(), "[{id: 0}, {id: 0}]");
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn mapped() -> Lens {
    Lens::from_runner(|lift, structure| {
        let each_lift = lift.clone();
        let each = Function::unary("mapped", move |item| {
            each_lift.call(item).map(Shim::into_value)
        });
        map_with(&each, structure).map(|foci| lift.wrap(foci))
    })
}
