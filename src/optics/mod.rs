//! Optics for immutable updates of dynamic values.
//!
//! A lens focuses on one part of a larger value. It can read that part
//! ([`view`]), replace it ([`set`]) or transform it ([`over`]), always
//! returning a new structure and sharing everything off the path with the
//! input.
//!
//! # Available Optics
//!
//! - [`Lens`]: the lens type, with [`Lens::view`], [`Lens::over`], [`Lens::set`]
//!   and [`Lens::compose`]
//! - [`lens_prop`]: focus on one property or index
//! - [`path_lens`]: focus along a path of keys
//! - [`mapped`]: focus on every element of a collection
//! - [`lens`]: build a lens from a getter and a setter function
//!
//! Lenses are values too: they can be stored in a [`Value`](crate::Value)
//! and composed with [`flow`](crate::compose::flow), where the first lens is
//! the innermost focus.
//!
//! # Example
//!
//! ```
//! use pointfree::compose::flow;
//! use pointfree::optics::{lens_prop, mapped, over};
//! use pointfree::{Function, Value};
//!
//! let team = Value::object([(
//!     "members",
//!     Value::array([
//!         Value::object([("name", "ana")]),
//!         Value::object([("name", "bo")]),
//!     ]),
//! )]);
//!
//! let names = flow([
//!     Value::from(lens_prop("name")?),
//!     Value::from(mapped()),
//!     Value::from(lens_prop("members")?),
//! ])?;
//! let shout = Value::from(Function::unary("shout", |name| {
//!     Ok(Value::from(name.as_str().unwrap_or_default().to_uppercase()))
//! }));
//!
//! let loud = over().call(&[names, shout, team])?;
//! assert_eq!(loud.to_string(), r#"{members: [{name: "ANA"}, {name: "BO"}]}"#);
//! # Ok::<(), pointfree::FpError>(())
//! ```

mod lens;
mod operations;
mod shim;

pub use lens::{Lens, lens_prop, path_lens};
pub use operations::{lens, mapped, over, set, view};
