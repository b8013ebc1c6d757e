//! # pointfree
//!
//! Point-free combinators over a dynamic value model: a placeholder-aware
//! curry engine, van Laarhoven lenses and curried collection operators.
//!
//! ## Overview
//!
//! Every combinator in this crate is a [`Function`]: a reference-counted
//! callable over a list of [`Value`]s. Combinators are defined once and then
//! curried through [`compose::curry`], so they can be called one argument at
//! a time, all at once, or with [`compose::__`] placeholders leaving slots
//! open for later.
//!
//! - **Curry Engine**: [`compose::curry`], [`compose::make_curried`], `curry1`..`curry6`
//! - **Composition**: [`compose::flow`], [`compose::compose`] (functions or lenses)
//! - **Optics**: [`optics::lens_prop`], [`optics::path_lens`], [`optics::mapped`],
//!   [`optics::view`], [`optics::over`], [`optics::set`]
//! - **Collections**: `map`, `filter`, `reduce`, `find`, `uniq_by`, `zip_by`,
//!   [`collection::memoize`] and friends
//! - **Equality**: [`equality::eq`], [`equality::deep_eq`] with cycle detection
//! - **Control**: [`control::Maybe`], [`control::safe`], [`control::either`],
//!   [`control::match_on`], [`control::cond`]
//!
//! ## Feature Flags
//!
//! - `serde`: conversions between [`Value`] and `serde_json::Value`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let data = Value::object([
//!     ("name", Value::from("Rich")),
//!     (
//!         "addresses",
//!         Value::array([
//!             Value::object([("street", "A")]),
//!             Value::object([("street", "B")]),
//!         ]),
//!     ),
//! ]);
//!
//! let first_street = flow([
//!     Value::from(lens_prop("street")?),
//!     Value::from(lens_prop(0)?),
//!     Value::from(lens_prop("addresses")?),
//! ])?;
//!
//! assert_eq!(view().call2(first_street.clone(), data.clone())?, Value::from("A"));
//!
//! let moved = set().call(&[first_street.clone(), Value::from("Z"), data.clone()])?;
//! assert_eq!(view().call2(first_street.clone(), moved)?, Value::from("Z"));
//! assert_eq!(view().call2(first_street, data)?, Value::from("A"));
//! # Ok::<(), pointfree::FpError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model and every combinator module.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::equality::*;
    pub use crate::error::{FpError, Result};
    pub use crate::optics::*;
    pub use crate::value::{
        Array, Class, Container, Function, Instance, Object, Shape, Value, ValueKind,
    };
    pub use crate::values;
}

pub mod collection;
pub mod compose;
pub mod control;
pub mod equality;
pub mod error;
pub mod optics;
pub mod value;

pub use error::{FpError, Result};
pub use value::{Array, Class, Container, Function, Instance, Object, Shape, Value, ValueKind};
