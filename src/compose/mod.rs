//! Function composition utilities.
//!
//! This module holds the curry engine every other combinator is built on,
//! together with composition and argument plumbing.
//!
//! # Overview
//!
//! - [`curry`] / [`make_curried`]: arity-aware partial application with placeholders
//! - [`curry1`] through [`curry6`]: curry closures over a fixed number of values
//! - [`__`]: the placeholder sentinel
//! - [`flow`]: compose left to right (data flow style), functions or lenses
//! - [`compose`]: compose right to left (mathematical composition)
//! - [`invoke`], [`wrap_args`], [`flip`], [`map_fn`]: argument plumbing
//!
//! # Helper Functions
//!
//! - [`identity`], [`always`], [`always_true`], [`always_false`], [`noop`]
//! - [`not`], [`and`], [`or`], [`any_pass`]
//! - [`once`]
//!
//! # Examples
//!
//! ## Currying with placeholders
//!
//! ```
//! use pointfree::compose::{__, curry2};
//! use pointfree::Value;
//!
//! let subtract = curry2("subtract", |left, right| {
//!     Ok(Value::from(left.as_number().unwrap_or(0.0) - right.as_number().unwrap_or(0.0)))
//! });
//!
//! // Fix the second argument, leave the first open.
//! let minus_one = subtract.call(&[__, Value::from(1)])?;
//! assert_eq!(minus_one.call1(10)?, Value::from(9));
//! # Ok::<(), pointfree::FpError>(())
//! ```
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use pointfree::compose::{flow, not};
//! use pointfree::Value;
//!
//! let is_blank = Value::function("is_blank", |arguments| {
//!     Ok(Value::from(arguments.first().and_then(Value::as_str).is_some_and(|text| text.trim().is_empty())))
//! });
//! let has_content = flow([is_blank, Value::from(not())])?;
//! assert_eq!(has_content.call1("  ")?, Value::from(false));
//! # Ok::<(), pointfree::FpError>(())
//! ```
//!
//! # Mathematical Background
//!
//! Composition is associative: `flow([f, flow([g, h])])` and
//! `flow([flow([f, g]), h])` compute the same function, and [`identity`] is
//! its unit. The same holds for lenses, where composing an outer lens with
//! an inner one focuses through both.

mod curry;
mod flow;
mod utils;

pub use curry::{__, curry, curry1, curry2, curry3, curry4, curry5, curry6, make_curried};
pub use flow::{compose, compose_lenses, flip, flow, invoke, map_fn, wrap_args};
pub use utils::{always, always_false, always_true, and, any_pass, identity, noop, not, once, or};
