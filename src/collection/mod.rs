//! Curried collection combinators.
//!
//! Every combinator here is a [`Function`](crate::Function) curried at its
//! documented arity, so `map().call1(f)` is a reusable "map with f".
//!
//! # Overview
//!
//! - [`map`], [`filter`], [`some`], [`every`], [`reduce`], [`find`], [`pluck`],
//!   [`tap`]: polymorphic over arrays, custom containers and scalars
//! - [`uniq_by`], [`difference_by`], [`intersection_by`], [`difference`]:
//!   set operations keyed by a derived value
//! - [`head`], [`last`], [`tail`], [`unwrap`], [`array_wrap`], [`times`],
//!   [`x_prod`], [`zip_by`], [`zip_object`], [`shallow_clone`], [`chain_l`]:
//!   sequence helpers
//! - [`memoize`]: identity-keyed result caching

mod dispatch;
mod memoize;
mod sequence;
mod set;

pub(crate) use dispatch::map_with;
pub use dispatch::{every, filter, find, map, pluck, reduce, some, tap};
pub use memoize::memoize;
pub use sequence::{
    array_wrap, chain_l, head, last, shallow_clone, tail, times, unwrap, x_prod, zip_by,
    zip_object,
};
pub use set::{difference, difference_by, intersection_by, uniq_by};
