//! Equality helpers.
//!
//! - [`eq`] / [`equals`]: custom container equality, falling back to strict (`===`) equality
//! - [`eq_fn`]: compare two values after projecting each
//! - [`eq_lens`]: compare two values at the focus of a lens
//! - [`deep_eq`] / [`deep_equals`]: structural equality with cycle detection

mod deep;
mod strict;

pub use deep::{deep_eq, deep_equals};
pub use strict::{eq, eq_fn, eq_lens, equals};
