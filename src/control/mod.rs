//! Control combinators.
//!
//! - [`Maybe`]: the optional container returned by `find`, `head` and `last`
//! - [`safe`]: recover absent arguments and failed calls as a default value
//! - [`either`] / [`recover`]: branch on whether a value is an error
//! - [`match_on`]: dispatch on classes, zero-argument functions or values
//! - [`cond`]: dispatch on predicates

mod matching;
mod maybe;
mod safety;

pub use matching::{cond, match_on};
pub use maybe::Maybe;
pub use safety::{either, recover, safe};
