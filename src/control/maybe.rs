//! Maybe - an optional value that can travel through collection operations.
//!
//! [`find`](crate::collection::find), [`head`](crate::collection::head) and
//! [`last`](crate::collection::last) report absence through `Maybe::Nothing`
//! rather than through `Undefined`. `Maybe` is a [`Container`], so
//! [`map`](crate::collection::map) and friends dispatch into it.
//!
//! # Examples
//!
//! ```rust
//! use pointfree::collection::map;
//! use pointfree::control::Maybe;
//! use pointfree::{Function, Value};
//!
//! let double = Function::unary("double", |value| {
//!     Ok(Value::from(value.as_number().unwrap_or(0.0) * 2.0))
//! });
//!
//! let present = map().call2(double.clone(), Maybe::of(21))?;
//! assert_eq!(Maybe::from_value(&present), Value::from(42));
//!
//! let absent = map().call2(double, Maybe::nothing())?;
//! assert_eq!(Maybe::from_value(&absent), Value::Undefined);
//! # Ok::<(), pointfree::FpError>(())
//! ```

use std::any::Any;

use crate::error::Result;
use crate::value::{Container, Function, Value};

/// An optional value.
#[derive(Debug, Clone, Default)]
pub enum Maybe {
    /// A present value.
    Just(Value),
    /// Absence.
    #[default]
    Nothing,
}

impl Maybe {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value`; `Undefined` and `Null` become `Nothing`.
    pub fn of(value: impl Into<Value>) -> Self {
        match value.into() {
            value if value.is_nil() => Self::Nothing,
            value => Self::Just(value),
        }
    }

    /// The absent value.
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Just`.
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// The wrapped value, or `Undefined`.
    pub fn value(&self) -> Value {
        match self {
            Self::Just(value) => value.clone(),
            Self::Nothing => Value::Undefined,
        }
    }

    /// The wrapped value, or `default`.
    pub fn with_default(&self, default: impl Into<Value>) -> Value {
        match self {
            Self::Just(value) => value.clone(),
            Self::Nothing => default.into(),
        }
    }

    /// Converts into an `Option`.
    pub fn into_option(self) -> Option<Value> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Extracts from a value holding a `Maybe`; any other value is returned as is.
    pub fn from_value(value: &Value) -> Value {
        value
            .downcast_custom::<Self>()
            .map_or_else(|| value.clone(), Self::value)
    }
}

impl From<Maybe> for Value {
    fn from(maybe: Maybe) -> Self {
        Self::custom(maybe)
    }
}

impl From<Option<Value>> for Maybe {
    fn from(option: Option<Value>) -> Self {
        option.map_or(Self::Nothing, Self::of)
    }
}

impl Container for Maybe {
    fn type_name(&self) -> &str {
        "Maybe"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn map(&self, function: &Function) -> Option<Result<Value>> {
        Some(match self {
            Self::Just(value) => function.call1(value.clone()).map(|mapped| Self::of(mapped).into()),
            Self::Nothing => Ok(Self::Nothing.into()),
        })
    }

    fn filter(&self, predicate: &Function) -> Option<Result<Value>> {
        Some(match self {
            Self::Just(value) => predicate.call1(value.clone()).map(|kept| {
                if kept.is_truthy() {
                    self.clone().into()
                } else {
                    Self::Nothing.into()
                }
            }),
            Self::Nothing => Ok(Self::Nothing.into()),
        })
    }

    fn some(&self, predicate: &Function) -> Option<Result<bool>> {
        Some(match self {
            Self::Just(value) => predicate.call1(value.clone()).map(|result| result.is_truthy()),
            Self::Nothing => Ok(false),
        })
    }

    fn every(&self, predicate: &Function) -> Option<Result<bool>> {
        Some(match self {
            Self::Just(value) => predicate.call1(value.clone()).map(|result| result.is_truthy()),
            Self::Nothing => Ok(true),
        })
    }

    fn find(&self, predicate: &Function) -> Option<Result<Option<Value>>> {
        Some(match self {
            Self::Just(value) => predicate
                .call1(value.clone())
                .map(|kept| kept.is_truthy().then(|| value.clone())),
            Self::Nothing => Ok(None),
        })
    }

    fn reduce(&self, seed: Value, reducer: &Function) -> Option<Result<Value>> {
        Some(match self {
            Self::Just(value) => reducer.call2(seed, value.clone()),
            Self::Nothing => Ok(seed),
        })
    }

    fn equals(&self, other: &Value) -> Option<bool> {
        let other = other.downcast_custom::<Self>()?;
        Some(match (self, other) {
            (Self::Just(left), Self::Just(right)) => left.strict_equals(right),
            (Self::Nothing, Self::Nothing) => true,
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined)]
    #[case(Value::Null)]
    fn nil_values_are_nothing(#[case] value: Value) {
        assert!(Maybe::of(value).is_nothing());
    }

    #[rstest]
    #[case(Value::from(0))]
    #[case(Value::from(false))]
    #[case(Value::from(""))]
    fn falsy_values_are_still_present(#[case] value: Value) {
        assert!(Maybe::of(value).is_just());
    }

    #[rstest]
    fn with_default_substitutes_absence() {
        assert_eq!(Maybe::nothing().with_default(5), Value::from(5));
        assert_eq!(Maybe::of(1).with_default(5), Value::from(1));
    }

    #[rstest]
    fn into_option_round_trips() {
        assert_eq!(Maybe::of(1).into_option(), Some(Value::from(1)));
        assert_eq!(Maybe::nothing().into_option(), None);
    }

    #[rstest]
    fn equality_compares_contents() {
        assert_eq!(Maybe::of(1).equals(&Maybe::of(1).into()), Some(true));
        assert_eq!(Maybe::of(1).equals(&Maybe::nothing().into()), Some(false));
        assert_eq!(Maybe::nothing().equals(&Value::from(1)), None);
    }

    #[rstest]
    fn filter_drops_rejected_values() {
        let positive = Function::unary("positive", |value| {
            Ok(Value::from(value.as_number().is_some_and(|number| number > 0.0)))
        });
        let kept = Maybe::of(-1).filter(&positive).unwrap().unwrap();
        assert!(kept.downcast_custom::<Maybe>().is_some_and(Maybe::is_nothing));
    }

    #[rstest]
    fn reduce_folds_the_present_value() {
        let add = Function::binary("add", |left, right| {
            Ok(Value::from(left.as_number().unwrap_or(0.0) + right.as_number().unwrap_or(0.0)))
        });
        assert_eq!(Maybe::of(2).reduce(Value::from(1), &add).unwrap().unwrap(), Value::from(3));
        assert_eq!(Maybe::nothing().reduce(Value::from(1), &add).unwrap().unwrap(), Value::from(1));
    }
}
