//! The two functors a lens is run with.
//!
//! `Const` ignores the setter and carries the focus out unchanged, which is
//! how `view` reads. `Identity` runs the setter on the transformed focus,
//! which is how `over` and `set` write.

use std::rc::Rc;

use crate::error::Result;
use crate::value::{Function, Value};

#[derive(Debug, Clone)]
pub(crate) enum Shim {
    Const(Value),
    Identity(Value),
}

impl Shim {
    pub(crate) fn map<F>(self, function: F) -> Result<Self>
    where
        F: FnOnce(Value) -> Result<Value>,
    {
        match self {
            Self::Const(value) => Ok(Self::Const(value)),
            Self::Identity(value) => function(value).map(Self::Identity),
        }
    }

    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::Const(value) | Self::Identity(value) => value,
        }
    }
}

/// Lifts a focus into a functor.
///
/// Remembers which functor it lifts into, so that a runner visiting many
/// foci (or none) can still answer with the right one.
#[derive(Clone)]
pub(crate) struct Lift {
    reading: bool,
    apply: Rc<dyn Fn(Value) -> Result<Shim>>,
}

impl Lift {
    pub(crate) fn call(&self, focus: Value) -> Result<Shim> {
        (self.apply)(focus)
    }

    /// Wraps a finished value in the functor this lift produces.
    pub(crate) fn wrap(&self, value: Value) -> Shim {
        if self.reading {
            Shim::Const(value)
        } else {
            Shim::Identity(value)
        }
    }

    /// A lift into the same functor that first runs `step` on the focus.
    pub(crate) fn through<F>(&self, step: F) -> Self
    where
        F: Fn(&Self, Value) -> Result<Shim> + 'static,
    {
        let lift = self.clone();
        Self {
            reading: self.reading,
            apply: Rc::new(move |focus| step(&lift, focus)),
        }
    }
}

/// What a lens is run for.
#[derive(Debug, Clone)]
pub(crate) enum Access {
    Get,
    Transform(Function),
}

impl Access {
    pub(crate) fn lift(self) -> Lift {
        match self {
            Self::Get => Lift {
                reading: true,
                apply: Rc::new(|focus| Ok(Shim::Const(focus))),
            },
            Self::Transform(transform) => Lift {
                reading: false,
                apply: Rc::new(move |focus| transform.call1(focus).map(Shim::Identity)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn const_ignores_map() {
        let shim = Shim::Const(Value::from(1))
            .map(|_| Ok(Value::from(2)))
            .unwrap();
        assert_eq!(shim.into_value(), Value::from(1));
    }

    #[rstest]
    fn identity_applies_map() {
        let shim = Shim::Identity(Value::from(1))
            .map(|_| Ok(Value::from(2)))
            .unwrap();
        assert_eq!(shim.into_value(), Value::from(2));
    }

    #[rstest]
    fn transform_access_runs_the_function() {
        let negate = Function::unary("negate", |value| Ok(Value::from(!value.is_truthy())));
        let lifted = Access::Transform(negate).lift().call(Value::from(true)).unwrap();
        assert!(matches!(lifted, Shim::Identity(Value::Bool(false))));
    }

    #[rstest]
    fn through_keeps_the_functor() {
        let reading = Access::Get.lift();
        let doubled = reading.through(|lift, focus| {
            lift.call(Value::from(focus.as_number().unwrap_or(0.0) * 2.0))
        });
        assert!(matches!(doubled.call(Value::from(2)).unwrap(), Shim::Const(Value::Number(4.0))));
        assert!(matches!(doubled.wrap(Value::Null), Shim::Const(Value::Null)));
    }
}
