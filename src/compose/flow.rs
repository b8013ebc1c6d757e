//! Left-to-right and right-to-left composition, plus argument plumbing.

use super::curry::{curry, curry2};
use super::utils::identity;
use crate::error::{FpError, Result};
use crate::optics::Lens;
use crate::value::{Function, Value};

/// Composes steps left to right.
///
/// A chain of functions becomes a function: the first step receives every
/// call argument and each later step receives the previous result. A chain
/// of lenses becomes a lens whose first step is the innermost focus, so
/// `flow([street, first, addresses])` reads `addresses[0].street`. An empty
/// chain is [`identity`].
///
/// # Errors
///
/// Returns [`FpError::InvalidArgument`] when a step is neither a function nor
/// a lens, or when functions and lenses are mixed.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::{curry2, flow};
/// use pointfree::Value;
///
/// let add = curry2("add", |left, right| {
///     Ok(Value::from(left.as_number().unwrap_or(0.0) + right.as_number().unwrap_or(0.0)))
/// });
/// let double = curry2("multiply", |left, right| {
///     Ok(Value::from(left.as_number().unwrap_or(0.0) * right.as_number().unwrap_or(0.0)))
/// })
/// .call1(2)?;
///
/// let add_then_double = flow([Value::from(add), double])?;
/// assert_eq!(add_then_double.call2(1, 2)?, Value::from(6));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn flow(steps: impl IntoIterator<Item = Value>) -> Result<Value> {
    let steps: Vec<Value> = steps.into_iter().collect();

    if steps.is_empty() {
        return Ok(Value::Function(identity()));
    }

    if steps.iter().all(|step| step.as_lens().is_some()) {
        let composed = compose_lenses(steps.iter().rev().filter_map(Value::as_lens).cloned());
        return Ok(composed.map_or_else(|| Value::Function(identity()), Value::Lens));
    }

    let mut functions = steps
        .iter()
        .enumerate()
        .map(|(position, step)| {
            step.as_function().cloned().ok_or_else(|| {
                FpError::invalid_argument(
                    "flow",
                    format!(
                        "steps must be all functions or all lenses, found {} at position {position}",
                        step.kind()
                    ),
                )
            })
        })
        .collect::<Result<Vec<Function>>>()?
        .into_iter();

    let Some(first) = functions.next() else {
        return Ok(Value::Function(identity()));
    };
    let rest: Vec<Function> = functions.collect();

    Ok(Value::Function(Function::new("flow", move |arguments| {
        rest.iter()
            .try_fold(first.call(arguments)?, |value, step| step.call1(value))
    })))
}

/// Composes steps right to left: `compose(steps)` is `flow(steps.reverse())`.
///
/// # Errors
///
/// See [`flow`].
pub fn compose(steps: impl IntoIterator<Item = Value>) -> Result<Value> {
    let mut steps: Vec<Value> = steps.into_iter().collect();
    steps.reverse();
    flow(steps)
}

/// Composes lenses with the outermost first: `compose_lenses([outer, inner])`.
pub fn compose_lenses(lenses: impl IntoIterator<Item = Lens>) -> Option<Lens> {
    lenses.into_iter().reduce(|outer, inner| outer.compose(&inner))
}

/// `invoke(function)(arguments)`: applies `function` to an array of arguments.
///
/// Fails with [`FpError::Invocation`] when `arguments` is not an array.
pub fn invoke() -> Function {
    curry2("invoke", |function, arguments| apply_to(&function, &arguments))
}

fn apply_to(function: &Value, arguments: &Value) -> Result<Value> {
    let arguments = arguments.as_array().ok_or_else(|| FpError::Invocation {
        found: arguments.kind().to_string(),
    })?;
    function.call(&arguments.to_vec())
}

/// Collects a variadic call into a single array argument for `function`.
pub fn wrap_args(function: Function) -> Function {
    Function::new("wrap_args", move |arguments| {
        function.call1(Value::array(arguments.to_vec()))
    })
}

/// `flip(arity)(function)`: curries `function` at `arity` and reverses the
/// argument order of every saturated call.
pub fn flip() -> Function {
    curry2("flip", |arity, function| {
        let arity = arity.expect_count("flip")?;
        let function = function.expect_function("flip")?.clone();
        let flipped = Function::new("flip", move |arguments| {
            let reversed: Vec<Value> = arguments.iter().rev().cloned().collect();
            function.call(&reversed)
        });
        Ok(Value::Function(curry(arity, flipped)))
    })
}

/// `map_fn(functions)(arguments)`: invokes every function with the same
/// argument array and collects the results.
pub fn map_fn() -> Function {
    curry2("map_fn", |functions, arguments| {
        functions
            .expect_array("map_fn")?
            .to_vec()
            .iter()
            .map(|function| apply_to(function, &arguments))
            .collect::<Result<Vec<_>>>()
            .map(Value::from)
    })
}
