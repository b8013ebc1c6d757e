//! Polymorphic collection operations.
//!
//! Each operation resolves its target through [`Value::shape`]: arrays are
//! iterated, custom containers are asked for the capability, and anything
//! else (including a container lacking the capability) receives the function
//! directly. Functions are always called with exactly one argument.

use std::cell::RefCell;
use std::rc::Rc;

use crate::compose::{curry2, curry3};
use crate::control::Maybe;
use crate::error::Result;
use crate::value::{Container, Function, PropertyKey, Shape, Value, get_property};

/// Restricts `function` to its first argument.
fn unary(function: &Function) -> Function {
    let function = function.clone();
    Function::unary(function.name().to_owned(), move |value| function.call1(value))
}

fn binary(function: &Function) -> Function {
    let function = function.clone();
    Function::binary(function.name().to_owned(), move |accumulator, value| {
        function.call2(accumulator, value)
    })
}

pub(crate) fn map_with(function: &Function, target: &Value) -> Result<Value> {
    match target.shape() {
        Shape::Sequence(array) => array
            .to_vec()
            .into_iter()
            .map(|item| function.call1(item))
            .collect::<Result<Vec<_>>>()
            .map(Value::from),
        Shape::Custom(container) => container
            .map(&unary(function))
            .unwrap_or_else(|| function.call1(target.clone())),
        Shape::Scalar(value) => function.call1(value.clone()),
    }
}

fn filter_with(predicate: &Function, target: &Value) -> Result<Value> {
    match target.shape() {
        Shape::Sequence(array) => {
            let mut kept = Vec::new();
            for item in array.to_vec() {
                if predicate.call1(item.clone())?.is_truthy() {
                    kept.push(item);
                }
            }
            Ok(Value::from(kept))
        }
        Shape::Custom(container) => container
            .filter(&unary(predicate))
            .unwrap_or_else(|| predicate.call1(target.clone())),
        Shape::Scalar(value) => predicate.call1(value.clone()),
    }
}

fn some_with(predicate: &Function, target: &Value) -> Result<bool> {
    match target.shape() {
        Shape::Sequence(array) => {
            for item in array.to_vec() {
                if predicate.call1(item)?.is_truthy() {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Shape::Custom(container) => container
            .some(&unary(predicate))
            .unwrap_or_else(|| Ok(predicate.call1(target.clone())?.is_truthy())),
        Shape::Scalar(value) => Ok(predicate.call1(value.clone())?.is_truthy()),
    }
}

fn every_with(predicate: &Function, target: &Value) -> Result<bool> {
    match target.shape() {
        Shape::Sequence(array) => {
            for item in array.to_vec() {
                if !predicate.call1(item)?.is_truthy() {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Shape::Custom(container) => container
            .every(&unary(predicate))
            .unwrap_or_else(|| Ok(predicate.call1(target.clone())?.is_truthy())),
        Shape::Scalar(value) => Ok(predicate.call1(value.clone())?.is_truthy()),
    }
}

fn reduce_with(seed: Value, reducer: &Function, target: &Value) -> Result<Value> {
    let seed = match seed {
        Value::Function(produce) => produce.call0()?,
        seed => seed,
    };
    match target.shape() {
        Shape::Sequence(array) => array
            .to_vec()
            .into_iter()
            .try_fold(seed, |accumulator, item| reducer.call2(accumulator, item)),
        Shape::Custom(container) => container
            .reduce(seed.clone(), &binary(reducer))
            .unwrap_or_else(|| reducer.call2(seed, target.clone())),
        Shape::Scalar(value) => reducer.call2(seed, value.clone()),
    }
}

/// `map(function)(target)`.
///
/// # Examples
///
/// ```
/// use pointfree::collection::map;
/// use pointfree::{Function, Value};
///
/// let length = Function::unary("length", |text| {
///     Ok(Value::from(text.as_str().map_or(0, str::len)))
/// });
/// let lengths = map().call2(length.clone(), Value::array(["a", "bcd"]))?;
/// assert_eq!(lengths.to_string(), "[1, 3]");
///
/// // Scalars receive the function directly.
/// assert_eq!(map().call2(length, "four")?, Value::from(4));
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn map() -> Function {
    curry2("map", |function, target| {
        map_with(function.expect_function("map")?, &target)
    })
}

/// `filter(predicate)(target)`: keeps elements for which `predicate` is truthy.
pub fn filter() -> Function {
    curry2("filter", |predicate, target| {
        filter_with(predicate.expect_function("filter")?, &target)
    })
}

/// `some(predicate)(target)`.
pub fn some() -> Function {
    curry2("some", |predicate, target| {
        some_with(predicate.expect_function("some")?, &target).map(Value::from)
    })
}

/// `every(predicate)(target)`.
pub fn every() -> Function {
    curry2("every", |predicate, target| {
        every_with(predicate.expect_function("every")?, &target).map(Value::from)
    })
}

/// `reduce(seed)(reducer)(target)`: folds with `reducer(accumulator, element)`.
///
/// A function seed is called with no arguments to produce a fresh seed for
/// every fold.
///
/// # Examples
///
/// ```
/// use pointfree::collection::reduce;
/// use pointfree::{Function, Value};
///
/// let append = Function::binary("append", |accumulator, item| {
///     let mut items = accumulator.as_array().map(|array| array.to_vec()).unwrap_or_default();
///     items.push(item);
///     Ok(Value::from(items))
/// });
/// let fresh = Function::new("fresh", |_| Ok(Value::array(Vec::<Value>::new())));
///
/// let collected = reduce().call(&[fresh.into(), append.into(), Value::array([1, 2])])?;
/// assert_eq!(collected.to_string(), "[1, 2]");
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn reduce() -> Function {
    curry3("reduce", |seed, reducer, target| {
        reduce_with(seed, reducer.expect_function("reduce")?, &target)
    })
}

/// Searches a custom container: its own `find` first, then a fold that
/// remembers the first match, then the container itself as a scalar.
fn find_in(
    container: &dyn Container,
    predicate: &Function,
    target: &Value,
) -> Result<Option<Value>> {
    if let Some(found) = container.find(&unary(predicate)) {
        return found;
    }
    let first: Rc<RefCell<Option<Value>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&first);
    let test = predicate.clone();
    let remember = Function::binary("find", move |accumulator, item| {
        let pending = slot.borrow().is_none();
        if pending && test.call1(item.clone())?.is_truthy() {
            *slot.borrow_mut() = Some(item);
        }
        Ok(accumulator)
    });
    if let Some(folded) = container.reduce(Value::Undefined, &remember) {
        folded?;
        return Ok(first.take());
    }
    Ok(predicate
        .call1(target.clone())?
        .is_truthy()
        .then(|| target.clone()))
}

/// `find(predicate)(target)`: the first truthy element wrapped in a [`Maybe`].
///
/// Custom containers are searched through their `find` capability, falling
/// back to `reduce`. The result is always an element, never the container.
pub fn find() -> Function {
    curry2("find", |predicate, target| {
        let predicate = predicate.expect_function("find")?;
        let found = match target.shape() {
            Shape::Sequence(array) => {
                let mut found = None;
                for item in array.to_vec() {
                    if predicate.call1(item.clone())?.is_truthy() {
                        found = Some(item);
                        break;
                    }
                }
                found
            }
            Shape::Custom(container) => find_in(container, predicate, &target)?,
            Shape::Scalar(value) => predicate
                .call1(value.clone())?
                .is_truthy()
                .then(|| value.clone()),
        };
        Ok(Maybe::of(found).into())
    })
}

/// `pluck(key)(target)`: reads `key` from every element.
pub fn pluck() -> Function {
    curry2("pluck", |key, target| {
        let key = PropertyKey::from_value("pluck", &key)?;
        let getter = Function::unary("pluck", move |item| get_property(&item, &key));
        map_with(&getter, &target)
    })
}

/// `tap(function)(target)`: calls `function` on every element (or on a
/// scalar target itself) and returns `target` unchanged.
pub fn tap() -> Function {
    curry2("tap", |function, target| {
        let function = function.expect_function("tap")?;
        match target.shape() {
            Shape::Sequence(array) => {
                for item in array.to_vec() {
                    function.call1(item)?;
                }
            }
            Shape::Custom(_) | Shape::Scalar(_) => {
                function.call1(target.clone())?;
            }
        }
        Ok(target)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FpError;
    use crate::values;
    use rstest::rstest;

    fn is_even() -> Value {
        Value::from(Function::unary("is_even", |value| {
            Ok(Value::from(value.as_number().is_some_and(|number| number % 2.0 == 0.0)))
        }))
    }

    fn numbers() -> Value {
        Value::array([1, 2, 3, 4])
    }

    #[rstest]
    fn map_calls_the_function_with_one_argument() {
        let arity = Value::function("arity", |arguments| Ok(Value::from(arguments.len())));
        assert_eq!(map().call2(arity, numbers()).unwrap().to_string(), "[1, 1, 1, 1]");
    }

    #[rstest]
    fn filter_keeps_truthy_elements() {
        assert_eq!(filter().call2(is_even(), numbers()).unwrap().to_string(), "[2, 4]");
    }

    #[rstest]
    fn filter_applies_directly_to_scalars() {
        assert_eq!(filter().call2(is_even(), 3).unwrap(), Value::from(false));
    }

    #[rstest]
    #[case(numbers(), true, false)]
    #[case(Value::array([2, 4]), true, true)]
    #[case(Value::array(Vec::<Value>::new()), false, true)]
    fn some_and_every(#[case] target: Value, #[case] any: bool, #[case] all: bool) {
        assert_eq!(some().call2(is_even(), target.clone()).unwrap(), Value::from(any));
        assert_eq!(every().call2(is_even(), target).unwrap(), Value::from(all));
    }

    #[rstest]
    fn reduce_passes_accumulator_first() {
        let subtract = Value::from(Function::binary("subtract", |accumulator, item| {
            Ok(Value::from(
                accumulator.as_number().unwrap_or(0.0) - item.as_number().unwrap_or(0.0),
            ))
        }));
        let result = reduce().call(&values![10, subtract, numbers()]).unwrap();
        assert_eq!(result, Value::from(0));
    }

    #[rstest]
    fn reduce_calls_a_function_seed_for_every_fold() {
        let seeds = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&seeds);
        let seed = Value::function("seed", move |_| {
            *counter.borrow_mut() += 1;
            Ok(Value::from(0))
        });
        let add = Value::from(Function::binary("add", |accumulator, item| {
            Ok(Value::from(
                accumulator.as_number().unwrap_or(0.0) + item.as_number().unwrap_or(0.0),
            ))
        }));
        let sum = reduce().call(&[seed, add]).unwrap();
        assert_eq!(sum.call1(numbers()).unwrap(), Value::from(10));
        assert_eq!(sum.call1(numbers()).unwrap(), Value::from(10));
        assert_eq!(*seeds.borrow(), 2);
    }

    #[rstest]
    fn find_wraps_the_first_match() {
        let found = find().call2(is_even(), numbers()).unwrap();
        assert_eq!(Maybe::from_value(&found), Value::from(2));
    }

    #[rstest]
    fn find_reports_absence_as_nothing() {
        let found = find().call2(is_even(), Value::array([1, 3])).unwrap();
        assert!(found.downcast_custom::<Maybe>().is_some_and(Maybe::is_nothing));
    }

    #[rstest]
    fn pluck_reads_a_key_from_each_element() {
        let rows = Value::array([Value::object([("id", 1)]), Value::object([("id", 2)])]);
        assert_eq!(pluck().call2("id", rows).unwrap().to_string(), "[1, 2]");
    }

    #[rstest]
    fn pluck_rejects_invalid_keys() {
        let result = pluck().call2(Value::Null, numbers());
        assert!(matches!(result, Err(FpError::InvalidArgument { operation: "pluck", .. })));
    }

    #[rstest]
    fn tap_returns_the_input() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let record = Value::from(Function::unary("record", move |item| {
            sink.borrow_mut().push(item);
            Ok(Value::Undefined)
        }));
        let input = numbers();
        let output = tap().call2(record, input.clone()).unwrap();
        assert_eq!(output, input);
        assert_eq!(seen.borrow().len(), 4);
    }

    #[rstest]
    fn map_rejects_non_functions() {
        let result = map().call2(1, numbers());
        assert!(matches!(result, Err(FpError::TypeMismatch { operation: "map", .. })));
    }
}
