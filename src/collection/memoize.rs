use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::value::{Function, Value};

struct Entry {
    arguments: Vec<Value>,
    result: Value,
}

impl Entry {
    fn matches(&self, arguments: &[Value]) -> bool {
        self.arguments.len() == arguments.len()
            && self
                .arguments
                .iter()
                .zip(arguments)
                .all(|(cached, argument)| cached.strict_equals(argument))
    }
}

/// Caches the results of `function` by argument list.
///
/// A call hits the cache only when an earlier call had the same number of
/// arguments and every argument is strictly equal (`===`) to the earlier
/// one. Collections therefore hit only when the very same instance is
/// passed again. Failed calls are not cached.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use pointfree::collection::memoize;
/// use pointfree::{Function, Value};
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let count = memoize(Function::new("count", move |arguments| {
///     counter.set(counter.get() + 1);
///     Ok(Value::from(arguments.len()))
/// }));
///
/// count.call2(1, 2)?;
/// count.call2(1, 2)?;
/// assert_eq!(calls.get(), 1);
///
/// count.call3(1, 2, 3)?;
/// assert_eq!(calls.get(), 2);
/// # Ok::<(), pointfree::FpError>(())
/// ```
pub fn memoize(function: Function) -> Function {
    let cache: Rc<RefCell<Vec<Entry>>> = Rc::new(RefCell::new(Vec::new()));
    let name = function.name().to_owned();
    Function::new(name, move |arguments| {
        let hit = cache
            .borrow()
            .iter()
            .find(|entry| entry.matches(arguments))
            .map(|entry| entry.result.clone());
        if let Some(result) = hit {
            debug!(function = function.name(), "memoize cache hit");
            return Ok(result);
        }

        let result = function.call(arguments)?;
        let mut entries = cache.borrow_mut();
        entries.push(Entry {
            arguments: arguments.to_vec(),
            result: result.clone(),
        });
        debug!(
            function = function.name(),
            cached = entries.len(),
            "memoize cache miss"
        );
        Ok(result)
    })
}
