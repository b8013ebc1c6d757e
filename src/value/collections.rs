//! Shared array and object references.
//!
//! Both types are thin handles over `Rc<RefCell<..>>`. Combinators in this
//! crate only ever read through them and build new handles for their results;
//! the mutating methods exist so that callers can assemble data, including
//! self-referential data, the same way they would in a dynamic language.

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::Value;
use crate::error::{FpError, Result};

/// Grows `items` by `additional` slots, reporting an allocation failure as an
/// error instead of aborting.
pub(crate) fn reserve(operation: &'static str, items: &mut Vec<Value>, additional: usize) -> Result<()> {
    items.try_reserve_exact(additional).map_err(|error| {
        FpError::invalid_argument(operation, format!("cannot grow an array by {additional} items: {error}"))
    })
}

/// A shared, ordered sequence of values.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array that owns the given items.
    pub fn from_vec(items: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(items)))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` when the array holds no items.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns a clone of the item at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Returns a snapshot of the items.
    ///
    /// Iterate over the snapshot rather than a borrow whenever user code may
    /// run during the iteration.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Borrows the items.
    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    /// Appends an item in place, visible through every handle to this array.
    pub fn push(&self, item: Value) {
        self.0.borrow_mut().push(item);
    }

    /// Returns `true` when both handles refer to the same array.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iterator: I) -> Self {
        Self::from_vec(iterator.into_iter().collect())
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}", Value::Array(self.clone()))
    }
}

/// A shared, string-keyed map of values.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<BTreeMap<String, Value>>>);

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object from key/value pairs; later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self::from_map(entries.into_iter().collect())
    }

    pub(crate) fn from_map(map: BTreeMap<String, Value>) -> Self {
        Self(Rc::new(RefCell::new(map)))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` when the object has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns a clone of the value under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Returns `true` when `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Returns the keys in order.
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Returns a snapshot of the entries in key order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Borrows the underlying map.
    pub fn borrow(&self) -> Ref<'_, BTreeMap<String, Value>> {
        self.0.borrow()
    }

    /// Inserts in place, visible through every handle to this object.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value)
    }

    /// Returns `true` when both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}", Value::Object(self.clone()))
    }
}
