//! Constructors and their instances.
//!
//! `match_on` accepts a class as a matcher and succeeds when the matched
//! value is an instance of it. Builtin classes describe a value kind
//! (`Class::string()` accepts every string); declared classes describe
//! [`Instance`] values created through [`Class::instantiate`], including
//! instances of subclasses created with [`Class::extend`].

use std::rc::Rc;

use super::{Object, Value, ValueKind};

/// A constructor usable as a `match_on` matcher.
///
/// # Examples
///
/// ```rust
/// use pointfree::{Class, Value};
///
/// let animal = Class::declare("Animal");
/// let dog = animal.extend("Dog");
/// let rex = dog.instantiate([("name", Value::from("Rex"))]);
///
/// assert!(dog.is_instance(&rex));
/// assert!(animal.is_instance(&rex));
/// assert!(!Class::string().is_instance(&rex));
/// ```
#[derive(Debug, Clone)]
pub struct Class(Rc<ClassKind>);

#[derive(Debug)]
enum ClassKind {
    Builtin(ValueKind),
    Declared { name: String, parent: Option<Class> },
}

impl Class {
    /// Declares a new class with no parent.
    pub fn declare(name: impl Into<String>) -> Self {
        Self(Rc::new(ClassKind::Declared {
            name: name.into(),
            parent: None,
        }))
    }

    /// Declares a subclass of this class.
    pub fn extend(&self, name: impl Into<String>) -> Self {
        Self(Rc::new(ClassKind::Declared {
            name: name.into(),
            parent: Some(self.clone()),
        }))
    }

    /// The class of every value of `kind`.
    pub fn builtin(kind: ValueKind) -> Self {
        Self(Rc::new(ClassKind::Builtin(kind)))
    }

    /// The class of strings.
    pub fn string() -> Self {
        Self::builtin(ValueKind::String)
    }

    /// The class of numbers.
    pub fn number() -> Self {
        Self::builtin(ValueKind::Number)
    }

    /// The class of booleans.
    pub fn boolean() -> Self {
        Self::builtin(ValueKind::Boolean)
    }

    /// The class of arrays.
    pub fn array() -> Self {
        Self::builtin(ValueKind::Array)
    }

    /// The class of plain objects.
    pub fn object() -> Self {
        Self::builtin(ValueKind::Object)
    }

    /// The class of functions.
    pub fn function() -> Self {
        Self::builtin(ValueKind::Function)
    }

    /// The class of error values.
    pub fn error() -> Self {
        Self::builtin(ValueKind::Error)
    }

    /// The class name.
    pub fn name(&self) -> String {
        match self.0.as_ref() {
            ClassKind::Builtin(kind) => kind.to_string(),
            ClassKind::Declared { name, .. } => name.clone(),
        }
    }

    /// The parent class, if this class was created with [`Class::extend`].
    pub fn parent(&self) -> Option<&Self> {
        match self.0.as_ref() {
            ClassKind::Builtin(_) => None,
            ClassKind::Declared { parent, .. } => parent.as_ref(),
        }
    }

    /// Creates an instance with the given fields.
    pub fn instantiate<I, K, T>(&self, fields: I) -> Value
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        let fields = Object::from_entries(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        Value::Instance(Instance::new(self.clone(), fields))
    }

    /// Returns `true` when `value` is an instance of this class or of a subclass.
    pub fn is_instance(&self, value: &Value) -> bool {
        match self.0.as_ref() {
            ClassKind::Builtin(kind) => value.kind() == *kind,
            ClassKind::Declared { .. } => match value {
                Value::Instance(instance) => {
                    std::iter::successors(Some(instance.class()), |&class| class.parent())
                        .any(|class| class == self)
                }
                _ => false,
            },
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.as_ref(), other.0.as_ref()) {
            (ClassKind::Builtin(left), ClassKind::Builtin(right)) => left == right,
            _ => Rc::ptr_eq(&self.0, &other.0),
        }
    }
}

/// A value created from a declared [`Class`].
///
/// Fields live in a shared [`Object`]; lens updates produce a new instance of
/// the same class and leave the original untouched.
#[derive(Debug, Clone)]
pub struct Instance {
    class: Class,
    fields: Object,
}

impl Instance {
    /// Creates an instance of `class` holding `fields`.
    pub const fn new(class: Class, fields: Object) -> Self {
        Self { class, fields }
    }

    /// The class this instance was created from.
    pub const fn class(&self) -> &Class {
        &self.class
    }

    /// The instance fields.
    pub const fn fields(&self) -> &Object {
        &self.fields
    }

    /// Returns `true` when both handles share the same fields.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.fields.ptr_eq(&other.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn builtin_classes_match_by_kind() {
        assert!(Class::string().is_instance(&Value::from("text")));
        assert!(!Class::string().is_instance(&Value::from(42)));
        assert!(Class::number().is_instance(&Value::from(42)));
    }

    #[rstest]
    fn builtin_classes_are_equal_by_kind() {
        assert_eq!(Class::string(), Class::string());
        assert_ne!(Class::string(), Class::number());
    }

    #[rstest]
    fn declared_classes_are_distinct_even_with_the_same_name() {
        let first = Class::declare("Thing");
        let second = Class::declare("Thing");
        assert_ne!(first, second);
        assert!(!second.is_instance(&first.instantiate(Vec::<(String, Value)>::new())));
    }

    #[rstest]
    fn subclass_instances_are_parent_instances() {
        let shape = Class::declare("Shape");
        let circle = shape.extend("Circle");
        let value = circle.instantiate([("radius", 2)]);
        assert!(shape.is_instance(&value));
        assert!(circle.is_instance(&value));
        assert!(!circle.is_instance(&shape.instantiate([("radius", 2)])));
    }
}
