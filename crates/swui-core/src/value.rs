//! Values that may be given directly or produced on demand.

use std::fmt;
use std::rc::Rc;

use swui_graphics::{Color, Gradient, Paint};

/// A modifier argument that is either a literal or a zero-argument producer.
///
/// Producers run every time [`Value::resolve`] is called; nothing is cached,
/// so re-applying a modifier picks up whatever the producer returns now.
pub enum Value<T> {
    Literal(T),
    Producer(Rc<dyn Fn() -> T>),
}

impl<T> Value<T> {
    pub fn lazy<F>(producer: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Value::Producer(Rc::new(producer))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Value::Producer(_))
    }
}

impl<T: Clone> Value<T> {
    pub fn resolve(&self) -> T {
        match self {
            Value::Literal(value) => value.clone(),
            Value::Producer(producer) => producer(),
        }
    }
}

impl<T: Clone> Clone for Value<T> {
    fn clone(&self) -> Self {
        match self {
            Value::Literal(value) => Value::Literal(value.clone()),
            Value::Producer(producer) => Value::Producer(Rc::clone(producer)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Value::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::Literal(value)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_owned())
    }
}

impl From<Color> for Value<Paint> {
    fn from(color: Color) -> Self {
        Value::Literal(Paint::Solid(color))
    }
}

impl From<Gradient> for Value<Paint> {
    fn from(gradient: Gradient) -> Self {
        Value::Literal(Paint::Gradient(gradient))
    }
}
