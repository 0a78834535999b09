//! Tagged values stored in a context.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Sending half of an integer channel, storable as a context value.
#[derive(Debug, Clone)]
pub struct ChannelHandle {
    tx: mpsc::Sender<i64>,
}

impl ChannelHandle {
    pub fn new(tx: mpsc::Sender<i64>) -> Self {
        Self { tx }
    }

    pub fn sender(&self) -> &mpsc::Sender<i64> {
        &self.tx
    }
}

/// Type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    Bool,
    Channel,
    Opaque,
}

/// A context value: type tag plus payload.
#[derive(Clone)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    Channel(ChannelHandle),
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Channel(_) => ValueKind::Channel,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Value::Opaque(Arc::new(value))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_channel(&self) -> Option<&ChannelHandle> {
        match self {
            Value::Channel(c) => Some(c),
            _ => None,
        }
    }

    /// Borrow an opaque payload as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Opaque(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Channel(c) => f.debug_tuple("Channel").field(c).finish(),
            Value::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<ChannelHandle> for Value {
    fn from(c: ChannelHandle) -> Self {
        Value::Channel(c)
    }
}

/// Typed view into a [`Value`]; `None` when the tag does not match.
pub trait ValueView<'a>: Sized {
    fn view(value: &'a Value) -> Option<Self>;
}

impl<'a> ValueView<'a> for &'a str {
    fn view(value: &'a Value) -> Option<Self> {
        value.as_str()
    }
}

impl<'a> ValueView<'a> for i64 {
    fn view(value: &'a Value) -> Option<Self> {
        value.as_int()
    }
}

impl<'a> ValueView<'a> for bool {
    fn view(value: &'a Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<'a> ValueView<'a> for &'a ChannelHandle {
    fn view(value: &'a Value) -> Option<Self> {
        value.as_channel()
    }
}
