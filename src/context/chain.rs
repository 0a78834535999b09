//! Immutable key/value chain.

use std::sync::Arc;

use crate::context::key::ContextKey;
use crate::context::value::{Value, ValueView};

#[derive(Debug)]
struct Node {
    key: ContextKey,
    value: Value,
    parent: ValueContext,
}

/// A context is a chain of immutable entries; lookups walk from the newest
/// entry to the root, so the nearest binding of a key wins.
#[derive(Debug, Clone, Default)]
pub struct ValueContext {
    node: Option<Arc<Node>>,
}

impl ValueContext {
    /// The empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child carrying `key → value`. `self` is left untouched.
    pub fn with_value(&self, key: ContextKey, value: impl Into<Value>) -> Self {
        Self {
            node: Some(Arc::new(Node {
                key,
                value: value.into(),
                parent: self.clone(),
            })),
        }
    }

    /// Nearest value bound to `key`.
    pub fn value(&self, key: &ContextKey) -> Option<&Value> {
        let mut current = self.node.as_deref();
        while let Some(node) = current {
            if node.key == *key {
                return Some(&node.value);
            }
            current = node.parent.node.as_deref();
        }
        None
    }

    /// Value bound to `key` viewed as `T`.
    ///
    /// `None` both when the key is missing and when the stored value has
    /// another type.
    pub fn value_as<'a, T: ValueView<'a>>(&'a self, key: &ContextKey) -> Option<T> {
        self.value(key).and_then(T::view)
    }

    /// Number of entries on the chain, shadowed ones included.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node.as_deref();
        while let Some(node) = current {
            depth += 1;
            current = node.parent.node.as_deref();
        }
        depth
    }
}

/// The line the typed-key demo prints for a string lookup of `key`.
pub fn describe_string_lookup(ctx: &ValueContext, key: &ContextKey) -> String {
    match ctx.value_as::<&str>(key) {
        Some(s) => format!("Value is: {s}"),
        None => "Value is not a string".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::value::{ChannelHandle, ValueKind};
    use tokio::sync::mpsc;

    #[test]
    fn test_lookup_and_missing() {
        let user = ContextKey::new("user");
        let other = ContextKey::new("other");
        let ctx = ValueContext::background().with_value(user, "alice");

        assert_eq!(ctx.value_as::<&str>(&user), Some("alice"));
        assert!(ctx.value(&other).is_none());
        assert!(ValueContext::background().value(&user).is_none());
    }

    #[test]
    fn test_same_label_distinct_keys() {
        let a = ContextKey::new("id");
        let b = ContextKey::new("id");
        assert_ne!(a, b);

        let ctx = ValueContext::background().with_value(a, 1i64);
        assert_eq!(ctx.value_as::<i64>(&a), Some(1));
        assert!(ctx.value(&b).is_none());
    }

    #[test]
    fn test_child_shadows_parent_without_mutating_it() {
        let key = ContextKey::new("level");
        let parent = ValueContext::background().with_value(key, "outer");
        let child = parent.with_value(key, "inner");

        assert_eq!(child.value_as::<&str>(&key), Some("inner"));
        assert_eq!(parent.value_as::<&str>(&key), Some("outer"));
        assert_eq!(child.depth(), 2);
        assert_eq!(parent.depth(), 1);
    }

    #[test]
    fn test_mismatched_type_fails_without_corrupting_store() {
        let key = ContextKey::new("count");
        let ctx = ValueContext::background().with_value(key, 42i64);

        assert_eq!(ctx.value_as::<&str>(&key), None);
        assert_eq!(ctx.value_as::<bool>(&key), None);
        assert_eq!(ctx.value(&key).map(Value::kind), Some(ValueKind::Int));
        assert_eq!(ctx.value_as::<i64>(&key), Some(42));
    }

    #[test]
    fn test_describe_string_lookup() {
        let key = ContextKey::new("numbers");
        let (tx, _rx) = mpsc::channel::<i64>(1);
        let ctx = ValueContext::background().with_value(key, ChannelHandle::new(tx));
        assert_eq!(describe_string_lookup(&ctx, &key), "Value is not a string");

        for value in [Value::from(0i64), Value::from(true), Value::opaque(3.5f64)] {
            let ctx = ValueContext::background().with_value(key, value);
            assert_eq!(describe_string_lookup(&ctx, &key), "Value is not a string");
        }

        let ctx = ValueContext::background().with_value(key, "hi");
        assert_eq!(describe_string_lookup(&ctx, &key), "Value is: hi");
    }
}
