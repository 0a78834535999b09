//! Opaque context keys.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global atomic counter for key IDs.
static KEY_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity token for a context entry.
///
/// Keys compare by identity, not by label: two keys created with the same
/// label never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextKey {
    id: u64,
    label: &'static str,
}

impl ContextKey {
    pub fn new(label: &'static str) -> Self {
        Self {
            id: KEY_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            label,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.id)
    }
}
