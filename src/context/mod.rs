//! Typed key/value context.
//!
//! # Data Flow
//! ```text
//! ValueContext::background()
//!     → with_value(key, value)   (new node, parent shared)
//!     → value(&key)              (walk to root, nearest wins)
//!     → value_as::<T>(&key)      (tag check, Option<T>)
//! ```
//!
//! # Design Decisions
//! - Entries are immutable; deriving never changes the parent
//! - A type mismatch is a `None`, never a panic

pub mod chain;
pub mod key;
pub mod value;

pub use chain::{describe_string_lookup, ValueContext};
pub use key::ContextKey;
pub use value::{ChannelHandle, Value, ValueKind, ValueView};
