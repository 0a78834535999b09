//! Stores a channel under a typed key and tries to read it back as a string.

use deadline_race::context::{describe_string_lookup, ChannelHandle, ContextKey, ValueContext};
use deadline_race::observability::logging;
use tokio::sync::mpsc;

fn main() {
    logging::init(logging::DEFAULT_FILTER);

    let key = ContextKey::new("numbers");
    let (tx, _rx) = mpsc::channel::<i64>(1);
    let ctx = ValueContext::background().with_value(key, ChannelHandle::new(tx));

    tracing::debug!(key = %key, kind = ?ctx.value(&key).map(|v| v.kind()), "lookup");
    println!("{}", describe_string_lookup(&ctx, &key));
}
