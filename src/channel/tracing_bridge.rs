//! Forwards messages into `tracing`.
//!
//! Whatever subscriber the host application installed decides where the
//! output ends up. `Fatal` has no `tracing` counterpart and is emitted at
//! `ERROR` with `fatal = true`.

use crate::channel::Channel;
use crate::message::{Message, Severity};

/// Re-emits every message as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingChannel;

impl Channel for TracingChannel {
    fn log(&self, message: &Message) {
        let source = message.source().unwrap_or("");
        let text = message.text();
        match message.priority() {
            Severity::Trace => tracing::trace!(target: "logtree", source, "{}", text),
            Severity::Debug => tracing::debug!(target: "logtree", source, "{}", text),
            Severity::Information => tracing::info!(target: "logtree", source, "{}", text),
            Severity::Warning => tracing::warn!(target: "logtree", source, "{}", text),
            Severity::Error => tracing::error!(target: "logtree", source, "{}", text),
            Severity::Fatal => tracing::error!(target: "logtree", source, fatal = true, "{}", text),
        }
    }
}
