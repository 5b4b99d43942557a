//! Named loggers.
//!
//! # Responsibilities
//! - Hold a severity threshold and an optional channel
//! - Drop messages below the threshold, forward the rest
//!
//! # Design Decisions
//! - Threshold lives in an `AtomicU8`, channel in an `ArcSwapOption`;
//!   both can change while other threads are logging, without any
//!   registry-wide lock
//! - `log` dispatches on an owned channel snapshot, never under a lock
//! - A missing channel or a filtered message is normal, not an error

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::channel::SharedChannel;
use crate::message::{Message, Severity};

/// A named filter in front of a channel.
pub struct Logger {
    name: String,
    threshold: AtomicU8,
    // ArcSwap needs a sized pointee, hence the extra Arc around the trait object.
    channel: ArcSwapOption<SharedChannel>,
}

impl Logger {
    /// Create a standalone logger. Registries call this on first lookup.
    pub fn new(name: impl Into<String>, channel: Option<SharedChannel>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            threshold: AtomicU8::new(threshold.into()),
            channel: ArcSwapOption::new(channel.map(Arc::new)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn threshold(&self) -> Severity {
        Severity::from(self.threshold.load(Ordering::Relaxed))
    }

    /// Takes effect for the next `log` call. Loggers that already inherited
    /// the old value keep it.
    pub fn set_threshold(&self, level: Severity) {
        self.threshold.store(level.into(), Ordering::Relaxed);
    }

    pub fn channel(&self) -> Option<SharedChannel> {
        self.channel.load_full().map(|c| Arc::clone(&*c))
    }

    pub fn set_channel(&self, channel: Option<SharedChannel>) {
        self.channel.store(channel.map(Arc::new));
    }

    /// True when a message at `level` would pass the threshold.
    pub fn is_enabled_for(&self, level: Severity) -> bool {
        self.threshold() <= level
    }

    /// Forward `message` to the channel if it passes the threshold.
    pub fn log(&self, message: &Message) {
        if !self.is_enabled_for(message.priority()) {
            return;
        }
        if let Some(channel) = self.channel.load_full() {
            channel.log(message);
        }
    }

    fn emit(&self, level: Severity, text: impl Into<String>) {
        // skip building the message when it would be filtered anyway
        if self.is_enabled_for(level) {
            self.log(&Message::new(level, text).with_source(self.name.as_str()));
        }
    }

    pub fn trace(&self, text: impl Into<String>) {
        self.emit(Severity::Trace, text);
    }

    pub fn debug(&self, text: impl Into<String>) {
        self.emit(Severity::Debug, text);
    }

    pub fn information(&self, text: impl Into<String>) {
        self.emit(Severity::Information, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.emit(Severity::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.emit(Severity::Error, text);
    }

    pub fn fatal(&self, text: impl Into<String>) {
        self.emit(Severity::Fatal, text);
    }

    pub fn is_trace(&self) -> bool {
        self.is_enabled_for(Severity::Trace)
    }

    pub fn is_debug(&self) -> bool {
        self.is_enabled_for(Severity::Debug)
    }

    pub fn is_information(&self) -> bool {
        self.is_enabled_for(Severity::Information)
    }

    pub fn is_warning(&self) -> bool {
        self.is_enabled_for(Severity::Warning)
    }

    pub fn is_error(&self) -> bool {
        self.is_enabled_for(Severity::Error)
    }

    pub fn is_fatal(&self) -> bool {
        self.is_enabled_for(Severity::Fatal)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("threshold", &self.threshold())
            .field("channel", &self.channel())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MemoryChannel;

    fn recording(threshold: Severity) -> (Logger, Arc<MemoryChannel>) {
        let channel = Arc::new(MemoryChannel::new());
        let logger = Logger::new("svc", Some(channel.clone() as SharedChannel), threshold);
        (logger, channel)
    }

    #[test]
    fn test_threshold_filtering() {
        let (logger, channel) = recording(Severity::Warning);

        logger.log(&Message::information("below"));
        logger.log(&Message::warning("at"));
        logger.log(&Message::error("above"));

        assert_eq!(channel.texts(), vec!["at", "above"]);
    }

    #[test]
    fn test_no_channel_is_silent() {
        let logger = Logger::new("quiet", None, Severity::Trace);
        logger.log(&Message::fatal("nowhere to go"));
        assert!(logger.channel().is_none());
    }

    #[test]
    fn test_is_enabled_for() {
        let logger = Logger::new("x", None, Severity::Information);
        assert!(!logger.is_enabled_for(Severity::Debug));
        assert!(logger.is_enabled_for(Severity::Information));
        assert!(logger.is_enabled_for(Severity::Fatal));
        assert!(!logger.is_trace());
        assert!(logger.is_warning());
    }

    #[test]
    fn test_setters_apply_immediately() {
        let (logger, first) = recording(Severity::Error);
        logger.warning("dropped");
        logger.set_threshold(Severity::Debug);
        logger.warning("kept");
        assert_eq!(first.texts(), vec!["kept"]);

        let second = Arc::new(MemoryChannel::new());
        logger.set_channel(Some(second.clone() as SharedChannel));
        logger.debug("moved");
        assert_eq!(first.len(), 1);
        assert_eq!(second.texts(), vec!["moved"]);

        logger.set_channel(None);
        logger.fatal("gone");
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_emitters_tag_source() {
        let (logger, channel) = recording(Severity::Trace);
        logger.trace("hello");
        let recorded = channel.messages();
        assert_eq!(recorded[0].source(), Some("svc"));
        assert_eq!(recorded[0].priority(), Severity::Trace);
    }

    #[test]
    fn test_channel_is_shared() {
        let (logger, channel) = recording(Severity::Information);
        let held = logger.channel().unwrap();
        assert!(Arc::ptr_eq(&held, &(channel.clone() as SharedChannel)));
        assert_eq!(logger.name(), "svc");
    }
}
