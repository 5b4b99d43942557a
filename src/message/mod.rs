//! Log events.
//!
//! A [`Message`] is an immutable value: a text payload, a [`Severity`], and
//! optionally the name of the logger it came from. Loggers filter on the
//! priority only.

pub mod severity;

pub use severity::{ParseSeverityError, Severity};

/// An immutable log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    priority: Severity,
    source: Option<String>,
}

impl Message {
    /// Create a message with no source.
    pub fn new(priority: Severity, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority,
            source: None,
        }
    }

    pub fn trace(text: impl Into<String>) -> Self {
        Self::new(Severity::Trace, text)
    }

    pub fn debug(text: impl Into<String>) -> Self {
        Self::new(Severity::Debug, text)
    }

    pub fn information(text: impl Into<String>) -> Self {
        Self::new(Severity::Information, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    pub fn fatal(text: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, text)
    }

    /// Tag the message with the name of the logger that produced it.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn priority(&self) -> Severity {
        self.priority
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
