//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (loggers reference declared channels)
//! - Detect duplicate declarations
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before any channel is built or any logger touched

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::LoggingConfig;

/// A semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("channel declared with an empty name")]
    EmptyChannelName,

    #[error("channel {0:?} declared more than once")]
    DuplicateChannel(String),

    #[error("logger {0:?} declared more than once")]
    DuplicateLogger(String),

    #[error("logger {logger:?} references undeclared channel {channel:?}")]
    UnknownChannel { logger: String, channel: String },
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut channels = HashSet::new();
    for channel in &config.channels {
        if channel.name.is_empty() {
            errors.push(ValidationError::EmptyChannelName);
        } else if !channels.insert(channel.name.as_str()) {
            errors.push(ValidationError::DuplicateChannel(channel.name.clone()));
        }
    }

    let mut loggers = HashSet::new();
    for logger in &config.loggers {
        if !loggers.insert(logger.name.as_str()) {
            errors.push(ValidationError::DuplicateLogger(logger.name.clone()));
        }
        if let Some(channel) = &logger.channel {
            if !channels.contains(channel.as_str()) {
                errors.push(ValidationError::UnknownChannel {
                    logger: logger.name.clone(),
                    channel: channel.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
