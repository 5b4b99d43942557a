//! Applying a configuration to a registry.

use std::collections::HashMap;

use crate::channel::{ChannelFactory, SharedChannel};
use crate::config::loader::ConfigError;
use crate::config::schema::{LoggerConfig, LoggingConfig};
use crate::config::validation::validate_config;
use crate::registry::{path, Registry};

impl LoggingConfig {
    /// Build the declared channels and configure the declared loggers.
    ///
    /// Channels are built first, so an unknown or invalid channel leaves the
    /// registry untouched. Loggers are visited shallowest first and obtained
    /// with [`Registry::get_or_create`], so a field a logger leaves out is
    /// inherited from the nearest registered ancestor as configured here.
    pub fn apply(&self, registry: &Registry, factory: &ChannelFactory) -> Result<(), ConfigError> {
        validate_config(self).map_err(ConfigError::Validation)?;

        let mut channels: HashMap<&str, SharedChannel> = HashMap::with_capacity(self.channels.len());
        for decl in &self.channels {
            let channel = factory.build(&decl.kind, &decl.options)?;
            channels.insert(decl.name.as_str(), channel);
        }

        let mut loggers: Vec<&LoggerConfig> = self.loggers.iter().collect();
        loggers.sort_by_key(|decl| path::depth(&decl.name));

        for decl in loggers {
            let logger = registry.get_or_create(&decl.name);
            if let Some(level) = decl.level {
                logger.set_threshold(level);
            }
            if let Some(name) = &decl.channel {
                logger.set_channel(channels.get(name.as_str()).cloned());
            }
            tracing::trace!(
                logger = %decl.name,
                threshold = %logger.threshold(),
                channel = ?decl.channel,
                "Logger configured"
            );
        }

        tracing::debug!(
            channels = channels.len(),
            loggers = self.loggers.len(),
            "Logging configuration applied"
        );
        Ok(())
    }
}
