//! Channel construction by kind name.
//!
//! # Responsibilities
//! - Map a kind name (`"memory"`, `"tracing"`, ...) to a builder
//! - Let embedding applications register their own kinds at runtime
//! - Report unknown kinds and rejected options as distinct errors
//!
//! # Design Decisions
//! - Builders are looked up, cloned out of the map, then invoked with no
//!   shard lock held, so a builder may itself consult the factory

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use crate::channel::{MemoryChannel, NullChannel, SharedChannel, TracingChannel};

/// Free-form `key = value` options handed to a builder.
pub type ChannelOptions = BTreeMap<String, String>;

type ChannelBuilder = Arc<dyn Fn(&ChannelOptions) -> Result<SharedChannel, ChannelError> + Send + Sync>;

/// Errors raised while building a channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// No builder is registered under this kind.
    #[error("unknown channel kind: {kind}")]
    Unknown { kind: String },

    /// The builder rejected the supplied options.
    #[error("invalid options for channel kind {kind}: {reason}")]
    Invalid { kind: String, reason: String },
}

/// Registry of channel builders keyed by kind.
#[derive(Clone, Default)]
pub struct ChannelFactory {
    kinds: Arc<DashMap<String, ChannelBuilder>>,
}

impl ChannelFactory {
    /// A factory with no kinds registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory knowing `null`, `memory` and `tracing`.
    pub fn with_defaults() -> Self {
        let factory = Self::new();
        factory.register("null", |options| {
            reject_unknown("null", options, &[])?;
            Ok(Arc::new(NullChannel) as SharedChannel)
        });
        factory.register("memory", |options| {
            reject_unknown("memory", options, &["capacity"])?;
            let channel = match options.get("capacity") {
                Some(raw) => {
                    let capacity = raw.trim().parse::<usize>().map_err(|e| ChannelError::Invalid {
                        kind: "memory".to_string(),
                        reason: format!("capacity {:?}: {}", raw, e),
                    })?;
                    MemoryChannel::with_capacity(capacity)
                }
                None => MemoryChannel::new(),
            };
            Ok(Arc::new(channel) as SharedChannel)
        });
        factory.register("tracing", |options| {
            reject_unknown("tracing", options, &[])?;
            Ok(Arc::new(TracingChannel) as SharedChannel)
        });
        factory
    }

    /// Register (or replace) the builder for `kind`.
    pub fn register<F>(&self, kind: impl Into<String>, builder: F)
    where
        F: Fn(&ChannelOptions) -> Result<SharedChannel, ChannelError> + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self.kinds.insert(kind.clone(), Arc::new(builder)).is_some() {
            tracing::debug!(kind = %kind, "Replaced channel builder");
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Registered kind names, sorted.
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.kinds.iter().map(|r| r.key().clone()).collect();
        kinds.sort();
        kinds
    }

    /// Build a new channel of the given kind.
    pub fn build(&self, kind: &str, options: &ChannelOptions) -> Result<SharedChannel, ChannelError> {
        let builder = self
            .kinds
            .get(kind)
            .map(|r| Arc::clone(r.value()))
            .ok_or_else(|| ChannelError::Unknown {
                kind: kind.to_string(),
            })?;
        builder(options)
    }
}

impl fmt::Debug for ChannelFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelFactory")
            .field("kinds", &self.kinds())
            .finish()
    }
}

fn reject_unknown(kind: &str, options: &ChannelOptions, allowed: &[&str]) -> Result<(), ChannelError> {
    match options.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(ChannelError::Invalid {
            kind: kind.to_string(),
            reason: format!("unexpected option {:?}", key),
        }),
        None => Ok(()),
    }
}
