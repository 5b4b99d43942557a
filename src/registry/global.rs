//! Process-wide registry.
//!
//! Thin wrappers over a lazily created static [`Registry`]. Code that wants
//! isolation (tests, plugins with their own trees) should build a
//! `Registry` of its own instead.

use std::sync::{Arc, LazyLock};

use crate::channel::SharedChannel;
use crate::logger::Logger;
use crate::message::Severity;
use crate::registry::{Registry, RegistryError};

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// See [`Registry::get_or_create`].
pub fn get_logger(name: &str) -> Arc<Logger> {
    REGISTRY.get_or_create(name)
}

pub fn get_root_logger() -> Arc<Logger> {
    REGISTRY.root()
}

/// See [`Registry::create`]. Pass [`Severity::default()`] for the usual
/// `Information` threshold.
pub fn create_logger(
    name: &str,
    channel: Option<SharedChannel>,
    threshold: Severity,
) -> Result<Arc<Logger>, RegistryError> {
    REGISTRY.create(name, channel, threshold)
}

pub fn find_logger(name: &str) -> Option<Arc<Logger>> {
    REGISTRY.find(name)
}

pub fn shutdown() {
    REGISTRY.shutdown();
}
