//! The name-to-logger store.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::channel::SharedChannel;
use crate::logger::Logger;
use crate::message::Severity;
use crate::registry::path::{self, ROOT};
use crate::registry::RegistryError;

/// Threshold of a root logger nobody configured.
pub const DEFAULT_THRESHOLD: Severity = Severity::Information;

type Entries = HashMap<String, Arc<Logger>>;

/// Hierarchical logger registry.
///
/// A name, once inserted, maps to the same [`Logger`] instance until
/// [`Registry::shutdown`]. Lookups of unknown names create a logger that
/// copies threshold and channel from the nearest *registered* ancestor;
/// intermediate segments are not registered along the way.
#[derive(Debug, Default)]
pub struct Registry {
    entries: RwLock<Entries>,
}

impl Registry {
    /// An empty registry. The root appears on first lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name` without creating anything.
    pub fn find(&self, name: &str) -> Option<Arc<Logger>> {
        self.read().get(name).cloned()
    }

    /// Return the logger for `name`, creating it from its nearest
    /// registered ancestor if needed.
    pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.find(name) {
            return logger;
        }

        let mut entries = self.write();
        // another caller may have inserted it between the two locks
        if let Some(logger) = entries.get(name) {
            return Arc::clone(logger);
        }

        let (logger, parent, root_created) = if path::is_root(name) {
            let (root, created) = root_entry(&mut entries);
            (root, None, created)
        } else {
            let (parent, root_created) = nearest_registered_ancestor(&mut entries, name);
            let logger = Arc::new(Logger::new(name, parent.channel(), parent.threshold()));
            entries.insert(name.to_string(), Arc::clone(&logger));
            (logger, Some(parent), root_created)
        };
        // events go out after the lock is released; a subscriber may call back in
        drop(entries);

        if root_created {
            tracing::debug!(threshold = %DEFAULT_THRESHOLD, "Root logger materialized");
        }
        if let Some(parent) = parent {
            tracing::debug!(
                logger = %name,
                parent = %parent.name(),
                threshold = %logger.threshold(),
                "Logger created from ancestor"
            );
        }
        logger
    }

    /// Register a logger with exactly the given channel and threshold.
    pub fn create(
        &self,
        name: &str,
        channel: Option<SharedChannel>,
        threshold: Severity,
    ) -> Result<Arc<Logger>, RegistryError> {
        let logger = match self.write().entry(name.to_string()) {
            Entry::Occupied(_) => {
                return Err(RegistryError::AlreadyExists {
                    name: name.to_string(),
                })
            }
            Entry::Vacant(slot) => Arc::clone(slot.insert(Arc::new(Logger::new(name, channel, threshold)))),
        };

        tracing::debug!(logger = %name, threshold = %threshold, "Logger registered");
        Ok(logger)
    }

    /// The root logger, materialized with defaults if absent.
    pub fn root(&self) -> Arc<Logger> {
        self.get_or_create(ROOT)
    }

    /// Forget every logger. Handles held elsewhere keep working but are no
    /// longer reachable by name nor used as ancestors.
    pub fn shutdown(&self) {
        let drained = std::mem::take(&mut *self.write());
        tracing::debug!(loggers = drained.len(), "Logger registry shut down");
        // loggers (and possibly their channels) are dropped after the lock is released
        drop(drained);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Registered names, sorted. The root shows up as `""`.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The root entry, and whether it had to be created.
fn root_entry(entries: &mut Entries) -> (Arc<Logger>, bool) {
    match entries.entry(ROOT.to_string()) {
        Entry::Occupied(slot) => (Arc::clone(slot.get()), false),
        Entry::Vacant(slot) => {
            let root = slot.insert(Arc::new(Logger::new(ROOT, None, DEFAULT_THRESHOLD)));
            (Arc::clone(root), true)
        }
    }
}

/// Walk up the dotted path, skipping unregistered segments. Falls back to
/// the root, creating it if needed (reported by the flag).
fn nearest_registered_ancestor(entries: &mut Entries, name: &str) -> (Arc<Logger>, bool) {
    for ancestor in path::ancestors(name) {
        if let Some(found) = entries.get(ancestor) {
            return (Arc::clone(found), false);
        }
    }
    root_entry(entries)
}
