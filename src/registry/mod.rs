//! Hierarchical logger registry.
//!
//! # Data Flow
//! ```text
//! get_or_create("a.b.c")
//!     → shared lock: already registered? return it
//!     → exclusive lock: re-check, then walk "a.b" → "a" → ""
//!       until a registered ancestor is found (root created if absent)
//!     → new Logger copies ancestor threshold + channel
//!     → only "a.b.c" is inserted
//! ```
//!
//! # Design Decisions
//! - Exclusive-write / shared-read lock over a plain `HashMap`; the ancestor
//!   walk runs on the already-locked map, so nothing re-enters the lock
//! - The walk is a loop, not recursion, so absurdly deep names are fine
//! - Inheritance is a one-time copy at creation
//! - Intermediate segments stay unregistered; only the requested name
//!   (and the root) is ever inserted
//! - Loggers never log while the registry lock is held

pub mod global;
pub mod path;
pub mod store;

use thiserror::Error;

pub use store::{Registry, DEFAULT_THRESHOLD};

/// Errors raised by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `create` was called for a name that is already registered.
    #[error("logger already exists: {name:?}")]
    AlreadyExists { name: String },
}
