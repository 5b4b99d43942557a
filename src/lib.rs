//! Hierarchical, process-embedded logging.
//!
//! Loggers are looked up by dotted name in a [`Registry`]. A name seen for
//! the first time gets a logger that copies threshold and channel from its
//! nearest registered ancestor; the root (`""`) is always there. Loggers
//! filter messages by [`Severity`] and forward the rest to a shared
//! [`Channel`].

pub mod channel;
pub mod config;
pub mod logger;
pub mod message;
pub mod registry;

pub use channel::{Channel, ChannelFactory, MemoryChannel, NullChannel, SharedChannel, TracingChannel};
pub use config::LoggingConfig;
pub use logger::Logger;
pub use message::{Message, Severity};
pub use registry::global::{create_logger, find_logger, get_logger, get_root_logger, registry, shutdown};
pub use registry::{Registry, RegistryError};
