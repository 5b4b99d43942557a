//! Output sinks.
//!
//! # Responsibilities
//! - Define the [`Channel`] capability loggers forward to
//! - Ship a few stock sinks (null, memory, tracing bridge)
//! - Build sinks by kind name from configuration ([`ChannelFactory`])
//!
//! # Design Decisions
//! - Channels never filter by severity; that is the logger's job
//! - Channels are shared (`Arc`), no logger owns one exclusively
//! - Blocking I/O bounds are the channel's own contract

pub mod factory;
pub mod memory;
pub mod null;
pub mod tracing_bridge;

use std::fmt::Debug;
use std::sync::Arc;

use crate::message::Message;

pub use factory::{ChannelError, ChannelFactory, ChannelOptions};
pub use memory::MemoryChannel;
pub use null::NullChannel;
pub use tracing_bridge::TracingChannel;

/// A sink that accepts messages and performs a side effect.
pub trait Channel: Send + Sync + Debug {
    fn log(&self, message: &Message);
}

/// Shared handle to a channel.
pub type SharedChannel = Arc<dyn Channel>;
