//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML/JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (validated)
//!     → apply.rs: channels built via ChannelFactory,
//!       loggers configured in a Registry, shallowest first
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Applying is additive: loggers not mentioned are left alone

pub mod apply;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, save_config, ConfigError, ConfigFormat};
pub use schema::{ChannelConfig, LoggerConfig, LoggingConfig};
pub use validation::{validate_config, ValidationError};
