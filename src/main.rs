//! `logtree` command line.
//!
//! Builds a registry from a configuration file and lets you look at it:
//!
//! ```text
//! logtree --config logging.toml tree
//! logtree --config logging.toml resolve svc.db.pool
//! logtree --config logging.toml emit svc.db warning "pool exhausted"
//! ```
//!
//! Without `--config`, the root logger writes to a `TracingChannel`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logtree::config::load_config;
use logtree::registry::path;
use logtree::{ChannelFactory, Logger, Message, Registry, Severity, TracingChannel};

#[derive(Parser)]
#[command(name = "logtree")]
#[command(about = "Inspect and exercise a hierarchical logger configuration", long_about = None)]
struct Cli {
    /// Logging configuration file (.toml or .json).
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered loggers
    Tree,
    /// Show what a logger resolves to, creating it if needed
    Resolve { name: String },
    /// Send a message through a logger
    Emit {
        name: String,
        level: Severity,
        text: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logtree=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let registry = Registry::new();
    let factory = ChannelFactory::with_defaults();

    match &cli.config {
        Some(file) => load_config(file)?.apply(&registry, &factory)?,
        None => registry.root().set_channel(Some(Arc::new(TracingChannel))),
    }

    match cli.command {
        Commands::Tree => {
            for name in registry.names() {
                if let Some(logger) = registry.find(&name) {
                    println!("{:indent$}{}", "", describe(&logger), indent = path::depth(&name) * 2);
                }
            }
        }
        Commands::Resolve { name } => {
            let existing = registry.find(&name);
            let ancestor = path::ancestors(&name).find(|a| registry.contains(a));
            let logger = registry.get_or_create(&name);

            println!("{}", describe(&logger));
            match (existing, ancestor) {
                (Some(_), _) => println!("  already registered"),
                (None, Some(a)) => println!("  inherited from {}", label(a)),
                (None, None) => println!("  inherited root defaults"),
            }
        }
        Commands::Emit { name, level, text } => {
            let logger = registry.get_or_create(&name);
            if !logger.is_enabled_for(level) {
                eprintln!("{} filters {} (threshold {})", label(&name), level, logger.threshold());
            } else if logger.channel().is_none() {
                eprintln!("{} has no channel", label(&name));
            }
            logger.log(&Message::new(level, text).with_source(name));
        }
    }

    Ok(())
}

fn label(name: &str) -> &str {
    if path::is_root(name) {
        "<root>"
    } else {
        name
    }
}

fn describe(logger: &Logger) -> String {
    let channel = match logger.channel() {
        Some(channel) => format!("{:?}", channel),
        None => "no channel".to_string(),
    };
    format!("{} [{}] {}", label(logger.name()), logger.threshold(), channel)
}
