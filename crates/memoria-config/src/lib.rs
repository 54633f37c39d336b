//! Configuration system for the memoria tribute wall.
//!
//! Scene and UI parameters persist to disk as RON files with forward and
//! backward compatible serialization (every section defaults). CLI
//! overrides are applied on top of the loaded file.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, UiConfig};
pub use error::ConfigError;
