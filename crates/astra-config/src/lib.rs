//! Configuration for the planetary-system viewer.
//!
//! Settings load from a RON file in the user's config directory, with
//! sensible defaults for every field and command-line overrides on top.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SceneConfig, TerrainConfig};
pub use error::ConfigError;
