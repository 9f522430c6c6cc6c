//! Command-line argument parsing for the viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "astra", about = "Planetary-system viewer")]
pub struct CliArgs {
    /// Path to a catalog JSON file.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Initial visibility filter (all, planets, gas_giants, dwarf_planets).
    #[arg(long)]
    pub filter: Option<String>,

    /// Body to focus and open in the detail view.
    #[arg(long)]
    pub body: Option<String>,

    /// Detail-view terrain resolution per axis.
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Number of topographic contour bands.
    #[arg(long)]
    pub topographic_lines: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(resolution) = args.resolution {
            self.terrain.resolution = resolution;
        }
        if let Some(lines) = args.topographic_lines {
            self.terrain.topographic_lines = lines;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
