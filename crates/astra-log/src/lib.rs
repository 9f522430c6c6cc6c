//! Structured logging for the planetary-system viewer.
//!
//! Console output with timestamps and module paths via the `tracing`
//! ecosystem, plus JSON file logging in debug builds for post-mortem
//! analysis. The filter honors `RUST_LOG` and the config's log level.

use astra_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when neither `RUST_LOG` nor the config specify one.
const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing subscriber for the viewer.
///
/// * `log_dir` - Optional directory for JSON log files (debug builds only)
/// * `debug_build` - Whether this is a debug build (enables file logging)
/// * `config` - Optional configuration providing a log-level override
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = config
        .map(|c| c.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER);

    // RUST_LOG wins over config; config wins over the built-in default.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // In debug builds, also log to a file for post-mortem analysis.
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join("astra.log"))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
