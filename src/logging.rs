use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

/// File name prefix of the rolling JSON logs
pub const LOG_FILE_PREFIX: &str = "quotebook.log";

/// Picks the default filter directive for the given debug flag
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Builds the level filter, letting `RUST_LOG` override the default
pub fn build_env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)))
}

/// Installs the global tracing subscriber
///
/// Human-readable events always go to stdout. When `log_dir` is given, the
/// same events are also written as JSON to a file rotated daily.
///
/// ### Returns
///
/// The guard of the background file writer, if one was started. It must be
/// kept alive for the lifetime of the process or buffered lines are lost.
pub fn init_logging(debug: bool, log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(build_env_filter(debug))
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized");
    Ok(guard)
}
