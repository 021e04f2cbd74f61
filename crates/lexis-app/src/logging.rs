use lexis_config::log::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filtered by `RUST_LOG` (default `info`)
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.compact().init(),
    }
}
