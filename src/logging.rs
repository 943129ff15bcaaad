use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Installs a stderr `fmt` subscriber. `RUST_LOG` overrides the configured
/// filter; an unparsable configured directive falls back to `info`.
pub fn init(config: &LoggingConfig) {
    let directive: Directive = config
        .filter
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(directive)
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
