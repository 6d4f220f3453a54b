//! Logging setup
//!
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Filter directive for a configured level
pub fn default_directive(level: &str) -> String {
    format!("planboard={},tower_http=info", level.trim())
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)))
}

/// Install the global subscriber writing to stdout.
///
/// Returns false when a subscriber was already installed.
pub fn init(config: &LoggingConfig) -> bool {
    install(config, BoxMakeWriter::new(std::io::stdout))
}

/// Install the global subscriber writing to stderr, leaving stdout to
/// command output
pub fn init_stderr(config: &LoggingConfig) -> bool {
    install(config, BoxMakeWriter::new(std::io::stderr))
}

fn install(config: &LoggingConfig, writer: BoxMakeWriter) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init(),
        _ => registry.with(fmt::layer().with_writer(writer)).try_init(),
    };

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("debug"), "planboard=debug,tower_http=info");
        assert_eq!(default_directive(" warn "), "planboard=warn,tower_http=info");
    }
}
