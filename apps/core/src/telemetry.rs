use std::sync::Once;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
    /// Bunyan-compatible JSON with span fields
    Bunyan,
}

impl LogFormat {
    /// Reads `MOODCHAT_LOG_FORMAT` (`pretty`, `json`, `bunyan`); pretty when unset or unknown.
    pub fn from_env() -> Self {
        match std::env::var("MOODCHAT_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("bunyan") => LogFormat::Bunyan,
            _ => LogFormat::Pretty,
        }
    }
}

/// Installs the global subscriber. The level comes from `RUST_LOG`, `info` by default.
///
/// Idempotent: later calls are no-ops. Logs go to stderr so stdout stays
/// reserved for replies.
pub fn init_tracing(format: LogFormat) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(filter);

        match format {
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init(),
            LogFormat::Bunyan => registry
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new("moodchat".to_string(), std::io::stderr))
                .init(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_env() {
        temp_env::with_var("MOODCHAT_LOG_FORMAT", Some("bunyan"), || {
            assert_eq!(LogFormat::from_env(), LogFormat::Bunyan);
        });
        temp_env::with_var("MOODCHAT_LOG_FORMAT", Some("xml"), || {
            assert_eq!(LogFormat::from_env(), LogFormat::Pretty);
        });
        temp_env::with_var("MOODCHAT_LOG_FORMAT", None::<&str>, || {
            assert_eq!(LogFormat::from_env(), LogFormat::Pretty);
        });
    }
}
