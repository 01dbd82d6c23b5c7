//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// How the process should log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is not set (e.g. `info`,
    /// `catalog_infra=debug,info`).
    pub default_filter: String,
    /// JSON lines when true, human-readable text otherwise.
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            json: true,
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(settings: &LogSettings) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init(&LogSettings::default());
        init(&LogSettings {
            default_filter: "debug".to_string(),
            json: false,
        });
        ::tracing::info!("still logging after repeated init");
    }

    #[test]
    fn bad_filter_falls_back() {
        init(&LogSettings {
            default_filter: "=[not a directive".to_string(),
            json: true,
        });
    }
}
