//! `tracing` subscriber installation.

use crate::logging::{LogFormat, LogLevel};

/// Errors raised while configuring logging.
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("a global subscriber is already installed")]
    AlreadyInstalled,
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Human,
        }
    }
}

impl LogConfig {
    pub fn new(level: LogLevel, format: LogFormat) -> Self {
        Self { level, format }
    }

    /// Filter directive: our crates at `level`, everything else at `warn`.
    pub fn directive(&self) -> String {
        let level = self.level.as_filter();
        format!(
            "warn,pro_core={l},pro_leads={l},pro_data={l},pro_observability={l},pro_cli={l},pro_landing={l}",
            l = level
        )
    }
}

/// Install a stderr subscriber for native binaries.
///
/// `RUST_LOG` takes precedence over `config.level` when set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_native(config: &LogConfig) -> Result<(), LogInitError> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directive) if !directive.is_empty() => EnvFilter::try_new(directive),
        _ => EnvFilter::try_new(config.directive()),
    }
    .map_err(|e| LogInitError::Filter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Human => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|_| LogInitError::AlreadyInstalled)
}

/// Route `tracing` events to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn init_browser(level: LogLevel) {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level.to_tracing())
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Human);
    }

    #[test]
    fn test_directive_scopes_our_crates() {
        let directive = LogConfig::new(LogLevel::Debug, LogFormat::Json).directive();

        assert!(directive.starts_with("warn,"));
        assert!(directive.contains("pro_leads=debug"));
        assert!(directive.contains("pro_cli=debug"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_init_native_twice_reports_already_installed() {
        let config = LogConfig::default();
        let _ = init_native(&config);
        assert!(matches!(
            init_native(&config),
            Err(LogInitError::AlreadyInstalled)
        ));
    }
}
