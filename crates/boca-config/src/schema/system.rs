//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// An `EnvFilter` directive for the shell's crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "boca=trace",
            LogLevel::Debug => "boca=debug",
            LogLevel::Info => "boca=info",
            LogLevel::Warn => "boca=warn",
            LogLevel::Error => "boca=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Redact tokens and keys from crash reports.
    pub redact_secrets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            redact_secrets: true,
        }
    }
}
