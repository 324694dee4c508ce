use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("calendar error: {0}")]
    CalendarError(String),

    #[error("notification error: {0}")]
    NotificationError(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Reasons a message posted by the embedded page was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("message too large: {len} bytes (limit {limit})")]
    TooLarge { len: usize, limit: usize },

    #[error("malformed message: {0}")]
    Malformed(String),

    #[error("message has no string `type` field")]
    MissingType,

    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("message from disallowed source: {0}")]
    OriginRejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeepLinkError {
    #[error("deep link resolves outside the allowed origins: {0}")]
    OriginRejected(String),

    #[error("invalid deep link: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BocaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    DeepLink(#[from] DeepLinkError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("site.base_url must end with '/'".into());
        assert_eq!(
            err.to_string(),
            "config validation error: site.base_url must end with '/'"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ClipboardError("access denied".into());
        assert_eq!(err.to_string(), "clipboard error: access denied");

        let err = PlatformError::PermissionDenied("calendar".into());
        assert_eq!(err.to_string(), "permission denied: calendar");
    }

    #[test]
    fn bridge_error_display() {
        let err = BridgeError::TooLarge {
            len: 70000,
            limit: 65536,
        };
        assert_eq!(
            err.to_string(),
            "message too large: 70000 bytes (limit 65536)"
        );

        let err = BridgeError::InvalidField {
            field: "startDate",
            reason: "not an ISO-8601 timestamp".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid field `startDate`: not an ISO-8601 timestamp"
        );
    }

    #[test]
    fn boca_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: BocaError = config_err.into();
        assert!(matches!(err, BocaError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn boca_error_from_platform() {
        let platform_err = PlatformError::StorageError("disk full".into());
        let err: BocaError = platform_err.into();
        assert!(matches!(err, BocaError::Platform(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn boca_error_from_bridge_and_deep_link() {
        let err: BocaError = BridgeError::MissingType.into();
        assert!(matches!(err, BocaError::Bridge(_)));

        let err: BocaError = DeepLinkError::OriginRejected("https://evil.com/".into()).into();
        assert!(matches!(err, BocaError::DeepLink(_)));
        assert!(err.to_string().contains("evil.com"));
    }

    #[test]
    fn boca_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BocaError = io_err.into();
        assert!(matches!(err, BocaError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn boca_error_other_variants() {
        let err = BocaError::Network("timeout".into());
        assert_eq!(err.to_string(), "network error: timeout");

        let err = BocaError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");

        let err = BocaError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
