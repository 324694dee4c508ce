use std::path::PathBuf;

use boca_common::PlatformError;

pub(super) const APP_NAME: &str = "boca";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/boca`
/// - Linux: `$XDG_CONFIG_HOME/boca` (defaults to `~/.config/boca`)
/// - Windows: `%APPDATA%\boca`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/boca`
/// - Linux: `$XDG_DATA_HOME/boca` (defaults to `~/.local/share/boca`)
/// - Windows: `%APPDATA%\boca`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific cache directory. The embedded surface keeps
/// its persistent content cache here.
pub fn cache_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::cache_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine cache directory".into()))?
        .join(APP_NAME))
}

/// The key-value store file: `data_dir()/storage.json`.
pub fn storage_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("storage.json"))
}

/// Default directory for exported calendar events: `data_dir()/calendar`.
pub fn calendar_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("calendar"))
}

/// `data_dir()/logs`
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
