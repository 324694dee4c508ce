use std::fs;

use boca_common::PlatformError;

use super::resolve::{cache_dir, config_dir, crash_report_dir, data_dir, log_dir};

/// Creates the shell's directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [
        config_dir()?,
        data_dir()?,
        cache_dir()?,
        log_dir()?,
        crash_report_dir()?,
    ] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}
