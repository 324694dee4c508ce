use boca_common::PlatformError;
use tracing::{debug, info};

/// Sends a native desktop notification.
///
/// - macOS: `osascript` `display notification`.
/// - Linux: `notify-send`, when installed.
/// - Other platforms: logged only.
pub fn notify(title: &str, body: &str) -> Result<(), PlatformError> {
    platform_notify(title, body)
}

/// Whether this platform can display native notifications.
pub fn notifications_supported() -> bool {
    cfg!(any(target_os = "macos", target_os = "linux"))
}

/// Escape a string for use inside an AppleScript double-quoted literal.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(target_os = "macos")]
fn platform_notify(title: &str, body: &str) -> Result<(), PlatformError> {
    let script = format!(
        "display notification \"{}\" with title \"{}\"",
        escape_applescript(body),
        escape_applescript(title)
    );

    let output = std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output()
        .map_err(|e| PlatformError::NotificationError(format!("failed to run osascript: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PlatformError::NotificationError(format!(
            "osascript failed: {stderr}"
        )));
    }

    info!("native notification sent");
    Ok(())
}

#[cfg(target_os = "linux")]
fn platform_notify(title: &str, body: &str) -> Result<(), PlatformError> {
    // Arguments are passed directly, no shell involved.
    match std::process::Command::new("notify-send")
        .arg("--app-name=Boca")
        .arg(title)
        .arg(body)
        .output()
    {
        Ok(output) if output.status.success() => {
            info!("native notification sent");
            Ok(())
        }
        Ok(output) => Err(PlatformError::NotificationError(format!(
            "notify-send failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("notify-send not installed; notification logged only");
            info!(title, "notification");
            Ok(())
        }
        Err(e) => Err(PlatformError::NotificationError(format!(
            "failed to run notify-send: {e}"
        ))),
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn platform_notify(title: &str, _body: &str) -> Result<(), PlatformError> {
    debug!("no native notification backend");
    info!(title, "notification (stub)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applescript_escaping() {
        assert_eq!(escape_applescript(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_applescript(r"a\b"), r"a\\b");
        assert_eq!(escape_applescript("plain"), "plain");
    }

    #[test]
    fn desktop_platforms_report_support() {
        if cfg!(target_os = "macos") || cfg!(target_os = "linux") {
            assert!(notifications_supported());
        }
    }
}
