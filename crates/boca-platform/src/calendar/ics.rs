//! Desktop calendar store: RFC 5545 `.ics` files.
//!
//! Desktop systems have no shared event store a sandboxed app can write to,
//! so each event becomes an `.ics` file that is handed to the user's
//! calendar application.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use boca_common::PlatformError;

use super::{CalendarEvent, CalendarStore};
use crate::PermissionStatus;

const PRODID: &str = "-//Boca Parliament//Boca Shell//EN";

/// Writes events as `.ics` files into a directory.
pub struct IcsCalendarStore {
    dir: PathBuf,
    open_after_save: bool,
}

impl IcsCalendarStore {
    pub fn new(dir: impl Into<PathBuf>, open_after_save: bool) -> Self {
        Self {
            dir: dir.into(),
            open_after_save,
        }
    }
}

#[async_trait]
impl CalendarStore for IcsCalendarStore {
    /// Writing is permitted when the calendar directory exists (or can be
    /// created) and is not read-only.
    async fn request_permission(&self) -> Result<PermissionStatus, PlatformError> {
        if let Err(e) = tokio::fs::create_dir_all(&self.dir).await {
            warn!(dir = %self.dir.display(), "calendar directory unavailable: {e}");
            return Ok(PermissionStatus::Denied);
        }
        let meta = tokio::fs::metadata(&self.dir)
            .await
            .map_err(|e| PlatformError::CalendarError(e.to_string()))?;
        if meta.permissions().readonly() {
            return Ok(PermissionStatus::Denied);
        }
        Ok(PermissionStatus::Granted)
    }

    async fn save_event(&self, event: &CalendarEvent) -> Result<Option<String>, PlatformError> {
        let uid = format!("{}@boca", uuid::Uuid::new_v4());
        let body = render_ics(event, &uid, Utc::now())?;
        let path = self.dir.join(format!("{}.ics", file_stem(&event.title, &uid)));

        tokio::fs::write(&path, body)
            .await
            .map_err(|e| PlatformError::CalendarError(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), "calendar event written");

        if self.open_after_save {
            if let Err(e) = open_with_default_app(&path) {
                // The file exists; the user can still import it by hand.
                warn!("could not hand event to calendar app: {e}");
            }
        }
        Ok(Some(uid))
    }
}

/// Render a single-event VCALENDAR document.
pub fn render_ics(
    event: &CalendarEvent,
    uid: &str,
    stamp: DateTime<Utc>,
) -> Result<String, PlatformError> {
    let start = event.starts_at().ok_or_else(|| {
        PlatformError::CalendarError(format!("invalid start date '{}'", event.start_date))
    })?;
    let end = event.ends_at().ok_or_else(|| {
        PlatformError::CalendarError(format!("invalid end date '{}'", event.end_date))
    })?;
    if end < start {
        return Err(PlatformError::CalendarError(
            "event ends before it starts".into(),
        ));
    }

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        format!("DTSTAMP:{}", ics_time(stamp)),
        format!("DTSTART:{}", ics_time(start)),
        format!("DTEND:{}", ics_time(end)),
        format!("SUMMARY:{}", escape_text(&event.title)),
    ];
    if let Some(location) = event.location.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }
    if let Some(notes) = event.notes.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("DESCRIPTION:{}", escape_text(notes)));
    }
    if let Some(url) = event.url.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("URL:{url}"));
    }
    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    let mut out = String::new();
    for line in lines {
        out.push_str(&fold_line(&line));
        out.push_str("\r\n");
    }
    Ok(out)
}

fn ics_time(t: DateTime<Utc>) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// RFC 5545 §3.3.11 TEXT escaping.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Fold a content line at 75 octets without splitting UTF-8 sequences.
fn fold_line(line: &str) -> String {
    const LIMIT: usize = 75;
    if line.len() <= LIMIT {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / LIMIT * 3);
    let mut width = 0;
    for c in line.chars() {
        let len = c.len_utf8();
        // Continuation lines start with a space, which counts toward the limit.
        if width + len > LIMIT {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(c);
        width += len;
    }
    out
}

/// A filesystem-safe name: slugged title plus the start of the uid.
fn file_stem(title: &str, uid: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let slug: String = slug.chars().take(40).collect();
    let short: String = uid.chars().take(8).collect();
    if slug.is_empty() {
        format!("event-{short}")
    } else {
        format!("{slug}-{short}")
    }
}

fn open_with_default_app(path: &std::path::Path) -> Result<(), PlatformError> {
    #[cfg(target_os = "macos")]
    let mut cmd = std::process::Command::new("open");
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut cmd = std::process::Command::new("xdg-open");

    cmd.arg(path)
        .spawn()
        .map_err(|e| PlatformError::CalendarError(format!("failed to open {}: {e}", path.display())))?;
    debug!(path = %path.display(), "event handed to calendar app");
    Ok(())
}
