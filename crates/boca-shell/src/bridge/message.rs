use boca_common::BridgeError;
use boca_platform::calendar::{parse_timestamp, CalendarEvent};
use serde_json::{Map, Value};

const MAX_TITLE: usize = 256;
const MAX_LOCATION: usize = 512;
const MAX_NOTES: usize = 4096;
const MAX_URL: usize = 2048;
const MAX_DATE: usize = 64;

/// A decoded page-to-shell message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeMessage {
    Share,
    AddToCalendar(CalendarEvent),
    PageLoaded { url: Option<String> },
    /// Posted by the offline document's retry button.
    Retry,
    /// Hardware back pressed while the page has keyboard focus.
    Back,
    Reload,
}

impl BridgeMessage {
    /// Decode and validate. `Ok(None)` means an unknown `type`, which is
    /// ignored.
    pub fn parse(raw: &str) -> Result<Option<Self>, BridgeError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| BridgeError::Malformed(e.to_string()))?;
        let Value::Object(obj) = value else {
            return Err(BridgeError::Malformed("expected a JSON object".into()));
        };
        let Some(Value::String(kind)) = obj.get("type") else {
            return Err(BridgeError::MissingType);
        };

        let message = match kind.as_str() {
            "share" => Self::Share,
            "add-to-calendar" | "addToCalendar" => Self::AddToCalendar(calendar_event(&obj)?),
            "page-loaded" | "pageLoaded" => Self::PageLoaded {
                url: optional(&obj, "url", MAX_URL)?,
            },
            "retry" => Self::Retry,
            "back" => Self::Back,
            "reload" => Self::Reload,
            _ => return Ok(None),
        };
        Ok(Some(message))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Share => "share",
            Self::AddToCalendar(_) => "add-to-calendar",
            Self::PageLoaded { .. } => "page-loaded",
            Self::Retry => "retry",
            Self::Back => "back",
            Self::Reload => "reload",
        }
    }
}

fn calendar_event(obj: &Map<String, Value>) -> Result<CalendarEvent, BridgeError> {
    let title = required(obj, "title", MAX_TITLE)?;
    let start_date = required(obj, "startDate", MAX_DATE)?;
    let end_date = required(obj, "endDate", MAX_DATE)?;

    let start = parse_timestamp(&start_date)
        .ok_or_else(|| invalid("startDate", "not an ISO-8601 timestamp"))?;
    let end =
        parse_timestamp(&end_date).ok_or_else(|| invalid("endDate", "not an ISO-8601 timestamp"))?;
    if end < start {
        return Err(invalid("endDate", "before startDate"));
    }

    let url = optional(obj, "url", MAX_URL)?;
    if let Some(u) = url.as_deref() {
        match url::Url::parse(u) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            _ => return Err(invalid("url", "not an http(s) URL")),
        }
    }

    Ok(CalendarEvent {
        title,
        start_date,
        end_date,
        location: optional(obj, "location", MAX_LOCATION)?,
        notes: optional(obj, "notes", MAX_NOTES)?,
        url,
    })
}

fn invalid(field: &'static str, reason: impl Into<String>) -> BridgeError {
    BridgeError::InvalidField {
        field,
        reason: reason.into(),
    }
}

fn required(
    obj: &Map<String, Value>,
    field: &'static str,
    max: usize,
) -> Result<String, BridgeError> {
    let value = optional(obj, field, max)?.ok_or_else(|| invalid(field, "missing"))?;
    if value.trim().is_empty() {
        return Err(invalid(field, "empty"));
    }
    Ok(value)
}

/// A string field; absent, `null` and empty all read as `None`.
fn optional(
    obj: &Map<String, Value>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, BridgeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) if s.chars().count() > max => {
            Err(invalid(field, format!("longer than {max} characters")))
        }
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid(field, "expected a string")),
    }
}
