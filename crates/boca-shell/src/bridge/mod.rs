//! Message bridge between page script and the shell.
//!
//! The page is treated as untrusted: every message is size-capped, parsed,
//! checked against the sender's origin and field-validated before it turns
//! into a [`BridgeAction`]. Nothing is ever sent back to the page.

mod message;
mod offline;
pub mod script;


pub use message::BridgeMessage;
pub use offline::OFFLINE_HTML;

use boca_common::BridgeError;
use boca_config::BocaConfig;
use boca_platform::calendar::CalendarEvent;
use boca_platform::ShareRequest;
use tracing::{debug, info, warn};

use crate::origin::OriginPolicy;

/// What the shell should do in response to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeAction {
    Share(ShareRequest),
    AddToCalendar(CalendarEvent),
    PageLoaded(String),
    Retry,
    Back,
    Reload,
}

pub struct MessageBridge {
    policy: OriginPolicy,
    max_message_bytes: usize,
    calendar_enabled: bool,
    share_title: String,
    share_message: String,
}

impl MessageBridge {
    pub fn new(config: &BocaConfig, policy: OriginPolicy) -> Self {
        Self {
            policy,
            max_message_bytes: config.bridge.max_message_bytes as usize,
            calendar_enabled: config.bridge.calendar_enabled,
            share_title: config.site.title.clone(),
            share_message: config.site.share_message.clone(),
        }
    }

    /// Route a raw message posted from the document at `source_url`.
    /// `current_url` is the tracked page URL used for sharing.
    ///
    /// Failures are logged and yield `None`.
    pub fn route(&self, source_url: &str, raw: &str, current_url: &str) -> Option<BridgeAction> {
        match self.decode(source_url, raw, current_url) {
            Ok(action) => action,
            Err(e) => {
                warn!(source = %source_url, "bridge message dropped: {e}");
                None
            }
        }
    }

    pub fn decode(
        &self,
        source_url: &str,
        raw: &str,
        current_url: &str,
    ) -> Result<Option<BridgeAction>, BridgeError> {
        if raw.len() > self.max_message_bytes {
            return Err(BridgeError::TooLarge {
                len: raw.len(),
                limit: self.max_message_bytes,
            });
        }
        let Some(message) = BridgeMessage::parse(raw)? else {
            debug!(source = %source_url, "unknown bridge message type ignored");
            return Ok(None);
        };
        self.check_source(source_url, &message)?;

        let action = match message {
            BridgeMessage::Share => BridgeAction::Share(ShareRequest {
                title: self.share_title.clone(),
                message: self.share_message.replace("{url}", current_url),
                url: current_url.to_string(),
            }),
            BridgeMessage::AddToCalendar(event) => {
                if !self.calendar_enabled {
                    debug!(title = %event.title, "calendar bridge disabled");
                    return Ok(None);
                }
                BridgeAction::AddToCalendar(event)
            }
            BridgeMessage::PageLoaded { url } => {
                let url = url.unwrap_or_else(|| source_url.to_string());
                info!(url = %url, "page loaded");
                BridgeAction::PageLoaded(url)
            }
            BridgeMessage::Retry => BridgeAction::Retry,
            BridgeMessage::Back => BridgeAction::Back,
            BridgeMessage::Reload => BridgeAction::Reload,
        };
        Ok(Some(action))
    }

    /// Live pages must be on an allowed origin; the offline document may
    /// only ask for a retry.
    fn check_source(&self, source_url: &str, message: &BridgeMessage) -> Result<(), BridgeError> {
        if OriginPolicy::is_blank(source_url) {
            return match message {
                BridgeMessage::Retry => Ok(()),
                other => Err(BridgeError::OriginRejected(format!(
                    "{} from offline document",
                    other.kind()
                ))),
            };
        }
        if !self.policy.allows(source_url) {
            return Err(BridgeError::OriginRejected(source_url.to_string()));
        }
        Ok(())
    }
}
