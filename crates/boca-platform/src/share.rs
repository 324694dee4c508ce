//! Share sheet bridge.
//!
//! Desktop platforms have no system share sheet, so the default
//! implementation puts the share text on the clipboard (`arboard`) and
//! confirms with a native notification.

use boca_common::PlatformError;
use tracing::info;

/// What the page asked to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub message: String,
    pub url: String,
}

/// Presents a share request to the user.
pub trait ShareSheet {
    fn share(&mut self, request: &ShareRequest) -> Result<(), PlatformError>;
}

/// Clipboard-backed share sheet.
pub struct ClipboardShare {
    inner: arboard::Clipboard,
}

impl ClipboardShare {
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ShareSheet for ClipboardShare {
    fn share(&mut self, request: &ShareRequest) -> Result<(), PlatformError> {
        self.inner
            .set_text(request.message.clone())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        info!(url = %request.url, "share text copied to clipboard");

        // The copy already succeeded; a missing toast is not a share failure.
        if let Err(e) = crate::notifications::notify(&request.title, "Link copied to clipboard") {
            tracing::debug!("share confirmation not shown: {e}");
        }
        Ok(())
    }
}
