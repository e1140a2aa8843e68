use std::sync::Mutex;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const SHARE_MIME_TYPE: &str = "text/plain";

/// Plain-text payload given to a share sheet or similar collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub subject: String,
    pub summary: String,
}

impl ShareRequest {
    pub fn mime_type(&self) -> &'static str {
        SHARE_MIME_TYPE
    }
}

/// Something that can take a finished order summary off our hands.
///
/// Implementations must not retain the order for any purpose other than
/// delivering the text.
pub trait ShareTarget: Send + Sync {
    fn share(&self, request: &ShareRequest) -> Result<()>;
}

/// Writes the request to the log. Used by the demo binary.
#[derive(Debug, Default)]
pub struct LogShareTarget;

impl ShareTarget for LogShareTarget {
    fn share(&self, request: &ShareRequest) -> Result<()> {
        tracing::info!(
            subject = %request.subject,
            mime_type = request.mime_type(),
            "Sharing order summary"
        );
        for line in request.summary.lines() {
            tracing::info!("  {}", line);
        }
        Ok(())
    }
}

/// Keeps every request in memory for later inspection.
#[derive(Debug, Default)]
pub struct RecordingShareTarget {
    requests: Mutex<Vec<ShareRequest>>,
}

impl RecordingShareTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ShareTarget for RecordingShareTarget {
    fn share(&self, request: &ShareRequest) -> Result<()> {
        tracing::debug!(subject = %request.subject, "Recording share request");
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        Ok(())
    }
}
