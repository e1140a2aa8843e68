// ============================================================================
// Messaging - hand-off of finished orders to the outside world
// ============================================================================

pub mod share;

pub use share::{LogShareTarget, RecordingShareTarget, ShareRequest, ShareTarget, SHARE_MIME_TYPE};
