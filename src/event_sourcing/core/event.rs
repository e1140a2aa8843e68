// ============================================================================
// Domain Event Trait
// ============================================================================

/// Common surface of every domain event.
///
/// `event_type` is the stable name used in structured log fields.
pub trait DomainEvent: Clone + Send + Sync {
    fn event_type(&self) -> &'static str;
}
