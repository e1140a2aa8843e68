// ============================================================================
// Aggregate Core - Generic Abstractions
// ============================================================================
//
// Nothing in here knows about cupcakes. An aggregate validates a command
// against its current snapshot, emits events, and folds those events into
// a successor snapshot. The previous snapshot is never touched.
//
// ============================================================================

pub mod aggregate;
pub mod event;

pub use aggregate::Aggregate;
pub use event::DomainEvent;
