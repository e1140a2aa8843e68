use uuid::Uuid;

use super::event::DomainEvent;

// ============================================================================
// Aggregate Root Pattern - Snapshot Core
// ============================================================================
//
// Key Principles:
// 1. Commands are validated against the current snapshot before any event
// 2. Events represent facts that have already been accepted
// 3. A snapshot is only ever changed by folding events into a copy
// 4. Observers see the old snapshot or the new one, never a mix
//
// ============================================================================

/// Generic Aggregate trait - every snapshot-replaced aggregate implements this
///
/// Type Parameters:
/// - `Event`: The domain event type for this aggregate
/// - `Command`: The command type for this aggregate
/// - `Context`: Ambient inputs a command needs (clock reading, policies)
/// - `Error`: The error type for business rule violations
pub trait Aggregate: Sized + Clone + Send + Sync {
    type Event: DomainEvent;
    type Command;
    type Context;
    type Error;

    /// Fold one accepted event into the snapshot
    fn apply_event(&mut self, event: &Self::Event);

    /// Handle command and emit events (business logic)
    fn handle_command(
        &self,
        command: &Self::Command,
        context: &Self::Context,
    ) -> Result<Vec<Self::Event>, Self::Error>;

    /// Get aggregate ID
    fn aggregate_id(&self) -> Uuid;

    /// Number of events folded in since the first one
    fn version(&self) -> u64;

    /// Run a command and return the successor snapshot with the events that
    /// produced it. `self` is left as it was.
    fn execute(
        &self,
        command: &Self::Command,
        context: &Self::Context,
    ) -> Result<(Self, Vec<Self::Event>), Self::Error> {
        let events = self.handle_command(command, context)?;

        let mut next = self.clone();
        for event in &events {
            next.apply_event(event);
        }

        Ok((next, events))
    }
}
