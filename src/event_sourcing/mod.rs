// ============================================================================
// Snapshot Aggregate Infrastructure
// ============================================================================
//
// Generic command -> events -> snapshot machinery.
// Domain-specific code is in src/domain/
//
// ============================================================================

pub mod core;

pub use self::core::*;
