// ============================================================================
// Cupcake Order Core
// ============================================================================
//
// In-memory state of a single cupcake order: quantity, flavor, pickup date,
// and a price derived from them. A UI drives it through commands and
// observes whole snapshots.
//
// Layout:
// - event_sourcing/ - generic command -> events -> snapshot abstractions
// - domain/order/   - order state, pricing, pickup window, summary
// - messaging/      - share collaborators for finished orders
// - utils/          - locale-aware currency formatting
// - config          - TOML shop configuration
//
// ============================================================================

pub mod config;
pub mod domain;
pub mod event_sourcing;
pub mod messaging;
pub mod utils;

pub use config::ShopConfig;
pub use domain::order::OrderStateHolder;
