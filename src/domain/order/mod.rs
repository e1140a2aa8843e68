// ============================================================================
// Order Domain - Business Logic for the Cupcake Order
// ============================================================================
//
// This module contains ALL order-specific code:
// - Value objects (Catalog, QuantityOption, OrderStep)
// - Events (OrderStarted, QuantitySet, FlavorSet, DateSet)
// - Commands (SetQuantity, SetFlavor, SetDate, ResetOrder)
// - Errors (OrderError enum)
// - Aggregate (OrderState snapshot)
// - Pricing and pickup-date policy
// - Summary text for sharing
// - Command Handler (OrderStateHolder)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod pricing;
pub mod pickup;
pub mod summary;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use pricing::{PriceSchedule, PricingPolicy};
pub use summary::OrderSummary;
pub use command_handler::*;
