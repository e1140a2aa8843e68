use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event_sourcing::core::DomainEvent;

// ============================================================================
// Order Events - Domain Events for the Order State
// ============================================================================

/// Order Event - Union type for all order events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    Started(OrderStarted),
    QuantitySet(QuantitySet),
    FlavorSet(FlavorSet),
    DateSet(DateSet),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Started(_) => "OrderStarted",
            OrderEvent::QuantitySet(_) => "QuantitySet",
            OrderEvent::FlavorSet(_) => "FlavorSet",
            OrderEvent::DateSet(_) => "DateSet",
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Order Started - a fresh order with its pickup window
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderStarted {
    pub order_id: Uuid,
    pub pickup_options: Vec<String>,
    pub price: String,
}

/// Quantity Set - price recomputed against the current date
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuantitySet {
    pub quantity: u32,
    pub price: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FlavorSet {
    pub flavor: String,
}

/// Date Set - price recomputed against the current quantity
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DateSet {
    pub date: String,
    pub price: String,
}
