use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// A fixed quantity button offered on the start step.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuantityOption {
    pub label: String,
    pub quantity: u32,
}

impl QuantityOption {
    pub fn new(label: impl Into<String>, quantity: u32) -> Self {
        Self {
            label: label.into(),
            quantity,
        }
    }
}

/// What the shop sells: quantity presets and flavors.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Catalog {
    pub quantity_options: Vec<QuantityOption>,
    pub flavors: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            quantity_options: vec![
                QuantityOption::new("One Cupcake", 1),
                QuantityOption::new("Six Cupcakes", 6),
                QuantityOption::new("Twelve Cupcakes", 12),
            ],
            flavors: ["Vanilla", "Chocolate", "Red Velvet", "Salted Caramel", "Coffee"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Steps of the order flow, in the order the user walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStep {
    Start,
    Flavor,
    Pickup,
    Summary,
}

impl OrderStep {
    pub fn title(&self) -> &'static str {
        match self {
            OrderStep::Start => "Cupcake",
            OrderStep::Flavor => "Choose Flavor",
            OrderStep::Pickup => "Choose Pickup Date",
            OrderStep::Summary => "Order Summary",
        }
    }

    /// Step reached by pressing "Next"; `None` on the summary.
    pub fn next(&self) -> Option<OrderStep> {
        match self {
            OrderStep::Start => Some(OrderStep::Flavor),
            OrderStep::Flavor => Some(OrderStep::Pickup),
            OrderStep::Pickup => Some(OrderStep::Summary),
            OrderStep::Summary => None,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
