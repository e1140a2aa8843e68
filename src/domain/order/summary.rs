use crate::messaging::ShareRequest;
use super::aggregate::OrderState;

// ============================================================================
// Order Summary - text shown on the last step and handed to the share sheet
// ============================================================================

pub const NEW_ORDER_SUBJECT: &str = "New Cupcake Order";

/// "1 cupcake", "6 cupcakes", "0 cupcakes"
pub fn quantity_phrase(quantity: u32) -> String {
    if quantity == 1 {
        "1 cupcake".to_string()
    } else {
        format!("{quantity} cupcakes")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub quantity: String,
    pub flavor: String,
    pub pickup_date: String,
    pub total: String,
}

impl OrderSummary {
    pub fn from_state(state: &OrderState) -> Self {
        Self {
            quantity: quantity_phrase(state.quantity()),
            flavor: state.flavor().to_string(),
            pickup_date: state.date().to_string(),
            total: state.price().to_string(),
        }
    }

    /// Label/value rows for the summary step.
    pub fn items(&self) -> [(&'static str, &str); 3] {
        [
            ("Quantity", self.quantity.as_str()),
            ("Flavor", self.flavor.as_str()),
            ("Pickup date", self.pickup_date.as_str()),
        ]
    }

    pub fn body(&self) -> String {
        format!(
            "Quantity: {}\nFlavor: {}\nPickup date: {}\nTotal: {}\n\nThank you!",
            self.quantity, self.flavor, self.pickup_date, self.total
        )
    }

    pub fn to_share_request(&self) -> ShareRequest {
        ShareRequest {
            subject: NEW_ORDER_SUBJECT.to_string(),
            summary: self.body(),
        }
    }
}
