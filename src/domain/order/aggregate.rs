use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event_sourcing::core::Aggregate;
use super::commands::OrderCommand;
use super::errors::OrderError;
use super::events::*;
use super::pickup::generate_pickup_options;
use super::pricing::{is_same_day, PricingPolicy};

// ============================================================================
// Order State - immutable snapshot of the order in progress
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderState {
    // Identity
    order_id: Uuid,
    version: u64,

    // Choices
    quantity: u32,
    flavor: String,
    date: String,

    // Derived from quantity + date, never set directly
    price: String,

    // Fixed when the order starts
    pickup_options: Vec<String>,
}

/// Inputs a command needs besides the snapshot itself.
#[derive(Debug, Clone, Copy)]
pub struct OrderContext {
    pub policy: PricingPolicy,
    pub today: NaiveDate,
}

impl OrderState {
    /// Fresh order whose pickup window starts at `context.today`.
    pub fn start(context: &OrderContext) -> Self {
        Self::from_started(&Self::started(context))
    }

    fn started(context: &OrderContext) -> OrderStarted {
        let pickup_options = generate_pickup_options(context.today, context.policy.locale);
        let price = context.policy.format_price(0, "", &pickup_options);

        OrderStarted {
            order_id: Uuid::new_v4(),
            pickup_options,
            price,
        }
    }

    fn from_started(e: &OrderStarted) -> Self {
        Self {
            order_id: e.order_id,
            version: 0,
            quantity: 0,
            flavor: String::new(),
            date: String::new(),
            price: e.price.clone(),
            pickup_options: e.pickup_options.clone(),
        }
    }

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Chosen flavor, empty when unset.
    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    /// Chosen pickup label, empty when unset.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn pickup_options(&self) -> &[String] {
        &self.pickup_options
    }

    pub fn is_same_day(&self) -> bool {
        is_same_day(&self.date, &self.pickup_options)
    }

    /// First choice still missing before the order can be shared.
    pub fn missing_choice(&self) -> Option<&'static str> {
        if self.quantity == 0 {
            Some("quantity")
        } else if self.flavor.is_empty() {
            Some("flavor")
        } else if self.date.is_empty() {
            Some("pickup date")
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_choice().is_none()
    }
}

// ============================================================================
// Aggregate Trait Implementation
// ============================================================================

impl Aggregate for OrderState {
    type Event = OrderEvent;
    type Command = OrderCommand;
    type Context = OrderContext;
    type Error = OrderError;

    fn apply_event(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::Started(e) => {
                // A new order replaces everything, including identity
                *self = Self::from_started(e);
                return;
            }
            OrderEvent::QuantitySet(e) => {
                self.quantity = e.quantity;
                self.price = e.price.clone();
            }
            OrderEvent::FlavorSet(e) => {
                self.flavor = e.flavor.clone();
            }
            OrderEvent::DateSet(e) => {
                self.date = e.date.clone();
                self.price = e.price.clone();
            }
        }

        self.version += 1;
    }

    fn handle_command(
        &self,
        command: &Self::Command,
        context: &Self::Context,
    ) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::SetQuantity(quantity) => {
                let price = context
                    .policy
                    .format_price(*quantity, &self.date, &self.pickup_options);

                Ok(vec![OrderEvent::QuantitySet(QuantitySet {
                    quantity: *quantity,
                    price,
                })])
            }

            OrderCommand::SetFlavor(flavor) => {
                if flavor.trim().is_empty() {
                    return Err(OrderError::EmptyFlavor);
                }

                Ok(vec![OrderEvent::FlavorSet(FlavorSet {
                    flavor: flavor.clone(),
                })])
            }

            OrderCommand::SetDate(date) => {
                if !self.pickup_options.contains(date) {
                    return Err(OrderError::UnknownPickupDate(date.clone()));
                }

                let price = context
                    .policy
                    .format_price(self.quantity, date, &self.pickup_options);

                Ok(vec![OrderEvent::DateSet(DateSet {
                    date: date.clone(),
                    price,
                })])
            }

            OrderCommand::ResetOrder => Ok(vec![OrderEvent::Started(Self::started(context))]),
        }
    }

    fn aggregate_id(&self) -> Uuid {
        self.order_id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
