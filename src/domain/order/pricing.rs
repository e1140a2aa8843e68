use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::ShopLocale;

// ============================================================================
// Pricing Policy
// ============================================================================
//
// price = quantity * unit_price, plus the same-day surcharge when the chosen
// pickup date is the first pickup option (today).
//
// ============================================================================

/// Prices in the shop's currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceSchedule {
    pub unit_price: Decimal,
    pub same_day_surcharge: Decimal,
}

impl Default for PriceSchedule {
    fn default() -> Self {
        Self {
            unit_price: Decimal::new(200, 2),
            same_day_surcharge: Decimal::new(300, 2),
        }
    }
}

/// True when `date` is today's pickup option.
pub fn is_same_day(date: &str, pickup_options: &[String]) -> bool {
    pickup_options.first().is_some_and(|today| today == date)
}

pub fn compute_price(
    quantity: u32,
    date: &str,
    pickup_options: &[String],
    schedule: &PriceSchedule,
) -> Decimal {
    let mut price = schedule.unit_price * Decimal::from(quantity);

    if is_same_day(date, pickup_options) {
        price += schedule.same_day_surcharge;
    }

    price
}

/// Price schedule bound to the locale prices are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingPolicy {
    pub schedule: PriceSchedule,
    pub locale: ShopLocale,
}

impl PricingPolicy {
    pub fn new(schedule: PriceSchedule, locale: ShopLocale) -> Self {
        Self { schedule, locale }
    }

    pub fn compute_price(&self, quantity: u32, date: &str, pickup_options: &[String]) -> Decimal {
        compute_price(quantity, date, pickup_options, &self.schedule)
    }

    pub fn format_price(&self, quantity: u32, date: &str, pickup_options: &[String]) -> String {
        self.locale
            .format_currency(self.compute_price(quantity, date, pickup_options))
    }
}
