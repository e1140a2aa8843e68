use std::sync::Mutex;

use chrono::{Local, NaiveDate, NaiveTime};

use crate::utils::ShopLocale;

// ============================================================================
// Pickup Window
// ============================================================================
//
// An order can be picked up today or on any of the next three days.
// Labels look like "Sun Oct 18" (short weekday, short month, day of month)
// in the configured locale.
//
// ============================================================================

pub const PICKUP_OPTION_COUNT: usize = 4;

const PICKUP_LABEL_FORMAT: &str = "%a %b %-d";

/// Source of "today" for pickup windows.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a date that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap_or_else(|e| e.into_inner()) = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Calendar dates of the pickup window starting at `today`.
pub fn pickup_dates(today: NaiveDate) -> Vec<NaiveDate> {
    today.iter_days().take(PICKUP_OPTION_COUNT).collect()
}

pub fn pickup_label(date: NaiveDate, locale: ShopLocale) -> String {
    // Localized formatting lives on DateTime; the time of day is never shown
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(PICKUP_LABEL_FORMAT, locale.date_locale())
        .to_string()
}

/// Labels for today and the following three days, in order.
pub fn generate_pickup_options(today: NaiveDate, locale: ShopLocale) -> Vec<String> {
    pickup_dates(today)
        .into_iter()
        .map(|date| pickup_label(date, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_four_consecutive_days_from_today() {
        let today = date(2026, 10, 18);
        let dates = pickup_dates(today);

        assert_eq!(dates.len(), PICKUP_OPTION_COUNT);
        assert_eq!(dates[0], today);
        for pair in dates.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn test_en_us_labels() {
        let options = generate_pickup_options(date(2026, 10, 18), ShopLocale::EnUs);

        assert_eq!(
            options,
            vec!["Sun Oct 18", "Mon Oct 19", "Tue Oct 20", "Wed Oct 21"]
        );
    }

    #[test]
    fn test_labels_across_year_end() {
        let options = generate_pickup_options(date(2026, 12, 30), ShopLocale::EnUs);

        assert_eq!(
            options,
            vec!["Wed Dec 30", "Thu Dec 31", "Fri Jan 1", "Sat Jan 2"]
        );
    }

    #[test]
    fn test_de_de_labels() {
        let options = generate_pickup_options(date(2026, 10, 18), ShopLocale::DeDe);
        assert_eq!(options[0], "So Okt 18");
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let today = date(2027, 2, 27);
        assert_eq!(
            generate_pickup_options(today, ShopLocale::FrFr),
            generate_pickup_options(today, ShopLocale::FrFr)
        );
    }

    #[test]
    fn test_fixed_clock_moves_on_set() {
        let clock = FixedClock::new(date(2026, 10, 18));
        assert_eq!(clock.today(), date(2026, 10, 18));

        clock.set(date(2026, 10, 20));
        assert_eq!(clock.today(), date(2026, 10, 20));
    }
}
