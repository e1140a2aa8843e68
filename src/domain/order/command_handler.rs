use std::sync::Arc;

use anyhow::{Context as _, Result};
use tokio::sync::watch;

use crate::event_sourcing::core::{Aggregate, DomainEvent};
use crate::messaging::{ShareRequest, ShareTarget};

use super::aggregate::{OrderContext, OrderState};
use super::commands::OrderCommand;
use super::errors::OrderError;
use super::pickup::{Clock, SystemClock};
use super::pricing::PricingPolicy;
use super::summary::OrderSummary;

// ============================================================================
// Order State Holder
// ============================================================================
//
// Orchestrates: Command → OrderState → Events → new snapshot → observers
//
// The holder is the only writer. Every accepted command publishes a whole new
// snapshot; a rejected command publishes nothing.
//
// ============================================================================

/// Observer handle: sees the current snapshot and is woken on replacement.
pub type OrderObserver = watch::Receiver<Arc<OrderState>>;

pub struct OrderStateHolder {
    policy: PricingPolicy,
    clock: Arc<dyn Clock>,
    state: watch::Sender<Arc<OrderState>>,
}

impl OrderStateHolder {
    pub fn new(policy: PricingPolicy, clock: Arc<dyn Clock>) -> Self {
        let context = OrderContext {
            policy,
            today: clock.today(),
        };
        let initial = OrderState::start(&context);

        tracing::info!(
            order_id = %initial.order_id(),
            first_pickup = ?initial.pickup_options().first(),
            "Order started"
        );

        let (state, _) = watch::channel(Arc::new(initial));
        Self { policy, clock, state }
    }

    /// Holder reading today's date from the system clock.
    pub fn with_system_clock(policy: PricingPolicy) -> Self {
        Self::new(policy, Arc::new(SystemClock))
    }

    /// Latest snapshot.
    pub fn current_state(&self) -> Arc<OrderState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> OrderObserver {
        self.state.subscribe()
    }

    /// Handle a command and publish the resulting snapshot
    pub fn dispatch(&mut self, command: OrderCommand) -> Result<Arc<OrderState>, OrderError> {
        let current = self.current_state();
        let context = OrderContext {
            policy: self.policy,
            today: self.clock.today(),
        };

        let (next, events) = match current.execute(&command, &context) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    order_id = %current.order_id(),
                    command = command.name(),
                    error = %e,
                    "Command rejected"
                );
                return Err(e);
            }
        };

        for event in &events {
            tracing::debug!(
                order_id = %next.order_id(),
                event_type = event.event_type(),
                version = next.version(),
                "Applied order event"
            );
        }

        let next = Arc::new(next);
        self.state.send_replace(next.clone());

        tracing::debug!(
            order_id = %next.order_id(),
            quantity = next.quantity(),
            flavor = next.flavor(),
            date = next.date(),
            price = next.price(),
            "Order state replaced"
        );

        Ok(next)
    }

    /// Never rejected; the price follows the current date.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<Arc<OrderState>, OrderError> {
        self.dispatch(OrderCommand::SetQuantity(quantity))
    }

    pub fn set_flavor(&mut self, flavor: impl Into<String>) -> Result<Arc<OrderState>, OrderError> {
        self.dispatch(OrderCommand::SetFlavor(flavor.into()))
    }

    /// `date` must be one of the current pickup options.
    pub fn set_date(&mut self, date: impl Into<String>) -> Result<Arc<OrderState>, OrderError> {
        self.dispatch(OrderCommand::SetDate(date.into()))
    }

    /// Starts over with a pickup window computed from today's date.
    pub fn reset_order(&mut self) -> Result<Arc<OrderState>, OrderError> {
        let previous = self.current_state().order_id();
        let fresh = self.dispatch(OrderCommand::ResetOrder)?;

        tracing::info!(
            previous_order_id = %previous,
            order_id = %fresh.order_id(),
            "Order reset"
        );

        Ok(fresh)
    }

    /// Share the finished order and start a new one.
    ///
    /// If the share target fails the order is kept so it can be retried.
    pub fn submit_order(&mut self, target: &dyn ShareTarget) -> Result<ShareRequest> {
        let state = self.current_state();

        if let Some(missing) = state.missing_choice() {
            tracing::warn!(order_id = %state.order_id(), missing, "Refusing to share incomplete order");
            return Err(OrderError::Incomplete(missing).into());
        }

        let request = OrderSummary::from_state(&state).to_share_request();
        target
            .share(&request)
            .with_context(|| format!("Failed to share order {}", state.order_id()))?;

        tracing::info!(
            order_id = %state.order_id(),
            quantity = state.quantity(),
            price = state.price(),
            "Order shared"
        );

        self.reset_order()?;
        Ok(request)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::order::pickup::FixedClock;
    use crate::messaging::RecordingShareTarget;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holder_at(today: NaiveDate) -> (OrderStateHolder, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(today));
        let holder = OrderStateHolder::new(PricingPolicy::default(), clock.clone());
        (holder, clock)
    }

    struct FailingShareTarget;

    impl ShareTarget for FailingShareTarget {
        fn share(&self, _request: &ShareRequest) -> Result<()> {
            anyhow::bail!("share sheet unavailable")
        }
    }

    fn complete_order(holder: &mut OrderStateHolder) {
        holder.set_quantity(6).unwrap();
        holder.set_flavor("Vanilla").unwrap();
        let today = holder.current_state().pickup_options()[0].clone();
        holder.set_date(today).unwrap();
    }

    #[test]
    fn test_set_quantity_is_reflected() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));

        for n in [0u32, 1, 6, 12, 24, 48, 999] {
            holder.set_quantity(n).unwrap();
            assert_eq!(holder.current_state().quantity(), n);
        }
    }

    #[test]
    fn test_same_day_scenario() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));

        holder.set_quantity(6).unwrap();
        let today = holder.current_state().pickup_options()[0].clone();
        let state = holder.set_date(today).unwrap();

        assert_eq!(state.price(), "$15.00");
    }

    #[test]
    fn test_two_days_out_scenario() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));

        holder.set_quantity(12).unwrap();
        let later = holder.current_state().pickup_options()[2].clone();
        let state = holder.set_date(later).unwrap();

        assert_eq!(state.price(), "$24.00");
    }

    #[test]
    fn test_set_flavor_idempotent() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));
        holder.set_quantity(6).unwrap();

        let once = holder.set_flavor("Coffee").unwrap();
        let twice = holder.set_flavor("Coffee").unwrap();

        assert_eq!(once.flavor(), twice.flavor());
        assert_eq!(once.price(), twice.price());
        assert_eq!(once.quantity(), twice.quantity());
        assert_eq!(once.date(), twice.date());
        assert_eq!(once.pickup_options(), twice.pickup_options());
    }

    #[test]
    fn test_rejected_date_keeps_snapshot() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));
        holder.set_quantity(6).unwrap();
        let before = holder.current_state();
        let observer = holder.subscribe();

        let err = holder.set_date("Fri Dec 25").unwrap_err();

        assert_eq!(err, OrderError::UnknownPickupDate("Fri Dec 25".to_string()));
        assert!(Arc::ptr_eq(&before, &holder.current_state()));
        assert!(!observer.has_changed().unwrap());
    }

    #[test]
    fn test_reset_uses_reset_time() {
        let (mut holder, clock) = holder_at(date(2026, 10, 18));
        complete_order(&mut holder);
        let first_order = holder.current_state().order_id();

        clock.set(date(2026, 10, 21));
        let fresh = holder.reset_order().unwrap();

        assert_ne!(fresh.order_id(), first_order);
        assert_eq!(fresh.quantity(), 0);
        assert_eq!(fresh.flavor(), "");
        assert_eq!(fresh.date(), "");
        assert_eq!(fresh.price(), "$0.00");
        assert_eq!(
            fresh.pickup_options(),
            ["Wed Oct 21", "Thu Oct 22", "Fri Oct 23", "Sat Oct 24"]
        );
    }

    #[test]
    fn test_pickup_options_fixed_between_resets() {
        let (mut holder, clock) = holder_at(date(2026, 10, 18));
        let options = holder.current_state().pickup_options().to_vec();

        clock.set(date(2026, 10, 19));
        holder.set_quantity(12).unwrap();
        holder.set_flavor("Chocolate").unwrap();

        assert_eq!(holder.current_state().pickup_options(), options.as_slice());
        // Yesterday's "today" still carries the surcharge for this order
        let state = holder.set_date(options[0].clone()).unwrap();
        assert_eq!(state.price(), "$27.00");
    }

    #[tokio::test]
    async fn test_observer_sees_each_replacement() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));
        let mut observer = holder.subscribe();
        assert_eq!(observer.borrow_and_update().quantity(), 0);

        holder.set_quantity(6).unwrap();
        observer.changed().await.unwrap();
        assert_eq!(observer.borrow_and_update().quantity(), 6);

        holder.set_flavor("Coffee").unwrap();
        observer.changed().await.unwrap();
        let seen = observer.borrow_and_update().clone();
        assert_eq!(seen.flavor(), "Coffee");
        assert_eq!(seen.quantity(), 6);
    }

    #[tokio::test]
    async fn test_observer_ends_when_holder_dropped() {
        let (holder, _) = holder_at(date(2026, 10, 18));
        let mut observer = holder.subscribe();

        drop(holder);
        assert!(observer.changed().await.is_err());
    }

    #[test]
    fn test_submit_incomplete_order_fails() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));
        holder.set_quantity(6).unwrap();
        let target = RecordingShareTarget::new();

        let err = holder.submit_order(&target).unwrap_err();

        assert_eq!(
            err.downcast_ref::<OrderError>(),
            Some(&OrderError::Incomplete("flavor"))
        );
        assert!(target.requests().is_empty());
        assert_eq!(holder.current_state().quantity(), 6);
    }

    #[test]
    fn test_submit_shares_once_and_resets() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));
        complete_order(&mut holder);
        let target = RecordingShareTarget::new();

        let request = holder.submit_order(&target).unwrap();

        assert_eq!(target.requests(), vec![request.clone()]);
        assert_eq!(request.subject, "New Cupcake Order");
        assert!(request.summary.contains("Total: $15.00"));
        assert!(request.summary.contains("Flavor: Vanilla"));

        let fresh = holder.current_state();
        assert_eq!(fresh.quantity(), 0);
        assert_eq!(fresh.price(), "$0.00");
    }

    #[test]
    fn test_failed_share_keeps_order() {
        let (mut holder, _) = holder_at(date(2026, 10, 18));
        complete_order(&mut holder);
        let before = holder.current_state();

        assert!(holder.submit_order(&FailingShareTarget).is_err());
        assert!(Arc::ptr_eq(&before, &holder.current_state()));
    }
}
