use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cupcake_order::domain::order::{OrderStep, OrderSummary};
use cupcake_order::messaging::LogShareTarget;
use cupcake_order::{OrderStateHolder, ShopConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO, overridable with RUST_LOG
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cupcake_order=debug")),
        )
        .init();

    tracing::info!("🧁 Starting cupcake order demo");

    // === 1. Load shop configuration ===
    let config = ShopConfig::load()?;
    tracing::info!(
        locale = %config.locale,
        unit_price = %config.pricing.unit_price,
        same_day_surcharge = %config.pricing.same_day_surcharge,
        "Shop configuration loaded"
    );

    // === 2. Create the order state holder ===
    let mut holder = OrderStateHolder::with_system_clock(config.pricing_policy());

    // === 3. Observe snapshots the way a UI would ===
    let mut observer = holder.subscribe();
    let observer_task = tokio::spawn(async move {
        let mut seen = 0usize;
        while observer.changed().await.is_ok() {
            let state = observer.borrow_and_update().clone();
            seen += 1;
            tracing::info!(
                order_id = %state.order_id(),
                snapshot = %serde_json::to_string(&*state).unwrap_or_default(),
                "📸 Snapshot observed"
            );
        }
        seen
    });

    // === 4. Walk the order flow ===
    let mut step = OrderStep::Start;
    loop {
        tracing::info!(step = step.title(), "➡️  Entering step");

        match step {
            OrderStep::Start => {
                let option = config
                    .catalog
                    .quantity_options
                    .get(1)
                    .or_else(|| config.catalog.quantity_options.first())
                    .ok_or_else(|| anyhow::anyhow!("catalog has no quantity options"))?;
                tracing::info!(choice = %option.label, "Quantity chosen");
                holder.set_quantity(option.quantity)?;
            }
            OrderStep::Flavor => {
                let flavor = config
                    .catalog
                    .flavors
                    .first()
                    .ok_or_else(|| anyhow::anyhow!("catalog has no flavors"))?;
                let state = holder.set_flavor(flavor.clone())?;
                tracing::info!(subtotal = state.price(), "Flavor chosen");
            }
            OrderStep::Pickup => {
                let today = holder
                    .current_state()
                    .pickup_options()
                    .first()
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("no pickup options"))?;
                let state = holder.set_date(today)?;
                tracing::info!(subtotal = state.price(), "Pickup date chosen");
            }
            OrderStep::Summary => {
                let state = holder.current_state();
                let summary = OrderSummary::from_state(&state);
                for (label, value) in summary.items() {
                    tracing::info!("{}: {}", label.to_uppercase(), value);
                }
                tracing::info!(total = %summary.total, "Order summary ready");
            }
        }

        match step.next() {
            Some(next) => step = next,
            None => break,
        }
    }

    // === 5. Share the order; the holder starts a fresh one ===
    let request = holder.submit_order(&LogShareTarget)?;
    tracing::info!(subject = %request.subject, "✅ Order handed to share target");

    // Dropping the holder closes the observer stream
    drop(holder);
    let seen = observer_task.await?;
    tracing::info!(snapshots = seen, "🎉 Demo complete!");

    Ok(())
}
