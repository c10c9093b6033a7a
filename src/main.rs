use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_lifecycle::{Item, Order};

fn main() -> anyhow::Result<()> {
    // Default to INFO, crate at DEBUG. Override with RUST_LOG.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_lifecycle=debug")),
        )
        .init();

    tracing::info!("Starting order lifecycle demo");

    let items = vec![Item::new(1, "Burger", 10.0)?, Item::new(2, "Fries", 5.0)?];
    let mut order = Order::with_items(1, items, "card");
    let snapshot = serde_json::to_string(&order)?;
    tracing::info!(%snapshot, "Order placed");

    order.add_item(Item::new(3, "Soda", 4.5)?)?;
    let removed = order.remove_item(3);
    tracing::info!(removed, total = order.total(), "Soda added then removed");

    order.pay()?;
    order.complete()?;
    tracing::info!(status = %order.status(), total = order.total(), "Order completed");

    // Completed orders are final.
    match order.cancel() {
        Ok(()) => anyhow::bail!("completed order {} was cancelled", order.id()),
        Err(e) => tracing::warn!(error = %e, status = %order.status(), "Cancel rejected"),
    }

    let snapshot = serde_json::to_string(&order)?;
    tracing::info!(%snapshot, "Demo complete");

    Ok(())
}
