//! Demo entry point: registers a customer, creates products and walks an
//! order through adding and removing items.

use app::{Application, Config};
use domain::{Address, AggregateRoot, Money, OrderItemId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Configuration and tracing
    let config = Config::from_env();
    app::init_tracing(&config)?;

    // 2. Dispatcher, handlers and repositories
    let app = Application::in_memory(&config);

    // 3. Customer and catalog
    let address = Address::new("Wilkie Way", 4290, "94306", "Palo Alto, CA")?;
    let customer = app.register_customer("John Doe", Some(address)).await?;

    let shoes = app.create_product("Shoes", Money::from_cents(25999)).await?;
    let shirt = app.create_product("Shirt", Money::from_cents(8999)).await?;
    let socks = app
        .create_product("Pack of socks", Money::from_cents(1999))
        .await?;

    // 4. Order lifecycle
    let order = app
        .place_order(
            customer.id(),
            &[(shoes.id().clone(), 1), (shirt.id().clone(), 2)],
        )
        .await?;
    tracing::info!(order_id = %order.id(), total = %order.total(), "order placed");

    let initial_items: Vec<OrderItemId> = order.items().iter().map(|i| i.id().clone()).collect();

    let order = app.add_order_item(order.id(), socks.id(), 1).await?;
    tracing::info!(order_id = %order.id(), total = %order.total(), "socks added");

    let mut order = order;
    for item_id in &initial_items {
        order = app.remove_order_item(order.id(), item_id).await?;
    }
    tracing::info!(
        order_id = %order.id(),
        items = order.item_count(),
        total = %order.total(),
        "initial items removed"
    );

    let customer = app.customers().find(customer.id()).await?;
    tracing::info!(
        customer_id = %customer.id(),
        reward_points = customer.reward_points(),
        "demo finished"
    );

    Ok(())
}
