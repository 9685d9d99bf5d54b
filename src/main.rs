use food_cart::clients::ActorClient;
use food_cart::lifecycle::{setup_tracing, AppConfig, FoodSystem};
use food_cart::model::{
    format_money, CheckoutRequest, MenuFilter, MenuItemCreate, PaymentMethod, RestaurantId,
};
use rust_decimal::Decimal;
use std::error::Error;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(?config, "Starting food cart demo");

    let system = FoodSystem::new(&config)?;
    let restaurant = RestaurantId(1);

    // Seed the catalog the way the restaurant owner's menu page would
    let span = tracing::info_span!("menu_setup");
    let (pizza, salad) = async {
        let pizza = system
            .menu_client
            .create_item(
                MenuItemCreate::new(restaurant, "Margherita Pizza", Decimal::new(1699, 2), "Main Course")
                    .with_description("Fresh tomatoes, mozzarella, basil, and olive oil"),
            )
            .await?;
        system
            .menu_client
            .create_item(
                MenuItemCreate::new(restaurant, "Pepperoni Pizza", Decimal::new(1899, 2), "Main Course")
                    .with_description("Classic pepperoni with mozzarella cheese"),
            )
            .await?;
        let salad = system
            .menu_client
            .create_item(
                MenuItemCreate::new(restaurant, "Caesar Salad", Decimal::new(1250, 2), "Appetizers")
                    .with_description("Crisp romaine lettuce, parmesan, croutons, and caesar dressing"),
            )
            .await?;
        Ok::<_, food_cart::menu_actor::MenuError>((pizza, salad))
    }
    .instrument(span)
    .await?;

    let pizzas = system
        .menu_client
        .browse(&MenuFilter::default().search("pizza").category("All"))
        .await?;
    info!(count = pizzas.len(), "Pizzas on the menu");

    // A customer session
    let span = tracing::info_span!("customer_session");
    let order = async {
        let cart = system.cart_client.create_cart("alice").await?;
        system.cart_client.add_item(cart, pizza).await?;
        system.cart_client.add_item(cart, pizza).await?;
        system.cart_client.add_item(cart, salad).await?;
        system
            .cart_client
            .set_instructions(cart, pizza, Some("Extra cheese".to_string()))
            .await?;

        let items = system.cart_client.total_items(cart).await?;
        let subtotal = system.cart_client.total_price(cart).await?;
        info!(items, subtotal = %format_money(subtotal), "Cart ready");

        let request = CheckoutRequest::new("42 Elm Street")
            .pay_with(PaymentMethod::CashOnDelivery)
            .notes("Ring the bell");
        let order = system.cart_client.place_order(cart, request).await?;

        let left = system.cart_client.total_items(cart).await?;
        info!(left, "Cart after checkout");
        system.cart_client.delete(cart).await?;
        Ok::<_, food_cart::cart_actor::CartError>(order)
    }
    .instrument(span)
    .await?;

    let shown = order.summary.rounded();
    info!(
        subtotal = %format_money(shown.subtotal),
        fees_and_tax = %format_money(shown.fees_and_tax()),
        total = %format_money(shown.total),
        "Order placed"
    );
    println!("{}", serde_json::to_string_pretty(&order)?);

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
