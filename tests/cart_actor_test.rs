use food_cart::cart_actor::{CartContext, CartError};
use food_cart::clients::{actor_client::ActorClient, CartClient, MenuClient};
use food_cart::framework::mock::MockClient;
use food_cart::lifecycle::CheckoutConfig;
use food_cart::model::{CheckoutRequest, MenuItem, MenuItemId, RestaurantId};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn item(id: u32, name: &str, price: &str) -> MenuItem {
    MenuItem::new(MenuItemId(id), RestaurantId(1), name, dec(price), "Main Course")
}

fn context(menu: &MockClient<MenuItem>) -> CartContext {
    CartContext {
        menu: MenuClient::new(menu.client()),
        checkout: CheckoutConfig::default(),
    }
}

/// Real cart actor, scripted catalog. Adds look items up with `get`; totals
/// and checkout read the whole catalog with `list`.
#[tokio::test]
async fn test_cart_actor_with_mocked_menu() {
    let a = item(1, "A", "10.00");
    let b = item(2, "B", "5.50");

    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(a.id).return_ok(Some(a.clone()));
    menu.expect_get(a.id).return_ok(Some(a.clone()));
    menu.expect_get(b.id).return_ok(Some(b.clone()));
    menu.expect_list().return_ok(vec![a.clone(), b.clone()]);
    menu.expect_list().return_ok(vec![a.clone(), b.clone()]);

    let (cart_actor, carts) = food_cart::cart_actor::new(8);
    let handle = tokio::spawn(cart_actor.run(context(&menu)));

    let cart = carts.create_cart("alice").await.unwrap();
    assert_eq!(carts.add_item(cart, a.id).await, Ok(1));
    assert_eq!(carts.add_item(cart, a.id).await, Ok(2));
    assert_eq!(carts.add_item(cart, b.id).await, Ok(1));

    assert_eq!(carts.total_items(cart).await, Ok(3));
    assert_eq!(carts.total_price(cart).await, Ok(dec("25.50")));

    assert_eq!(carts.update_quantity(cart, a.id, 0).await, Ok(None));
    let stored = carts.get(cart).await.unwrap().unwrap();
    assert_eq!(stored.lines().len(), 1);
    assert_eq!(stored.lines()[0].item_id, b.id);
    assert_eq!(carts.total_items(cart).await, Ok(1));
    assert_eq!(carts.total_price(cart).await, Ok(dec("5.50")));

    menu.verify();
    drop(carts);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_item_is_rejected_and_cart_unchanged() {
    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(MenuItemId(99)).return_ok(None);

    let (cart_actor, carts) = food_cart::cart_actor::new(8);
    tokio::spawn(cart_actor.run(context(&menu)));

    let cart = carts.create_cart("bob").await.unwrap();
    assert_eq!(
        carts.add_item(cart, MenuItemId(99)).await,
        Err(CartError::UnknownMenuItem(MenuItemId(99)))
    );
    assert_eq!(carts.total_items(cart).await, Ok(0));
    menu.verify();
}

#[tokio::test]
async fn test_empty_cart_totals_skip_the_catalog() {
    let menu = MockClient::<MenuItem>::new();

    let (cart_actor, carts) = food_cart::cart_actor::new(8);
    tokio::spawn(cart_actor.run(context(&menu)));

    let cart = carts.create_cart("carol").await.unwrap();
    assert_eq!(carts.total_price(cart).await, Ok(Decimal::ZERO));
    assert_eq!(
        carts.place_order(cart, CheckoutRequest::new("1 Main St")).await,
        Err(CartError::EmptyCart)
    );
    menu.verify();
}

#[tokio::test]
async fn test_removed_catalog_item_blocks_checkout() {
    let a = item(1, "A", "10.00");

    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(a.id).return_ok(Some(a.clone()));
    // the item disappeared from the catalog before checkout
    menu.expect_list().return_ok(vec![]);

    let (cart_actor, carts) = food_cart::cart_actor::new(8);
    tokio::spawn(cart_actor.run(context(&menu)));

    let cart = carts.create_cart("dave").await.unwrap();
    carts.add_item(cart, a.id).await.unwrap();
    assert_eq!(
        carts.place_order(cart, CheckoutRequest::new("1 Main St")).await,
        Err(CartError::PriceUnavailable(a.id))
    );
    assert_eq!(carts.total_items(cart).await, Ok(1));
    menu.verify();
}

#[tokio::test]
async fn test_unknown_cart_is_not_found() {
    let menu = MockClient::<MenuItem>::new();
    let (cart_actor, carts) = food_cart::cart_actor::new(8);
    tokio::spawn(cart_actor.run(context(&menu)));

    let missing = food_cart::model::CartId(42);
    assert_eq!(
        carts.total_items(missing).await,
        Err(CartError::NotFound("cart_42".into()))
    );
}

/// An out-of-range total is an error for that cart; the actor keeps serving.
#[tokio::test]
async fn test_overflowing_total_leaves_actor_running() {
    let yacht = item(1, "Yacht", "10000000000000000000000000");

    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(yacht.id).return_ok(Some(yacht.clone()));
    menu.expect_list().return_ok(vec![yacht.clone()]);
    menu.expect_list().return_ok(vec![yacht.clone()]);
    menu.expect_list().return_ok(vec![yacht.clone()]);

    let (cart_actor, carts) = food_cart::cart_actor::new(8);
    tokio::spawn(cart_actor.run(context(&menu)));

    let cart = carts.create_cart("frank").await.unwrap();
    carts.add_item(cart, yacht.id).await.unwrap();
    carts.update_quantity(cart, yacht.id, 100_000).await.unwrap();

    assert_eq!(carts.total_price(cart).await, Err(CartError::AmountOverflow));
    assert_eq!(carts.summary(cart, None).await, Err(CartError::AmountOverflow));
    assert_eq!(
        carts.place_order(cart, CheckoutRequest::new("1 Main St")).await,
        Err(CartError::AmountOverflow)
    );

    assert_eq!(carts.total_items(cart).await, Ok(100_000));
    let other = carts.create_cart("grace").await.unwrap();
    assert_eq!(carts.total_items(other).await, Ok(0));
    menu.verify();
}

#[tokio::test]
async fn test_summary_and_view_report_missing_price() {
    let a = item(1, "A", "10.00");

    let mut menu = MockClient::<MenuItem>::new();
    menu.expect_get(a.id).return_ok(Some(a.clone()));
    menu.expect_list().return_ok(vec![]);
    menu.expect_list().return_ok(vec![]);

    let (cart_actor, carts) = food_cart::cart_actor::new(8);
    tokio::spawn(cart_actor.run(context(&menu)));

    let cart = carts.create_cart("heidi").await.unwrap();
    carts.add_item(cart, a.id).await.unwrap();
    assert_eq!(
        carts.summary(cart, None).await,
        Err(CartError::PriceUnavailable(a.id))
    );
    assert_eq!(carts.view(cart).await, Err(CartError::PriceUnavailable(a.id)));
    assert_eq!(carts.total_items(cart).await, Ok(1));
    menu.verify();
}

#[tokio::test]
async fn test_generic_update_is_rejected() {
    let menu = MockClient::<MenuItem>::new();
    let (cart_actor, carts) = food_cart::cart_actor::new(8);
    tokio::spawn(cart_actor.run(context(&menu)));

    let cart = carts.create_cart("ivan").await.unwrap();
    let err = carts.inner().update(cart, ()).await.unwrap_err();
    assert_eq!(CartClient::map_error(err), CartError::UpdateNotSupported);
}
