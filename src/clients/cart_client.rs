//! # Cart Client
//!
//! High-level API over the cart actor. Each method sends one [`CartAction`]
//! and unwraps the matching [`CartActionResult`] variant.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    Cart, CartCreate, CartId, CartView, CheckoutRequest, MenuItemId, OrderSummary, PlacedOrder,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<CartError>() {
            Ok(cart_error) => cart_error,
            Err(FrameworkError::NotFound(id)) => CartError::NotFound(id),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

impl CartClient {
    async fn act(&self, cart: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(cart, action)
            .await
            .map_err(Self::map_error)
    }

    /// Opens an empty cart for a customer session.
    #[instrument(skip(self))]
    pub async fn create_cart(&self, customer: &str) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartCreate {
                customer: customer.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    /// Adds one unit of a catalog item and returns the line's quantity.
    ///
    /// # Errors
    /// [`CartError::UnknownMenuItem`] if the catalog has no such item.
    #[instrument(skip(self))]
    pub async fn add_item(&self, cart: CartId, item_id: MenuItemId) -> Result<u32, CartError> {
        debug!("Sending request");
        match self.act(cart, CartAction::AddItem(item_id)).await? {
            CartActionResult::AddItem(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    /// Sets a line's quantity. Zero or less removes the line; an item with no
    /// line is left alone.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        cart: CartId,
        item_id: MenuItemId,
        quantity: i32,
    ) -> Result<Option<u32>, CartError> {
        debug!("Sending request");
        match self
            .act(cart, CartAction::UpdateQuantity { item_id, quantity })
            .await?
        {
            CartActionResult::UpdateQuantity(remaining) => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, cart: CartId, item_id: MenuItemId) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.act(cart, CartAction::RemoveItem(item_id)).await? {
            CartActionResult::RemoveItem(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_instructions(
        &self,
        cart: CartId,
        item_id: MenuItemId,
        instructions: Option<String>,
    ) -> Result<bool, CartError> {
        debug!("Sending request");
        let action = CartAction::SetInstructions {
            item_id,
            instructions,
        };
        match self.act(cart, action).await? {
            CartActionResult::SetInstructions(found) => Ok(found),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, cart: CartId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.act(cart, CartAction::Clear).await? {
            CartActionResult::Clear(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Sum of quantities, for the cart badge.
    #[instrument(skip(self))]
    pub async fn total_items(&self, cart: CartId) -> Result<u64, CartError> {
        debug!("Sending request");
        match self.act(cart, CartAction::TotalItems).await? {
            CartActionResult::TotalItems(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }

    /// Subtotal at the catalog's current prices.
    #[instrument(skip(self))]
    pub async fn total_price(&self, cart: CartId) -> Result<Decimal, CartError> {
        debug!("Sending request");
        match self.act(cart, CartAction::TotalPrice).await? {
            CartActionResult::TotalPrice(total) => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn view(&self, cart: CartId) -> Result<CartView, CartError> {
        debug!("Sending request");
        match self.act(cart, CartAction::View).await? {
            CartActionResult::View(view) => Ok(view),
            other => Err(unexpected(other)),
        }
    }

    /// Checkout preview. `delivery_fee` overrides the configured default.
    #[instrument(skip(self))]
    pub async fn summary(
        &self,
        cart: CartId,
        delivery_fee: Option<Decimal>,
    ) -> Result<OrderSummary, CartError> {
        debug!("Sending request");
        match self.act(cart, CartAction::Summary { delivery_fee }).await? {
            CartActionResult::Summary(summary) => Ok(summary),
            other => Err(unexpected(other)),
        }
    }

    /// Places the order and empties the cart.
    ///
    /// # Errors
    /// [`CartError::EmptyCart`] if there is nothing to order. The cart is left
    /// unchanged on any error.
    #[instrument(skip(self, request))]
    pub async fn place_order(
        &self,
        cart: CartId,
        request: CheckoutRequest,
    ) -> Result<PlacedOrder, CartError> {
        debug!(?request, "place_order called");
        match self.act(cart, CartAction::PlaceOrder(request)).await? {
            CartActionResult::PlaceOrder(order) => {
                info!(total = %order.summary.total, "Order placed");
                Ok(order)
            }
            other => Err(unexpected(other)),
        }
    }
}
