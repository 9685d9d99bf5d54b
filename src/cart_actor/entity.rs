//! ActorEntity implementation for [`Cart`].
//!
//! The cart holds item references only. Whenever a price is needed the hooks
//! ask the menu actor through [`CartContext::menu`], so totals always follow
//! the live catalog.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::{ActorClient, MenuClient};
use crate::framework::ActorEntity;
use crate::lifecycle::CheckoutConfig;
use crate::model::{Cart, CartCreate, CartId, OrderSummary, PlacedOrder};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

/// Dependencies injected into the cart actor at `run()`.
#[derive(Clone)]
pub struct CartContext {
    pub menu: MenuClient,
    pub checkout: CheckoutConfig,
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, CartError> {
        Ok(Cart::new(id, params.customer))
    }

    /// Always rejected with [`CartError::UpdateNotSupported`].
    async fn on_update(&mut self, _update: (), _ctx: &CartContext) -> Result<(), CartError> {
        Err(CartError::UpdateNotSupported)
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::AddItem(item_id) => {
                let item = ctx
                    .menu
                    .get(item_id)
                    .await?
                    .ok_or(CartError::UnknownMenuItem(item_id))?;
                Ok(CartActionResult::AddItem(self.add_item(&item)))
            }
            CartAction::UpdateQuantity { item_id, quantity } => Ok(
                CartActionResult::UpdateQuantity(self.update_quantity(&item_id, quantity)),
            ),
            CartAction::RemoveItem(item_id) => {
                Ok(CartActionResult::RemoveItem(self.remove_item(&item_id)))
            }
            CartAction::SetInstructions {
                item_id,
                instructions,
            } => Ok(CartActionResult::SetInstructions(
                self.set_instructions(&item_id, instructions),
            )),
            CartAction::Clear => {
                self.clear();
                Ok(CartActionResult::Clear(()))
            }
            CartAction::TotalItems => Ok(CartActionResult::TotalItems(self.total_items())),
            CartAction::TotalPrice => {
                if self.is_empty() {
                    return Ok(CartActionResult::TotalPrice(Decimal::ZERO));
                }
                let prices = ctx.menu.price_book().await?;
                Ok(CartActionResult::TotalPrice(self.total_price(&prices)?))
            }
            CartAction::View => {
                let catalog = ctx.menu.price_book().await?;
                Ok(CartActionResult::View(self.view(&catalog)?))
            }
            CartAction::Summary { delivery_fee } => {
                let prices = ctx.menu.price_book().await?;
                let subtotal = self.total_price(&prices)?;
                Ok(CartActionResult::Summary(OrderSummary::compute(
                    subtotal,
                    &ctx.checkout,
                    delivery_fee,
                )?))
            }
            CartAction::PlaceOrder(request) => {
                if self.is_empty() {
                    return Err(CartError::EmptyCart);
                }
                let catalog = ctx.menu.price_book().await?;
                let view = self.view(&catalog)?;
                let summary = OrderSummary::compute(view.subtotal, &ctx.checkout, request.delivery_fee)?;
                debug!(cart_id = %self.id, total = %summary.total, "Placing order");

                let order = PlacedOrder {
                    cart_id: self.id,
                    customer: self.customer.clone(),
                    lines: view.lines,
                    summary,
                    payment_method: request.payment_method,
                    delivery_address: request.delivery_address,
                    notes: request.notes,
                };
                self.clear();
                Ok(CartActionResult::PlaceOrder(order))
            }
        }
    }
}
