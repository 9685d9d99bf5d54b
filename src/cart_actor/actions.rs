//! Custom actions for the cart actor.
//!
//! Every cart operation is an action on one [`Cart`](crate::model::Cart); CRUD
//! only opens, reads and discards carts.

use crate::model::{CartView, CheckoutRequest, MenuItemId, OrderSummary, PlacedOrder};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds one unit. The item must exist in the catalog.
    AddItem(MenuItemId),
    /// Sets a line's quantity; zero or less removes it.
    UpdateQuantity { item_id: MenuItemId, quantity: i32 },
    RemoveItem(MenuItemId),
    SetInstructions {
        item_id: MenuItemId,
        instructions: Option<String>,
    },
    Clear,
    TotalItems,
    /// Subtotal at current catalog prices.
    TotalPrice,
    View,
    /// Fees and tax for the checkout dialog, without placing anything.
    Summary { delivery_fee: Option<Decimal> },
    /// Places the order and empties the cart.
    PlaceOrder(CheckoutRequest),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The line's quantity after the add.
    AddItem(u32),
    /// The line's quantity afterwards, `None` if no line remains.
    UpdateQuantity(Option<u32>),
    /// Whether a line was removed.
    RemoveItem(bool),
    /// Whether a line existed to annotate.
    SetInstructions(bool),
    Clear(()),
    TotalItems(u64),
    TotalPrice(Decimal),
    View(CartView),
    Summary(OrderSummary),
    PlaceOrder(PlacedOrder),
}
