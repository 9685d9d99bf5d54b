//! Error types for the cart actor.

use crate::menu_actor::MenuError;
use crate::model::MenuItemId;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested cart was not found.
    #[error("Cart not found: {0}")]
    NotFound(String),

    /// Only catalog items can be added to a cart.
    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(MenuItemId),

    /// A line refers to an item the catalog no longer prices.
    #[error("No price available for {0}")]
    PriceUnavailable(MenuItemId),

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// A line total, subtotal or order total is too large to represent.
    #[error("Amount out of range")]
    AmountOverflow,

    /// Carts change only through cart actions.
    #[error("Carts cannot be updated directly")]
    UpdateNotSupported,

    /// The catalog rejected or failed a lookup.
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
