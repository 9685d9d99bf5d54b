//! Customer carts as a resource actor.
//!
//! One cart per session. The actor's context carries a [`MenuClient`] so adds
//! and totals can consult the catalog; see [`CartContext`].

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CartContext;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new cart actor and its client. Spawn it with `run(CartContext)`.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, CartClient::new(generic_client))
}
