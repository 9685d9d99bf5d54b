//! Pure data structures: the menu catalog records, the cart and its lines, and
//! the checkout summary.
//!
//! [`MenuItem`] and [`Cart`] implement [`ActorEntity`](crate::framework::ActorEntity)
//! in [`menu_actor`](crate::menu_actor) and [`cart_actor`](crate::cart_actor).

pub mod cart;
pub mod checkout;
pub mod menu_item;
pub mod money;

pub use cart::*;
pub use checkout::*;
pub use menu_item::*;
pub use money::*;
