//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod cart_client;
pub mod menu_client;

pub use actor_client::*;
pub use cart_client::*;
pub use menu_client::*;
