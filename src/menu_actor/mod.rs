//! The restaurant's menu catalog as a resource actor.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Creates a new menu actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, MenuClient::new(generic_client))
}
