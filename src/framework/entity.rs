//! # ActorEntity Trait
//!
//! The contract a resource type (a menu item, a cart) implements so a generic
//! [`ResourceActor`](crate::framework::ResourceActor) can own and mutate it.
//!
//! Associated types pin down the payload of every request: a `Cart` only ever
//! receives `CartCreate` and `CartAction` values, never a menu payload.
//!
//! `on_create` and `on_delete` have default no-op implementations.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can call other actors. The `Context` value handed to
/// `ResourceActor::run` is passed to every hook, which lets a cart consult the
/// catalog without the catalog client existing at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier of one instance. Generated by the actor from a `u32` counter.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create an instance.
    type Create: Send + Sync + Debug;

    /// Payload applied by an update request.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Value returned by a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()`. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per resource; every hook reports through it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its freshly assigned id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update payload in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. An error keeps it in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
