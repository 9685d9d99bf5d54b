//! Generic resource-actor plumbing shared by the catalog and the carts.
//!
//! A resource type implements [`ActorEntity`]; a [`ResourceActor`] owns every
//! instance of that type inside one Tokio task and answers [`ResourceRequest`]s
//! sent through a cloneable [`ResourceClient`].
//!
//! # Testing
//!
//! See [`mock`] for a scripted client that answers requests from queued
//! expectations instead of a running actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
