//! # Food Cart
//!
//! The cart and checkout core of a food-ordering service, built as a pair of
//! resource actors on Tokio.
//!
//! A customer's cart holds references to menu items with quantities and
//! optional special instructions. Totals are derived on read from the live
//! catalog using exact decimal arithmetic, and checkout adds delivery, service
//! and tax on top of the subtotal.
//!
//! ## Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each actor defines its own error enum ([`MenuError`](menu_actor::MenuError),
//! [`CartError`](cart_actor::CartError)). Errors raised inside an entity hook
//! travel boxed through [`FrameworkError`](framework::FrameworkError) and are
//! recovered by the client's `map_error`, so callers can match on them.
//!
//! ### 2. Async Context Injection
//! Dependencies are injected when an actor is started with `run()`. The cart
//! actor receives a [`MenuClient`](clients::MenuClient) and the checkout fees in
//! its [`CartContext`](cart_actor::CartContext).
//!
//! ### 3. Concurrency Model
//! Each `ResourceActor` runs in its own Tokio task and handles one request at
//! a time, so cart state needs no locks. The plain [`Cart`](model::Cart) value
//! is synchronous and can be used without a runtime.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic `ResourceActor<T>`, its client and a scripted mock.
//! - [`model`]: menu items, carts, checkout summaries and money formatting.
//! - [`menu_actor`], [`cart_actor`]: the two `ActorEntity` implementations.
//! - [`clients`]: domain wrappers such as [`CartClient`](clients::CartClient).
//! - [`lifecycle`]: configuration, tracing setup and [`FoodSystem`](lifecycle::FoodSystem).
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! FOOD_CART_CONFIG=food-cart.toml cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
