//! Startup, wiring, configuration and shutdown of the actor system.

pub mod config;
pub mod food_system;
pub mod tracing;

pub use self::config::*;
pub use self::food_system::FoodSystem;
pub use self::tracing::{setup_tracing, try_setup_tracing};
