//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` and `Shutdown` with the final store size
//! - **Entity operations**: `Created`, `Updated`, `Deleted`, `Action ok`, and the
//!   matching `... failed` warnings, each with `entity_type` and `id` fields
//! - **Client calls**: every client method opens a span named after itself
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Payloads of every request
//! RUST_LOG=debug cargo run
//!
//! # Only the framework plumbing
//! RUST_LOG=food_cart::framework=debug cargo run
//! ```
//!
//! A checkout with `RUST_LOG=info` reads:
//!
//! ```text
//! INFO Actor started entity_type="MenuItem"
//! INFO Actor started entity_type="Cart"
//! INFO Created entity_type="MenuItem" id=item_1 size=1
//! INFO Created entity_type="Cart" id=cart_1 size=1
//! INFO add_item: Action ok entity_type="Cart" id=cart_1
//! INFO place_order: Action ok entity_type="Cart" id=cart_1
//! INFO place_order: Order placed total=34.03
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Panics if one is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false) // entity_type already names the actor
        .compact()
        .init();
}

/// Like [`setup_tracing`], but a no-op when a subscriber is already installed,
/// so every test can call it.
pub fn try_setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init();
}
