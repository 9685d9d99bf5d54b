use crate::cart_actor::CartContext;
use crate::clients::{CartClient, MenuClient};
use crate::lifecycle::{AppConfig, ConfigError};
use tracing::{error, info};

/// The runtime that owns the menu and cart actors.
///
/// `FoodSystem` is responsible for:
/// - **Lifecycle Management**: starting both actors and stopping them
/// - **Dependency Wiring**: the cart actor gets a [`MenuClient`] and the
///   checkout fees through its [`CartContext`]
///
/// # Example
///
/// ```ignore
/// let system = FoodSystem::new(&AppConfig::default())?;
///
/// let burger = system.menu_client.create_item(params).await?;
/// let cart = system.cart_client.create_cart("alice").await?;
/// system.cart_client.add_item(cart, burger).await?;
///
/// system.shutdown().await?;
/// ```
pub struct FoodSystem {
    /// Client for the catalog actor
    pub menu_client: MenuClient,

    /// Client for the cart actor
    pub cart_client: CartClient,

    /// Cart first: its context holds a menu client, so the menu actor only
    /// stops after the cart actor has.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FoodSystem {
    /// Validates `config` and spawns both actors. Must be called inside a Tokio
    /// runtime.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] for a config that `AppConfig::validate`
    /// rejects; no actor is started.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.actors.mailbox_capacity;
        let (menu_actor, menu_client) = crate::menu_actor::new(capacity);
        let (cart_actor, cart_client) = crate::cart_actor::new(capacity);

        let menu_handle = tokio::spawn(menu_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(CartContext {
            menu: menu_client.clone(),
            checkout: config.checkout.clone(),
        }));

        Ok(Self {
            menu_client,
            cart_client,
            handles: vec![cart_handle, menu_handle],
        })
    }

    /// Drops both clients and waits for the actors to drain their mailboxes.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the channels ends each actor's receive loop.
        drop(self.cart_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::ActorConfig;

    #[tokio::test]
    async fn test_zero_mailbox_is_rejected_before_spawning() {
        let config = AppConfig {
            actors: ActorConfig { mailbox_capacity: 0 },
            ..Default::default()
        };
        assert!(matches!(
            FoodSystem::new(&config),
            Err(ConfigError::InvalidValue { field: "actors.mailbox_capacity", .. })
        ));
    }

    #[tokio::test]
    async fn test_negative_fee_is_rejected() {
        let mut config = AppConfig::default();
        config.checkout.service_fee = rust_decimal::Decimal::NEGATIVE_ONE;
        assert!(FoodSystem::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_default_config_starts_and_stops() {
        let system = FoodSystem::new(&AppConfig::default()).unwrap();
        system.shutdown().await.unwrap();
    }
}
