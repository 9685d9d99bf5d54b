//! # Configuration
//!
//! Settings the system is started with, loaded from TOML. Every field has a
//! default, so an empty document is a valid configuration.
//!
//! ```toml
//! [checkout]
//! delivery_fee = "3.99"
//! service_fee = "2.50"
//! tax_rate = "0.08"
//!
//! [actors]
//! mailbox_capacity = 32
//! ```
//!
//! Amounts are best written as strings so they parse as exact decimals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable naming a config file for the demo binary.
pub const CONFIG_ENV: &str = "FOOD_CART_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub checkout: CheckoutConfig,
    pub actors: ActorConfig,
}

/// Fees and tax applied at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Used when the restaurant does not supply its own fee.
    pub delivery_fee: Decimal,
    pub service_fee: Decimal,
    /// Fraction of the subtotal, e.g. `0.08`.
    pub tax_rate: Decimal,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delivery_fee: Decimal::new(399, 2),
            service_fee: Decimal::new(250, 2),
            tax_rate: Decimal::new(8, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Capacity of each actor's request channel.
    pub mailbox_capacity: usize,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by [`CONFIG_ENV`], or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checkout = &self.checkout;
        non_negative("checkout.delivery_fee", checkout.delivery_fee)?;
        non_negative("checkout.service_fee", checkout.service_fee)?;
        if checkout.tax_rate < Decimal::ZERO || checkout.tax_rate > Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "checkout.tax_rate",
                value: checkout.tax_rate.to_string(),
                reason: "must be between 0 and 1",
            });
        }
        if self.actors.mailbox_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "actors.mailbox_capacity",
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO {
        return Err(ConfigError::InvalidValue {
            field,
            value: value.to_string(),
            reason: "must not be negative",
        });
    }
    Ok(())
}
