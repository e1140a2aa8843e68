//! Shop configuration.
//!
//! Loaded from a TOML file named by `CUPCAKE_CONFIG`; every section is
//! optional and falls back to the reference shop (USD-style prices in
//! en-US, 2.00 per cupcake, 3.00 same-day surcharge).

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::order::{Catalog, PriceSchedule, PricingPolicy};
use crate::utils::ShopLocale;

/// Environment variable holding the config file path.
pub const CONFIG_ENV_VAR: &str = "CUPCAKE_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Just the message, not the input dump
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShopConfig {
    pub locale: ShopLocale,
    pub pricing: PriceSchedule,
    pub catalog: Catalog,
}

impl ShopConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: ShopConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// File named by `CUPCAKE_CONFIG`, or the defaults when it is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                tracing::info!(path = ?path, "Loading shop configuration");
                Self::from_file(path)
            }
            None => {
                tracing::debug!("{} not set, using default shop configuration", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pricing.unit_price < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "unit_price must not be negative, got {}",
                self.pricing.unit_price
            )));
        }
        if self.pricing.same_day_surcharge < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "same_day_surcharge must not be negative, got {}",
                self.pricing.same_day_surcharge
            )));
        }

        if self.catalog.quantity_options.is_empty() {
            return Err(ConfigError::Validation(
                "catalog.quantity_options cannot be empty".to_string(),
            ));
        }
        if let Some(option) = self.catalog.quantity_options.iter().find(|o| o.quantity == 0) {
            return Err(ConfigError::Validation(format!(
                "quantity option {:?} must order at least one cupcake",
                option.label
            )));
        }

        if self.catalog.flavors.is_empty() {
            return Err(ConfigError::Validation(
                "catalog.flavors cannot be empty".to_string(),
            ));
        }
        if self.catalog.flavors.iter().any(|f| f.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "catalog.flavors cannot contain blank names".to_string(),
            ));
        }

        Ok(())
    }

    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy::new(self.pricing, self.locale)
    }
}
