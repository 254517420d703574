// demos/shop_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use trolley::CartConfig;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Product feed endpoint, fetched once at startup.
  pub catalog_url: String,
  pub catalog_timeout: Duration,

  pub cart: CartConfig,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = lookup("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let catalog_url = lookup("CATALOG_URL").unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
    let catalog_timeout_secs = lookup("CATALOG_TIMEOUT_SECS")
      .unwrap_or_else(|| "10".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid CATALOG_TIMEOUT_SECS: {}", e)))?;

    let max_line_quantity = lookup("CART_MAX_LINE_QUANTITY")
      .map(|raw| {
        raw
          .parse::<u32>()
          .map_err(|e| AppError::Config(format!("Invalid CART_MAX_LINE_QUANTITY: {}", e)))
      })
      .transpose()?;
    let cart = CartConfig { max_line_quantity };
    cart
      .validate()
      .map_err(|e| AppError::Config(format!("Invalid cart configuration: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      catalog_url,
      catalog_timeout: Duration::from_secs(catalog_timeout_secs),
      cart,
    })
  }
}
