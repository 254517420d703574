// demos/shop_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod services;
mod state;
mod web;

use crate::config::AppConfig;
use crate::services::FakeStoreFeed;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;
use trolley::{CartStore, Catalog, StoreHandle};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // RUST_LOG overrides the default INFO level
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting shop application server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  // The catalog is fetched once; a failed fetch leaves the app running with an empty catalog.
  let catalog = match FakeStoreFeed::from_config(&app_config) {
    Ok(feed) => {
      tracing::info!(url = feed.url(), "Fetching product catalog...");
      Catalog::load(&feed).await
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to build the product feed client.");
      Catalog::unavailable(e.to_string())
    }
  };
  tracing::info!(status = ?catalog.status(), "Catalog ready.");

  let cart_store = match CartStore::with_config(app_config.cart.clone()) {
    Ok(store) => StoreHandle::new(store),
    Err(e) => {
      tracing::error!(error = %e, "Invalid cart configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };
  cart_store.subscribe(|cart| {
    tracing::debug!(
      lines = cart.len(),
      total_quantity = cart.total_quantity(),
      subtotal = cart.subtotal(),
      "Cart changed."
    );
  });

  let app_state = AppState {
    cart: cart_store,
    catalog: Arc::new(catalog),
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
