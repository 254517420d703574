// demos/shop_app/src/state.rs
use crate::config::AppConfig;
use crate::errors::AppError;
use std::sync::Arc;
use trolley::{CartHandle, Catalog, CatalogStatus};

#[derive(Clone)]
pub struct AppState {
  /// The one cart of this running app instance.
  pub cart: CartHandle,
  /// Loaded once at startup, read-only afterwards.
  pub catalog: Arc<Catalog>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// The catalog, or `CatalogUnavailable` when the startup fetch failed.
  pub fn available_catalog(&self) -> Result<&Catalog, AppError> {
    match self.catalog.status() {
      CatalogStatus::Loaded { .. } => Ok(&self.catalog),
      CatalogStatus::Unavailable { reason } => Err(AppError::CatalogUnavailable(reason.clone())),
    }
  }
}
