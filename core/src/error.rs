// trolley/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::cart::product::ProductId;

#[derive(Debug, Error)]
pub enum TrolleyError {
  /// Malformed identifier, product payload or target quantity.
  #[error("Invalid input: {reason}")]
  InvalidInput { reason: String },

  /// A quantity update targeted a product with no line and no payload to create one from.
  #[error("Unknown product {product_id}: not in cart and no product payload supplied")]
  UnknownProduct { product_id: ProductId },

  /// A `before_dispatch` guard refused the intent.
  #[error("Intent rejected by guard. Source: {source}")]
  Rejected {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal trolley error: {0}")]
  Internal(String),
}

impl TrolleyError {
  pub fn invalid_input(reason: impl Into<String>) -> Self {
    TrolleyError::InvalidInput { reason: reason.into() }
  }
}

// Guards return anyhow errors; they surface as a rejection of the intent.
impl From<AnyhowError> for TrolleyError {
  fn from(err: AnyhowError) -> Self {
    TrolleyError::Rejected { source: err }
  }
}

pub type TrolleyResult<T, E = TrolleyError> = std::result::Result<T, E>;
