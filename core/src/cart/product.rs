// trolley/src/cart/product.rs

//! Product records as served by the catalog feed. Read-only from the cart's point of view.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TrolleyError, TrolleyResult};

/// Externally assigned product identifier.
///
/// `0` is never assigned by the feed; it stands for "missing" (a feed entry without
/// an `id` deserializes to it) and is rejected by every cart intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
  pub const MISSING: ProductId = ProductId(0);

  pub fn is_missing(self) -> bool {
    self == Self::MISSING
  }

  /// Errors with `InvalidInput` for the missing id.
  pub fn ensure_present(self) -> TrolleyResult<Self> {
    if self.is_missing() {
      return Err(TrolleyError::invalid_input("product identifier is missing"));
    }
    Ok(self)
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<u64> for ProductId {
  fn from(id: u64) -> Self {
    ProductId(id)
  }
}

/// Average review score and number of reviews.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
  pub rate: f64,
  pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(default)]
  pub id: ProductId,
  pub title: String,
  pub price: f64,
  #[serde(default)]
  pub category: String,
  /// Image URL.
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub rating: Rating,
  #[serde(default)]
  pub description: String,
}

impl Product {
  /// Checks the fields the cart copies or keys on.
  pub fn validate(&self) -> TrolleyResult<()> {
    self.id.ensure_present()?;
    if self.title.trim().is_empty() {
      return Err(TrolleyError::invalid_input(format!("product {} has an empty title", self.id)));
    }
    if !self.price.is_finite() || self.price < 0.0 {
      return Err(TrolleyError::invalid_input(format!(
        "product {} has an invalid price: {}",
        self.id, self.price
      )));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(id: u64, title: &str, price: f64) -> Product {
    Product {
      id: ProductId(id),
      title: title.to_string(),
      price,
      category: "misc".to_string(),
      image: String::new(),
      rating: Rating::default(),
      description: String::new(),
    }
  }

  #[test]
  fn validate_accepts_well_formed_product() {
    assert!(product(1, "Backpack", 109.95).validate().is_ok());
    assert!(product(2, "Freebie", 0.0).validate().is_ok());
  }

  #[test]
  fn validate_rejects_missing_id_empty_title_and_bad_price() {
    for bad in [
      product(0, "No id", 1.0),
      product(1, "   ", 1.0),
      product(1, "Negative", -0.01),
      product(1, "NaN", f64::NAN),
      product(1, "Inf", f64::INFINITY),
    ] {
      match bad.validate() {
        Err(TrolleyError::InvalidInput { .. }) => {}
        other => panic!("expected InvalidInput for {:?}, got {:?}", bad.title, other),
      }
    }
  }

  #[test]
  fn feed_entry_without_id_deserializes_to_missing() {
    let json = r#"{"title":"Orphan","price":3.5}"#;
    let parsed: Product = serde_json::from_str(json).unwrap();
    assert!(parsed.id.is_missing());
    assert_eq!(parsed.rating, Rating::default());
    assert!(parsed.validate().is_err());
  }

  #[test]
  fn feed_entry_with_non_numeric_id_fails_to_parse() {
    let json = r#"{"id":"abc","title":"Bad","price":1.0}"#;
    assert!(serde_json::from_str::<Product>(json).is_err());
  }
}
