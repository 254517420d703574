// trolley/src/cart/line.rs

use serde::{Deserialize, Serialize};

use crate::cart::product::{Product, ProductId};

/// One product-quantity pair in the cart.
///
/// Title, price and image are copied from the product when the line is created so a
/// cart view can render without the catalog. `quantity` is at least 1 for as long as
/// the line exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
  pub product_id: ProductId,
  pub quantity: u32,
  pub title: String,
  pub price: f64,
  pub image: String,
}

impl CartLine {
  pub(crate) fn from_product(product: &Product, quantity: u32) -> Self {
    Self {
      product_id: product.id,
      quantity,
      title: product.title.clone(),
      price: product.price,
      image: product.image.clone(),
    }
  }

  pub fn line_total(&self) -> f64 {
    self.price * f64::from(self.quantity)
  }
}
