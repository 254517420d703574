// trolley/src/cart/intent.rs

use crate::cart::product::{Product, ProductId};

/// A named mutation request dispatched to the cart store.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
  /// Append a line with quantity 1, or bump an existing line by 1.
  AddToCart(Product),
  /// +1 on an existing line. Never creates a line.
  IncrementQuantity(ProductId),
  /// -1 on an existing line; a line at 1 is removed.
  DecrementQuantity(ProductId),
  /// Set a line to exactly `quantity`. `quantity <= 0` removes the line.
  /// A missing line is only created when `product` carries the display data.
  UpdateQuantity {
    product_id: ProductId,
    quantity: i64,
    product: Option<Product>,
  },
  /// Drop a line whatever its quantity.
  RemoveLine(ProductId),
  /// Empty the cart.
  Clear,
}

impl CartIntent {
  pub fn name(&self) -> &'static str {
    match self {
      CartIntent::AddToCart(_) => "add_to_cart",
      CartIntent::IncrementQuantity(_) => "increment_quantity",
      CartIntent::DecrementQuantity(_) => "decrement_quantity",
      CartIntent::UpdateQuantity { .. } => "update_quantity",
      CartIntent::RemoveLine(_) => "remove_line",
      CartIntent::Clear => "clear",
    }
  }

  /// The product this intent targets, if any.
  pub fn product_id(&self) -> Option<ProductId> {
    match self {
      CartIntent::AddToCart(product) => Some(product.id),
      CartIntent::IncrementQuantity(id)
      | CartIntent::DecrementQuantity(id)
      | CartIntent::RemoveLine(id)
      | CartIntent::UpdateQuantity { product_id: id, .. } => Some(*id),
      CartIntent::Clear => None,
    }
  }
}
