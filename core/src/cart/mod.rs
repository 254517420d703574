// trolley/src/cart/mod.rs

//! The cart domain: products, lines, the cart state, its intents and reducer, and the
//! `CartStore` intent API on top of the generic `Store`.

pub mod intent;
pub mod line;
pub mod product;
pub mod reducer;
pub mod state;

pub use intent::CartIntent;
pub use line::CartLine;
pub use product::{Product, ProductId, Rating};
pub use reducer::{CartConfig, CartReducer};
pub use state::CartState;

use crate::core::handle::StoreHandle;
use crate::core::snapshot::Snapshot;
use crate::error::TrolleyResult;
use crate::store::Store;

/// A store holding one shopping cart.
pub type CartStore = Store<CartReducer>;

/// A shareable handle to a `CartStore`.
pub type CartHandle = StoreHandle<CartReducer>;

// Each intent method dispatches and hands back the snapshot current after it, so
// callers see the same state the subscribers were just notified with.
impl Store<CartReducer> {
  pub fn with_config(config: CartConfig) -> TrolleyResult<Self> {
    Ok(Self::new(CartReducer::with_config(config)?))
  }

  pub fn add_to_cart(&mut self, product: Product) -> TrolleyResult<Snapshot<CartState>> {
    self.dispatch(CartIntent::AddToCart(product))?;
    Ok(self.snapshot())
  }

  pub fn increment_quantity(&mut self, product_id: ProductId) -> TrolleyResult<Snapshot<CartState>> {
    self.dispatch(CartIntent::IncrementQuantity(product_id))?;
    Ok(self.snapshot())
  }

  pub fn decrement_quantity(&mut self, product_id: ProductId) -> TrolleyResult<Snapshot<CartState>> {
    self.dispatch(CartIntent::DecrementQuantity(product_id))?;
    Ok(self.snapshot())
  }

  pub fn update_quantity(
    &mut self,
    product_id: ProductId,
    quantity: i64,
    product: Option<Product>,
  ) -> TrolleyResult<Snapshot<CartState>> {
    self.dispatch(CartIntent::UpdateQuantity {
      product_id,
      quantity,
      product,
    })?;
    Ok(self.snapshot())
  }

  pub fn remove_line(&mut self, product_id: ProductId) -> TrolleyResult<Snapshot<CartState>> {
    self.dispatch(CartIntent::RemoveLine(product_id))?;
    Ok(self.snapshot())
  }

  pub fn clear(&mut self) -> TrolleyResult<Snapshot<CartState>> {
    self.dispatch(CartIntent::Clear)?;
    Ok(self.snapshot())
  }

  pub fn cart(&self) -> Snapshot<CartState> {
    self.snapshot()
  }

  pub fn line(&self, product_id: ProductId) -> Option<CartLine> {
    self.state.line(product_id).cloned()
  }

  pub fn quantity_of(&self, product_id: ProductId) -> u32 {
    self.state.quantity_of(product_id)
  }
}

// Same API through the shared handle; each call holds the lock for one intent only.
impl StoreHandle<CartReducer> {
  pub fn add_to_cart(&self, product: Product) -> TrolleyResult<Snapshot<CartState>> {
    self.lock().add_to_cart(product)
  }

  pub fn increment_quantity(&self, product_id: ProductId) -> TrolleyResult<Snapshot<CartState>> {
    self.lock().increment_quantity(product_id)
  }

  pub fn decrement_quantity(&self, product_id: ProductId) -> TrolleyResult<Snapshot<CartState>> {
    self.lock().decrement_quantity(product_id)
  }

  pub fn update_quantity(
    &self,
    product_id: ProductId,
    quantity: i64,
    product: Option<Product>,
  ) -> TrolleyResult<Snapshot<CartState>> {
    self.lock().update_quantity(product_id, quantity, product)
  }

  pub fn remove_line(&self, product_id: ProductId) -> TrolleyResult<Snapshot<CartState>> {
    self.lock().remove_line(product_id)
  }

  pub fn clear(&self) -> TrolleyResult<Snapshot<CartState>> {
    self.lock().clear()
  }

  pub fn cart(&self) -> Snapshot<CartState> {
    self.snapshot()
  }

  pub fn line(&self, product_id: ProductId) -> Option<CartLine> {
    self.lock().line(product_id)
  }

  pub fn quantity_of(&self, product_id: ProductId) -> u32 {
    self.lock().quantity_of(product_id)
  }
}
