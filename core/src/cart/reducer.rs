// trolley/src/cart/reducer.rs

//! The cart reducer: applies `CartIntent`s to a `CartState`.

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::cart::intent::CartIntent;
use crate::cart::line::CartLine;
use crate::cart::product::{Product, ProductId};
use crate::cart::state::CartState;
use crate::core::reducer::{Reducer, Transition};
use crate::error::{TrolleyError, TrolleyResult};

/// Cart policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartConfig {
  /// Upper bound for a single line's quantity. `None` means unbounded.
  #[serde(default)]
  pub max_line_quantity: Option<u32>,
}

impl CartConfig {
  pub fn validate(&self) -> TrolleyResult<()> {
    if self.max_line_quantity == Some(0) {
      return Err(TrolleyError::invalid_input("max_line_quantity must be at least 1"));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Default)]
pub struct CartReducer {
  config: CartConfig,
}

impl CartReducer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: CartConfig) -> TrolleyResult<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &CartConfig {
    &self.config
  }

  fn check_limit(&self, product_id: ProductId, quantity: u32) -> TrolleyResult<()> {
    match self.config.max_line_quantity {
      Some(max) if quantity > max => Err(TrolleyError::invalid_input(format!(
        "quantity {} for product {} exceeds the limit of {}",
        quantity, product_id, max
      ))),
      _ => Ok(()),
    }
  }

  fn add(&self, state: &CartState, product: Product) -> TrolleyResult<Transition<CartState>> {
    product.validate()?;
    let current = state.quantity_of(product.id);
    if current == 0 {
      self.check_limit(product.id, 1)?;
      let mut next = state.clone();
      next.push(CartLine::from_product(&product, 1));
      event!(Level::DEBUG, product_id = %product.id, "New cart line appended.");
      return Ok(Transition::Changed(next));
    }
    self.set(state, product.id, bump(product.id, current)?)
  }

  fn increment(&self, state: &CartState, product_id: ProductId) -> TrolleyResult<Transition<CartState>> {
    product_id.ensure_present()?;
    match state.line(product_id) {
      Some(line) => self.set(state, product_id, bump(product_id, line.quantity)?),
      None => {
        event!(Level::DEBUG, %product_id, "Increment on absent line ignored.");
        Ok(Transition::Unchanged)
      }
    }
  }

  fn decrement(&self, state: &CartState, product_id: ProductId) -> TrolleyResult<Transition<CartState>> {
    product_id.ensure_present()?;
    match state.line(product_id) {
      Some(line) if line.quantity > 1 => self.set(state, product_id, line.quantity - 1),
      Some(_) => remove(state, product_id),
      None => {
        event!(Level::DEBUG, %product_id, "Decrement on absent line ignored.");
        Ok(Transition::Unchanged)
      }
    }
  }

  fn update(
    &self,
    state: &CartState,
    product_id: ProductId,
    quantity: i64,
    product: Option<Product>,
  ) -> TrolleyResult<Transition<CartState>> {
    product_id.ensure_present()?;
    if let Some(payload) = &product {
      payload.validate()?;
      if payload.id != product_id {
        return Err(TrolleyError::invalid_input(format!(
          "product payload id {} does not match target id {}",
          payload.id, product_id
        )));
      }
    }

    if quantity <= 0 {
      return remove(state, product_id);
    }

    let quantity = u32::try_from(quantity)
      .map_err(|_| TrolleyError::invalid_input(format!("quantity {} is out of range", quantity)))?;

    match (state.line(product_id), product) {
      (Some(_), _) => self.set(state, product_id, quantity),
      (None, Some(payload)) => {
        self.check_limit(product_id, quantity)?;
        let mut next = state.clone();
        next.push(CartLine::from_product(&payload, quantity));
        event!(Level::DEBUG, %product_id, quantity, "Cart line created by quantity update.");
        Ok(Transition::Changed(next))
      }
      (None, None) => Err(TrolleyError::UnknownProduct { product_id }),
    }
  }

  /// Sets an existing line's quantity. Only increases are checked against the limit.
  fn set(&self, state: &CartState, product_id: ProductId, quantity: u32) -> TrolleyResult<Transition<CartState>> {
    let current = state.quantity_of(product_id);
    if current == quantity {
      return Ok(Transition::Unchanged);
    }
    if quantity > current {
      self.check_limit(product_id, quantity)?;
    }
    let mut next = state.clone();
    if !next.set_quantity(product_id, quantity) {
      return Err(TrolleyError::Internal(format!(
        "no cart line for product {} while setting quantity",
        product_id
      )));
    }
    Ok(Transition::Changed(next))
  }
}

fn bump(product_id: ProductId, quantity: u32) -> TrolleyResult<u32> {
  quantity
    .checked_add(1)
    .ok_or_else(|| TrolleyError::invalid_input(format!("quantity for product {} would overflow", product_id)))
}

fn remove(state: &CartState, product_id: ProductId) -> TrolleyResult<Transition<CartState>> {
  if !state.contains(product_id) {
    return Ok(Transition::Unchanged);
  }
  let mut next = state.clone();
  next.remove(product_id);
  event!(Level::DEBUG, %product_id, "Cart line removed.");
  Ok(Transition::Changed(next))
}

impl Reducer for CartReducer {
  type State = CartState;
  type Intent = CartIntent;
  type Error = TrolleyError;

  fn reduce(&self, state: &CartState, intent: CartIntent) -> TrolleyResult<Transition<CartState>> {
    match intent {
      CartIntent::AddToCart(product) => self.add(state, product),
      CartIntent::IncrementQuantity(product_id) => self.increment(state, product_id),
      CartIntent::DecrementQuantity(product_id) => self.decrement(state, product_id),
      CartIntent::UpdateQuantity {
        product_id,
        quantity,
        product,
      } => self.update(state, product_id, quantity, product),
      CartIntent::RemoveLine(product_id) => {
        product_id.ensure_present()?;
        remove(state, product_id)
      }
      CartIntent::Clear => {
        if state.is_empty() {
          Ok(Transition::Unchanged)
        } else {
          Ok(Transition::Changed(CartState::default()))
        }
      }
    }
  }
}
