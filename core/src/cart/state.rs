// trolley/src/cart/state.rs

//! The cart state: lines in insertion order plus a by-id position index.

use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::cart::line::CartLine;
use crate::cart::product::ProductId;

/// Ordered cart lines, first-added first. At most one line per product.
///
/// Display order and lookup are kept separate: `lines()` iterates in insertion order
/// while `line(id)` goes through a `HashMap` of positions. Only the cart reducer
/// mutates a `CartState`, and it always works on a clone of the published one.
#[derive(Debug, Clone, Default)]
pub struct CartState {
  lines: Vec<CartLine>,
  index: HashMap<ProductId, usize>,
}

impl CartState {
  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
    self.lines.iter()
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
    self.index.get(&product_id).and_then(|&pos| self.lines.get(pos))
  }

  pub fn contains(&self, product_id: ProductId) -> bool {
    self.index.contains_key(&product_id)
  }

  /// Quantity of the product in the cart, 0 when absent.
  pub fn quantity_of(&self, product_id: ProductId) -> u32 {
    self.line(product_id).map_or(0, |line| line.quantity)
  }

  /// Sum of all line quantities (the badge count on a cart icon).
  pub fn total_quantity(&self) -> u64 {
    self.lines.iter().map(|line| u64::from(line.quantity)).sum()
  }

  pub fn subtotal(&self) -> f64 {
    self.lines.iter().map(CartLine::line_total).sum()
  }

  pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
    self.lines.iter().map(|line| line.product_id)
  }

  // --- Mutators (reducer only) ---

  /// Appends a line for a product not yet in the cart.
  pub(crate) fn push(&mut self, line: CartLine) {
    debug_assert!(!self.contains(line.product_id), "duplicate cart line");
    self.index.insert(line.product_id, self.lines.len());
    self.lines.push(line);
  }

  pub(crate) fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
    debug_assert!(quantity >= 1, "zero-quantity line");
    match self.index.get(&product_id).and_then(|&pos| self.lines.get_mut(pos)) {
      Some(line) => {
        line.quantity = quantity;
        true
      }
      None => false,
    }
  }

  pub(crate) fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
    let pos = self.index.remove(&product_id)?;
    let removed = self.lines.remove(pos);
    // Lines after `pos` shifted left by one.
    for line in &self.lines[pos..] {
      if let Some(slot) = self.index.get_mut(&line.product_id) {
        *slot -= 1;
      }
    }
    Some(removed)
  }
}

// The index is derived from `lines`, so equality is on lines alone.
impl PartialEq for CartState {
  fn eq(&self, other: &Self) -> bool {
    self.lines == other.lines
  }
}

impl Serialize for CartState {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.lines.serialize(serializer)
  }
}

impl<'a> IntoIterator for &'a CartState {
  type Item = &'a CartLine;
  type IntoIter = std::slice::Iter<'a, CartLine>;

  fn into_iter(self) -> Self::IntoIter {
    self.lines.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn line(id: u64, quantity: u32, price: f64) -> CartLine {
    CartLine {
      product_id: ProductId(id),
      quantity,
      title: format!("Product {}", id),
      price,
      image: String::new(),
    }
  }

  fn assert_index_consistent(state: &CartState) {
    assert_eq!(state.index.len(), state.lines.len());
    for (pos, l) in state.lines.iter().enumerate() {
      assert_eq!(state.index.get(&l.product_id), Some(&pos));
    }
  }

  #[test]
  fn push_keeps_insertion_order_and_index() {
    let mut state = CartState::default();
    state.push(line(2, 1, 1.0));
    state.push(line(1, 1, 1.0));
    state.push(line(7, 3, 1.0));

    let ids: Vec<u64> = state.product_ids().map(|id| id.0).collect();
    assert_eq!(ids, vec![2, 1, 7]);
    assert_eq!(state.quantity_of(ProductId(7)), 3);
    assert_index_consistent(&state);
  }

  #[test]
  fn remove_from_middle_reindexes_following_lines() {
    let mut state = CartState::default();
    for id in [10, 20, 30, 40] {
      state.push(line(id, 1, 1.0));
    }

    let removed = state.remove(ProductId(20)).unwrap();
    assert_eq!(removed.product_id, ProductId(20));
    assert!(!state.contains(ProductId(20)));
    assert_eq!(state.line(ProductId(40)).unwrap().product_id, ProductId(40));
    assert_index_consistent(&state);

    assert!(state.remove(ProductId(20)).is_none());
  }

  #[test]
  fn set_quantity_only_touches_existing_lines() {
    let mut state = CartState::default();
    state.push(line(1, 1, 2.5));
    assert!(state.set_quantity(ProductId(1), 4));
    assert!(!state.set_quantity(ProductId(2), 4));
    assert_eq!(state.quantity_of(ProductId(1)), 4);
    assert_eq!(state.quantity_of(ProductId(2)), 0);
  }

  #[test]
  fn totals() {
    let mut state = CartState::default();
    state.push(line(1, 2, 1.5));
    state.push(line(2, 3, 10.0));
    assert_eq!(state.total_quantity(), 5);
    assert!((state.subtotal() - 33.0).abs() < 1e-9);
    assert_eq!(CartState::default().subtotal(), 0.0);
  }

  #[test]
  fn equality_ignores_index_layout() {
    let mut a = CartState::default();
    a.push(line(1, 1, 1.0));
    a.push(line(2, 1, 1.0));
    a.remove(ProductId(1));

    let mut b = CartState::default();
    b.push(line(2, 1, 1.0));
    assert_eq!(a, b);
  }
}
