// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use parking_lot::Mutex;
use tracing::Level;
use trolley::{CartLine, CartState, CartStore, Product, ProductId, Rating, Snapshot};

// --- Product fixtures ---
pub fn product(id: u64) -> Product {
  Product {
    id: ProductId(id),
    title: format!("Product {}", id),
    price: 10.0 * id as f64 + 0.99,
    category: if id % 2 == 0 { "electronics" } else { "jewelery" }.to_string(),
    image: format!("https://fakestoreapi.com/img/{}.jpg", id),
    rating: Rating { rate: 4.1, count: 120 },
    description: format!("Description of product {}", id),
  }
}

pub fn products(ids: &[u64]) -> Vec<Product> {
  ids.iter().map(|&id| product(id)).collect()
}

/// `(id, quantity)` pairs in display order.
pub fn lines_of(state: &CartState) -> Vec<(u64, u32)> {
  state.iter().map(|line: &CartLine| (line.product_id.0, line.quantity)).collect()
}

/// Unique ids and every quantity >= 1.
pub fn assert_cart_invariants(state: &CartState) {
  let mut seen = std::collections::HashSet::new();
  for line in state.iter() {
    assert!(seen.insert(line.product_id), "duplicate line for {}", line.product_id);
    assert!(line.quantity >= 1, "line {} has quantity {}", line.product_id, line.quantity);
    assert_eq!(state.line(line.product_id), Some(line));
  }
}

// --- Recording subscriber ---
/// Collects every snapshot a store notifies with.
#[derive(Clone, Default)]
pub struct Recorder {
  pub seen: Arc<Mutex<Vec<Snapshot<CartState>>>>,
}

impl Recorder {
  pub fn attach(store: &mut CartStore) -> Self {
    let recorder = Recorder::default();
    let sink = recorder.seen.clone();
    store.subscribe(move |snapshot| sink.lock().push(snapshot.clone()));
    recorder
  }

  pub fn count(&self) -> usize {
    self.seen.lock().len()
  }

  pub fn last(&self) -> Option<Snapshot<CartState>> {
    self.seen.lock().last().cloned()
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counter shared by listener tests ---
pub static LISTENER_CALLS: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  LISTENER_CALLS.store(0, Ordering::SeqCst);
}
