// trolley/examples/basic_cart.rs

use trolley::{Catalog, CartReducer, CartStore, Product, ProductId, Rating, StaticProductFeed, TrolleyError};
use tracing::info;

fn product(id: u64, title: &str, price: f64) -> Product {
  Product {
    id: ProductId(id),
    title: title.to_string(),
    price,
    category: "demo".to_string(),
    image: String::new(),
    rating: Rating { rate: 4.0, count: 10 },
    description: String::new(),
  }
}

#[tokio::main]
async fn main() -> Result<(), TrolleyError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  // 1. Load the display catalog once
  let feed = StaticProductFeed::new(vec![
    product(1, "Backpack", 109.95),
    product(2, "Slim fit t-shirt", 22.3),
    product(3, "Cotton jacket", 55.99),
  ]);
  let catalog = Catalog::load(&feed).await;
  info!("Catalog has {} products", catalog.len());

  // 2. Create the cart store and a view that re-renders on every change
  let mut cart = CartStore::new(CartReducer::new());
  cart.subscribe(|snapshot| {
    info!(
      "Cart view: {} lines, {} items, subtotal {:.2}",
      snapshot.len(),
      snapshot.total_quantity(),
      snapshot.subtotal()
    );
  });

  // 3. Dispatch intents the way a catalog screen and cart screen would
  for id in [2, 1, 2] {
    if let Some(p) = catalog.product(ProductId(id)) {
      cart.add_to_cart(p.clone())?;
    }
  }
  cart.increment_quantity(ProductId(1))?;
  cart.decrement_quantity(ProductId(2))?;
  let snapshot = cart.decrement_quantity(ProductId(2))?;

  // 4. Inspect the result
  for line in snapshot.iter() {
    info!("- {} x{} ({:.2})", line.title, line.quantity, line.line_total());
  }

  // Expected: product 2 was added twice then decremented twice, so only the backpack is left.
  assert_eq!(snapshot.len(), 1);
  assert_eq!(snapshot.quantity_of(ProductId(1)), 2);

  Ok(())
}
