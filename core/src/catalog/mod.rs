// trolley/src/catalog/mod.rs

//! The display catalog: products read once from a `ProductFeed`, with by-id lookup.
//! The catalog never touches the cart; hosts copy a catalog product into an
//! `add_to_cart` intent when the user asks for it.

pub mod feed;

pub use feed::{FeedError, FunctionalProductFeed, ProductFeed, StaticProductFeed};

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use tracing::{event, instrument, Level};

use crate::cart::product::{Product, ProductId};

/// Whether the last load produced a usable catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogStatus {
  Loaded { count: usize },
  /// The feed failed. The catalog is empty; hosts show an error indicator.
  Unavailable { reason: String },
}

#[derive(Debug, Clone)]
pub struct Catalog {
  products: Vec<Product>,
  index: HashMap<ProductId, usize>,
  status: CatalogStatus,
}

impl Catalog {
  /// Builds a catalog in feed order. Entries failing `Product::validate` are skipped, and
  /// a repeated id keeps its first occurrence.
  pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
    let mut kept = Vec::new();
    let mut index = HashMap::new();
    for product in products {
      if let Err(e) = product.validate() {
        event!(Level::WARN, error = %e, "Skipping invalid catalog entry.");
        continue;
      }
      if index.contains_key(&product.id) {
        event!(Level::WARN, product_id = %product.id, "Skipping duplicate catalog entry.");
        continue;
      }
      index.insert(product.id, kept.len());
      kept.push(product);
    }
    let status = CatalogStatus::Loaded { count: kept.len() };
    Self {
      products: kept,
      index,
      status,
    }
  }

  pub fn unavailable(reason: impl Into<String>) -> Self {
    Self {
      products: Vec::new(),
      index: HashMap::new(),
      status: CatalogStatus::Unavailable { reason: reason.into() },
    }
  }

  /// Fetches from `feed` once. A failing feed yields an empty, `Unavailable` catalog
  /// rather than an error: an empty catalog is a valid display state.
  #[instrument(name = "Catalog::load", skip_all)]
  pub async fn load(feed: &dyn ProductFeed) -> Self {
    match feed.fetch_products().await {
      Ok(products) => {
        let catalog = Self::from_products(products);
        event!(Level::INFO, count = catalog.len(), "Catalog loaded.");
        catalog
      }
      Err(e) => {
        event!(Level::ERROR, error = %e, "Catalog fetch failed.");
        Self::unavailable(e.to_string())
      }
    }
  }

  pub fn status(&self) -> &CatalogStatus {
    &self.status
  }

  pub fn is_available(&self) -> bool {
    matches!(self.status, CatalogStatus::Loaded { .. })
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn product(&self, id: ProductId) -> Option<&Product> {
    self.index.get(&id).and_then(|&pos| self.products.get(pos))
  }

  /// Distinct categories, sorted.
  pub fn categories(&self) -> Vec<&str> {
    self
      .products
      .iter()
      .map(|p| p.category.as_str())
      .collect::<BTreeSet<_>>()
      .into_iter()
      .collect()
  }

  pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
    self.products.iter().filter(move |p| p.category == category)
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}

impl Default for Catalog {
  fn default() -> Self {
    Self::from_products(Vec::new())
  }
}
