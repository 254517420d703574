// trolley/src/catalog/feed.rs

//! Defines the `ProductFeed` trait and its in-process implementations.
//! The network-backed feed lives with the host application.

use async_trait::async_trait;
use std::future::Future;
use std::marker::PhantomData;
use thiserror::Error;

use crate::cart::product::Product;

#[derive(Debug, Error)]
pub enum FeedError {
  #[error("Product feed request failed: {0}")]
  Transport(String),

  #[error("Product feed responded with status {status}: {body}")]
  Status { status: u16, body: String },

  #[error("Product feed payload could not be decoded: {0}")]
  Decode(String),

  #[error("Product feed error. Source: {source}")]
  Other {
    #[source]
    source: anyhow::Error,
  },
}

/// Source of the product catalog. Read once per screen mount; no paging, auth or retry.
#[async_trait]
pub trait ProductFeed: Send + Sync + 'static {
  async fn fetch_products(&self) -> Result<Vec<Product>, FeedError>;
}

// --- Static Product Feed ---

/// Serves a fixed product list.
#[derive(Debug, Clone, Default)]
pub struct StaticProductFeed {
  products: Vec<Product>,
}

impl StaticProductFeed {
  pub fn new(products: impl Into<Vec<Product>>) -> Self {
    Self {
      products: products.into(),
    }
  }
}

#[async_trait]
impl ProductFeed for StaticProductFeed {
  async fn fetch_products(&self) -> Result<Vec<Product>, FeedError> {
    Ok(self.products.clone())
  }
}

// --- Functional Product Feed ---

/// Fetches products by invoking a user-supplied asynchronous function.
pub struct FunctionalProductFeed<F, Fut>
where
  F: Fn() -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Vec<Product>, FeedError>> + Send + 'static,
{
  fetch: F,
  _phantom_fut: PhantomData<fn() -> Fut>,
}

impl<F, Fut> FunctionalProductFeed<F, Fut>
where
  F: Fn() -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Vec<Product>, FeedError>> + Send + 'static,
{
  pub fn new(fetch: F) -> Self {
    Self {
      fetch,
      _phantom_fut: PhantomData,
    }
  }
}

#[async_trait]
impl<F, Fut> ProductFeed for FunctionalProductFeed<F, Fut>
where
  F: Fn() -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Vec<Product>, FeedError>> + Send + 'static,
{
  async fn fetch_products(&self) -> Result<Vec<Product>, FeedError> {
    (self.fetch)().await
  }
}
