// demos/shop_app/src/services/fake_store.rs

//! HTTP product feed backed by a Fake Store style endpoint: one GET returning a JSON
//! array of products.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument, warn};
use trolley::{FeedError, Product, ProductFeed};

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct FakeStoreFeed {
  client: reqwest::Client,
  url: String,
}

impl FakeStoreFeed {
  pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| FeedError::Transport(format!("failed to build HTTP client: {}", e)))?;
    Ok(Self { client, url: url.into() })
  }

  pub fn from_config(config: &AppConfig) -> Result<Self, FeedError> {
    Self::new(config.catalog_url.clone(), config.catalog_timeout)
  }

  pub fn url(&self) -> &str {
    &self.url
  }
}

#[async_trait]
impl ProductFeed for FakeStoreFeed {
  #[instrument(name = "FakeStoreFeed::fetch_products", skip(self), fields(url = %self.url))]
  async fn fetch_products(&self) -> Result<Vec<Product>, FeedError> {
    let response = self
      .client
      .get(&self.url)
      .send()
      .await
      .map_err(|e| FeedError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      warn!(%status, "Product feed returned an error status.");
      return Err(FeedError::Status {
        status: status.as_u16(),
        body,
      });
    }

    let products: Vec<Product> = response.json().await.map_err(|e| FeedError::Decode(e.to_string()))?;
    info!(count = products.len(), "Product feed fetched.");
    Ok(products)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{web, App, HttpResponse, HttpServer};
  use serde_json::json;

  // Serves a good feed, a failing one and a malformed one on an ephemeral port.
  fn start_feed_server() -> (String, actix_web::dev::ServerHandle) {
    let server = HttpServer::new(|| {
      App::new()
        .route(
          "/products",
          web::get().to(|| async {
            HttpResponse::Ok().json(json!([{
                "id": 1,
                "title": "Backpack",
                "price": 109.95,
                "category": "men's clothing",
                "image": "https://img.example/1.png",
                "rating": { "rate": 3.9, "count": 120 },
                "description": "Fits a laptop."
            }]))
          }),
        )
        .route(
          "/broken",
          web::get().to(|| async { HttpResponse::ServiceUnavailable().body("try later") }),
        )
        .route(
          "/garbage",
          web::get().to(|| async { HttpResponse::Ok().content_type("application/json").body("{ not json") }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let running = server.run();
    let handle = running.handle();
    actix_web::rt::spawn(running);
    (format!("http://{}", addr), handle)
  }

  fn feed(base: &str, path: &str) -> FakeStoreFeed {
    FakeStoreFeed::new(format!("{}{}", base, path), Duration::from_secs(5)).unwrap()
  }

  #[actix_web::test]
  async fn fetches_and_decodes_products() {
    let (base, handle) = start_feed_server();

    let products = feed(&base, "/products").fetch_products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Backpack");
    assert_eq!(products[0].rating.count, 120);

    handle.stop(true).await;
  }

  #[actix_web::test]
  async fn error_status_and_bad_json_are_feed_errors() {
    let (base, handle) = start_feed_server();

    match feed(&base, "/broken").fetch_products().await {
      Err(FeedError::Status { status, body }) => {
        assert_eq!(status, 503);
        assert_eq!(body, "try later");
      }
      other => panic!("Expected FeedError::Status, got {:?}", other),
    }

    match feed(&base, "/garbage").fetch_products().await {
      Err(FeedError::Decode(_)) => {}
      other => panic!("Expected FeedError::Decode, got {:?}", other),
    }

    // nothing listens once the server is stopped
    handle.stop(true).await;
    assert!(matches!(
      feed(&base, "/products").fetch_products().await,
      Err(FeedError::Transport(_))
    ));
  }
}
