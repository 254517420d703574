// demos/shop_app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument, warn};
use trolley::{CartState, Product, ProductId};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub category: Option<String>,
}

/// A catalog entry as the catalog screen renders it: the product plus how many are in the cart.
#[derive(Serialize, Debug)]
pub struct ProductView<'a> {
  #[serde(flatten)]
  pub product: &'a Product,
  pub in_cart: u32,
}

impl<'a> ProductView<'a> {
  pub fn new(product: &'a Product, cart: &CartState) -> Self {
    Self {
      product,
      in_cart: cart.quantity_of(product.id),
    }
  }
}

#[instrument(name = "handler::list_products", skip(app_state, query_params), fields(category = ?query_params.category))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let catalog = app_state.available_catalog()?;
  let cart = app_state.cart.cart();

  let products: Vec<ProductView<'_>> = match query_params.category.as_deref() {
    Some(category) => catalog.by_category(category).map(|p| ProductView::new(p, &cart)).collect(),
    None => catalog.products().iter().map(|p| ProductView::new(p, &cart)).collect(),
  };

  info!("Listing {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "status": catalog.status(),
      "products": products
  })))
}

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(json!({
      "categories": app_state.catalog.categories()
  })))
}

/// The product detail overlay.
#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(app_state: web::Data<AppState>, path: web::Path<u64>) -> Result<HttpResponse, AppError> {
  let product_id = ProductId(path.into_inner());

  match app_state.catalog.product(product_id) {
    Some(product) => {
      let cart = app_state.cart.cart();
      Ok(HttpResponse::Ok().json(json!({
          "product": ProductView::new(product, &cart)
      })))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}
