// demos/shop_app/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument, warn};
use trolley::{CartLine, CartState, ProductId};

use crate::errors::AppError;
use crate::state::AppState;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  #[serde(default)]
  pub product_id: u64,
}

#[derive(Deserialize, Debug)]
pub struct UpdateQuantityRequestPayload {
  pub quantity: i64,
}

// --- Response DTOs ---
#[derive(Serialize, Debug)]
pub struct CartLineView<'a> {
  #[serde(flatten)]
  pub line: &'a CartLine,
  pub line_total: f64,
}

/// Cart screen payload: lines in insertion order plus the totals row.
#[derive(Serialize, Debug)]
pub struct CartView<'a> {
  pub lines: Vec<CartLineView<'a>>,
  pub total_quantity: u64,
  pub subtotal: f64,
}

impl<'a> From<&'a CartState> for CartView<'a> {
  fn from(cart: &'a CartState) -> Self {
    Self {
      lines: cart
        .iter()
        .map(|line| CartLineView {
          line,
          line_total: line.line_total(),
        })
        .collect(),
      total_quantity: cart.total_quantity(),
      subtotal: cart.subtotal(),
    }
  }
}

fn cart_response(cart: &CartState) -> HttpResponse {
  HttpResponse::Ok().json(json!({ "cart": CartView::from(cart) }))
}

// --- Handler Implementations ---

#[instrument(name = "handler::view_cart", skip(app_state))]
pub async fn view_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart.cart();
  Ok(cart_response(&cart))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(product_id = %req_payload.product_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId(req_payload.product_id);
  if product_id.is_missing() {
    return Err(AppError::Validation("product_id is required.".to_string()));
  }

  let product = app_state.available_catalog()?.product(product_id).cloned().ok_or_else(|| {
    warn!("Add to cart for product {} which is not in the catalog.", product_id);
    AppError::NotFound(format!("Product with ID {} not found.", product_id))
  })?;

  let cart = app_state.cart.add_to_cart(product)?;
  info!(quantity = cart.quantity_of(product_id), "Product added to cart.");
  Ok(cart_response(&cart))
}

#[instrument(name = "handler::increment_quantity", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn increment_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart.increment_quantity(ProductId(path.into_inner()))?;
  Ok(cart_response(&cart))
}

#[instrument(name = "handler::decrement_quantity", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn decrement_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart.decrement_quantity(ProductId(path.into_inner()))?;
  Ok(cart_response(&cart))
}

/// Sets the quantity of a line directly. A product missing from the cart is added when
/// the catalog knows it; a quantity of zero or less removes the line.
#[instrument(
    name = "handler::update_quantity",
    skip(app_state, path, req_payload),
    fields(product_id = %path.as_ref(), quantity = req_payload.quantity)
)]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u64>,
  req_payload: web::Json<UpdateQuantityRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let product_id = ProductId(path.into_inner());
  let product = app_state.catalog.product(product_id).cloned();

  let cart = app_state
    .cart
    .update_quantity(product_id, req_payload.quantity, product)?;
  Ok(cart_response(&cart))
}

#[instrument(name = "handler::remove_line", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn remove_line_handler(app_state: web::Data<AppState>, path: web::Path<u64>) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart.remove_line(ProductId(path.into_inner()))?;
  Ok(cart_response(&cart))
}

#[instrument(name = "handler::clear_cart", skip(app_state))]
pub async fn clear_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let cart = app_state.cart.clear()?;
  info!("Cart cleared.");
  Ok(cart_response(&cart))
}
