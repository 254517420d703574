// demos/shop_app/src/web/routes.rs

use actix_web::web;

use crate::state::AppState;
use crate::web::handlers::{cart_handlers, product_handlers};

// Reports the catalog load outcome alongside liveness.
async fn health_check_handler(app_state: web::Data<AppState>) -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({
      "status": "ok",
      "catalog": app_state.catalog.status(),
      "max_line_quantity": app_state.config.cart.max_line_quantity,
  }))
}

// Called from `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      // Catalog screen and product detail overlay
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("/categories", web::get().to(product_handlers::list_categories_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      )
      // Cart screen
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("", web::delete().to(cart_handlers::clear_cart_handler))
          .route("/items", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/items/{product_id}", web::put().to(cart_handlers::update_quantity_handler))
          .route("/items/{product_id}", web::delete().to(cart_handlers::remove_line_handler))
          .route(
            "/items/{product_id}/increment",
            web::post().to(cart_handlers::increment_quantity_handler),
          )
          .route(
            "/items/{product_id}/decrement",
            web::post().to(cart_handlers::decrement_quantity_handler),
          ),
      ),
  );
}
