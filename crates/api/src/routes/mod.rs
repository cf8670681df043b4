//! HTTP route handlers for the Rustmart API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                     - Health summary
//! GET    /health               - Liveness probe
//!
//! # Products
//! GET    /products             - List products
//! POST   /products             - Create product
//! GET    /products/{id}        - Product detail
//! PUT    /products/{id}        - Partial update
//! DELETE /products/{id}        - Delete product
//!
//! # Cart (requires X-User-ID)
//! GET    /cart                 - Current cart
//! POST   /cart                 - Add item (merges duplicate products)
//! DELETE /cart                 - Clear cart
//!
//! # Orders (requires X-User-ID)
//! GET    /orders               - List caller's orders
//! POST   /orders               - Checkout: cart -> order
//! GET    /orders/{id}          - Order detail
//! PATCH  /orders/{id}/status   - Replace order status
//! ```

pub mod cart;
pub mod health;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/", get(cart::show).post(cart::add).delete(cart::clear))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index).post(orders::create))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", patch(orders::update_status))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/", get(health::index))
        .route("/health", get(health::liveness))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Order routes
        .nest("/orders", order_routes())
}
