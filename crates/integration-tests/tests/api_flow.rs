//! End-to-end tests for the Rustmart API.
//!
//! These tests require a running API server:
//!
//! ```bash
//! cargo run -p rustmart-api
//! ```
//!
//! Run with: `cargo test -p rustmart-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
fn base_url() -> String {
    std::env::var("RUSTMART_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::new()
}

/// A fresh user ID per test, so carts and orders never collide.
fn unique_user() -> String {
    format!("test-user-{}", Uuid::new_v4())
}

/// Test helper: create a product and return its JSON representation.
async fn create_product(client: &Client, name: &str, price: &str) -> Value {
    let resp = client
        .post(format!("{}/products", base_url()))
        .json(&json!({
            "name": name,
            "description": "integration test product",
            "price": price,
            "stock": 25,
        }))
        .send()
        .await
        .expect("Failed to create product");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("Failed to parse product")
}

fn product_id(product: &Value) -> &str {
    product["id"].as_str().expect("product has no id")
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_health_check() {
    let resp = client()
        .get(base_url())
        .send()
        .await
        .expect("Failed to reach server");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_product_crud() {
    let client = client();
    let base = base_url();
    let product = create_product(&client, "CRUD Widget", "9.99").await;
    let id = product_id(&product);

    // Read it back
    let resp = client
        .get(format!("{base}/products/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched["name"], "CRUD Widget");

    // Partial update: only the price changes
    let resp = client
        .put(format!("{base}/products/{id}"))
        .json(&json!({ "price": "12.50" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["name"], "CRUD Widget");
    let price: Decimal = updated["price"].as_str().unwrap().parse().unwrap();
    assert_eq!(price, Decimal::new(1250, 2));

    // Delete, then a fetch is a 404
    let resp = client
        .delete(format!("{base}/products/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base}/products/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_create_product_rejects_bad_body() {
    let resp = client()
        .post(format!("{}/products", base_url()))
        .json(&json!({ "name": "No price" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid request body");
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_cart_requires_user_id() {
    let resp = client()
        .get(format!("{}/cart", base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "User ID required");
}

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_add_to_cart_merges_quantities() {
    let client = client();
    let base = base_url();
    let user = unique_user();
    let product = create_product(&client, "Merge Widget", "5.00").await;
    let id = product_id(&product);

    for quantity in [2, 3] {
        let resp = client
            .post(format!("{base}/cart"))
            .header("X-User-ID", &user)
            .json(&json!({ "productId": id, "quantity": quantity }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = client
        .get(format!("{base}/cart"))
        .header("X-User-ID", &user)
        .send()
        .await
        .unwrap();
    let cart: Value = resp.json().await.unwrap();
    let items = cart.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 5);
}

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_add_unknown_product_to_cart() {
    let resp = client()
        .post(format!("{}/cart", base_url()))
        .header("X-User-ID", unique_user())
        .json(&json!({ "productId": Uuid::new_v4(), "quantity": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Product not found");
}

// ============================================================================
// Checkout & Orders
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_checkout_flow() {
    let client = client();
    let base = base_url();
    let user = unique_user();
    let product = create_product(&client, "Checkout Widget", "10.00").await;
    let id = product_id(&product);

    let resp = client
        .post(format!("{base}/cart"))
        .header("X-User-ID", &user)
        .json(&json!({ "productId": id, "quantity": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Checkout
    let resp = client
        .post(format!("{base}/orders"))
        .header("X-User-ID", &user)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let order: Value = resp.json().await.unwrap();
    assert_eq!(order["userId"], user.as_str());
    assert_eq!(order["status"], "pending");
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    let total: Decimal = order["totalAmount"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, Decimal::new(3000, 2));

    // Cart is cleared by a successful checkout
    let resp = client
        .get(format!("{base}/cart"))
        .header("X-User-ID", &user)
        .send()
        .await
        .unwrap();
    let cart: Value = resp.json().await.unwrap();
    assert!(cart.as_array().unwrap().is_empty());

    // The order shows up in the user's list
    let resp = client
        .get(format!("{base}/orders"))
        .header("X-User-ID", &user)
        .send()
        .await
        .unwrap();
    let orders: Value = resp.json().await.unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_checkout_empty_cart() {
    let resp = client()
        .post(format!("{}/orders", base_url()))
        .header("X-User-ID", unique_user())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Cart is empty");
}

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_checkout_with_deleted_product_preserves_cart() {
    let client = client();
    let base = base_url();
    let user = unique_user();
    let product = create_product(&client, "Doomed Widget", "4.00").await;
    let id = product_id(&product).to_owned();

    client
        .post(format!("{base}/cart"))
        .header("X-User-ID", &user)
        .json(&json!({ "productId": id, "quantity": 1 }))
        .send()
        .await
        .unwrap();

    client
        .delete(format!("{base}/products/{id}"))
        .send()
        .await
        .unwrap();

    let resp = client
        .post(format!("{base}/orders"))
        .header("X-User-ID", &user)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], format!("Product {id} not found"));

    // All-or-nothing: the cart still holds the dangling line
    let resp = client
        .get(format!("{base}/cart"))
        .header("X-User-ID", &user)
        .send()
        .await
        .unwrap();
    let cart: Value = resp.json().await.unwrap();
    assert_eq!(cart.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_order_status_update() {
    let client = client();
    let base = base_url();
    let user = unique_user();
    let product = create_product(&client, "Status Widget", "7.00").await;

    client
        .post(format!("{base}/cart"))
        .header("X-User-ID", &user)
        .json(&json!({ "productId": product_id(&product), "quantity": 1 }))
        .send()
        .await
        .unwrap();
    let order: Value = client
        .post(format!("{base}/orders"))
        .header("X-User-ID", &user)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let order_id = order["id"].as_str().unwrap();

    let resp = client
        .patch(format!("{base}/orders/{order_id}/status"))
        .header("X-User-ID", &user)
        .json(&json!({ "status": "shipped" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["status"], "shipped");

    // Unknown status values never reach the store
    let resp = client
        .patch(format!("{base}/orders/{order_id}/status"))
        .header("X-User-ID", &user)
        .json(&json!({ "status": "teleported" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires a running rustmart-api server"]
async fn test_orders_are_scoped_by_user() {
    let client = client();
    let base = base_url();
    let owner = unique_user();
    let stranger = unique_user();
    let product = create_product(&client, "Private Widget", "3.00").await;

    client
        .post(format!("{base}/cart"))
        .header("X-User-ID", &owner)
        .json(&json!({ "productId": product_id(&product), "quantity": 1 }))
        .send()
        .await
        .unwrap();
    let order: Value = client
        .post(format!("{base}/orders"))
        .header("X-User-ID", &owner)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let order_id = order["id"].as_str().unwrap();

    // Another user cannot fetch or mutate the order, even with its real ID
    let resp = client
        .get(format!("{base}/orders/{order_id}"))
        .header("X-User-ID", &stranger)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .patch(format!("{base}/orders/{order_id}/status"))
        .header("X-User-ID", &stranger)
        .json(&json!({ "status": "delivered" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Order not found");
}
