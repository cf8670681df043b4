//! Product catalog route handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tracing::instrument;

use rustmart_core::{NewProduct, Product, ProductId, ProductUpdate};

use crate::error::{ApiError, Result};
use crate::extract::Json;
use crate::state::AppState;

/// Product IDs arrive as opaque path strings; anything that is not a valid
/// ID is indistinguishable from an absent product.
fn parse_id(raw: &str) -> Result<ProductId> {
    raw.parse().map_err(|_| ApiError::product_not_found())
}

fn validate_price(price: Decimal) -> Result<()> {
    if price.is_sign_negative() {
        return Err(ApiError::BadRequest(
            "Price must not be negative".to_owned(),
        ));
    }
    Ok(())
}

/// List all products.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.products().list().await;
    tracing::debug!(count = products.len(), "Listed products");
    Json(products)
}

/// Create a product.
#[instrument(skip(state, new))]
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    validate_price(new.price)?;

    let product = state.products().create(new).await;
    tracing::info!(product_id = %product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Fetch a single product.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state
        .products()
        .get(id)
        .await
        .ok_or_else(ApiError::product_not_found)?;

    Ok(Json(product))
}

/// Partially update a product. Absent fields are left untouched.
#[instrument(skip(state, update))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    let id = parse_id(&id)?;
    if let Some(price) = update.price {
        validate_price(price)?;
    }

    let product = state
        .products()
        .update(id, update)
        .await
        .ok_or_else(ApiError::product_not_found)?;
    tracing::info!(product_id = %product.id, "Product updated");

    Ok(Json(product))
}

/// Delete a product.
///
/// Carts and orders that reference the product keep their dangling lines.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let id = parse_id(&id)?;
    if !state.products().delete(id).await {
        return Err(ApiError::product_not_found());
    }
    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(json!({ "message": "Product deleted" })))
}
