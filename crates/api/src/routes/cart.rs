//! Cart route handlers.
//!
//! Every cart operation is scoped to the caller via the `X-User-ID` header.

use axum::extract::State;
use serde_json::{Value, json};
use tracing::instrument;

use rustmart_core::CartItem;

use crate::error::{ApiError, Result};
use crate::extract::{Identity, Json};
use crate::state::AppState;

/// The caller's current cart. Empty if nothing was ever added.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Identity(user): Identity) -> Json<Vec<CartItem>> {
    let cart = state.carts().get(&user).await;
    tracing::debug!(user_id = %user, lines = cart.len(), "Cart retrieved");
    Json(cart)
}

/// Add a quantity of a product to the caller's cart.
///
/// The product must exist at the time of the add; the reference is not
/// re-checked afterwards. Adding a product already in the cart increments
/// the existing line rather than appending a duplicate.
#[instrument(skip(state, item))]
pub async fn add(
    State(state): State<AppState>,
    Identity(user): Identity,
    Json(item): Json<CartItem>,
) -> Result<Json<Vec<CartItem>>> {
    if item.quantity == 0 {
        return Err(ApiError::BadRequest(
            "Quantity must be greater than zero".to_owned(),
        ));
    }
    if state.products().get(item.product_id).await.is_none() {
        tracing::warn!(
            user_id = %user,
            product_id = %item.product_id,
            "Add to cart for unknown product"
        );
        return Err(ApiError::product_not_found());
    }

    let cart = state
        .carts()
        .add_item(&user, item.product_id, item.quantity)
        .await;
    tracing::info!(user_id = %user, lines = cart.len(), "Cart updated");

    Ok(Json(cart))
}

/// Drop the caller's cart entirely. Clearing an absent cart succeeds.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>, Identity(user): Identity) -> Json<Value> {
    state.carts().clear(&user).await;
    tracing::info!(user_id = %user, "Cart cleared");
    Json(json!({ "message": "Cart cleared" }))
}
