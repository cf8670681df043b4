//! Order route handlers, including checkout.
//!
//! Every order operation is scoped to the caller via the `X-User-ID`
//! header; an order ID belonging to another user behaves like an absent
//! order.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::instrument;

use rustmart_core::{Order, OrderId, OrderStatus};

use crate::error::{ApiError, Result};
use crate::extract::{Identity, Json};
use crate::state::AppState;

/// Status replacement payload for `PATCH /orders/{id}/status`.
///
/// Deserializing through [`OrderStatus`] is what enforces the four-value
/// enum: unknown statuses never reach the store.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

fn parse_id(raw: &str) -> Result<OrderId> {
    raw.parse().map_err(|_| ApiError::order_not_found())
}

/// List the caller's orders in creation order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, Identity(user): Identity) -> Json<Vec<Order>> {
    Json(state.orders().list_for_user(&user).await)
}

/// Checkout: convert the caller's cart into a new pending order.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Identity(user): Identity,
) -> Result<(StatusCode, Json<Order>)> {
    let order = state.checkout().checkout(&user).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Fetch one of the caller's orders.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Identity(user): Identity,
    Path(id): Path<String>,
) -> Result<Json<Order>> {
    let id = parse_id(&id)?;
    let order = state
        .orders()
        .get(&user, id)
        .await
        .ok_or_else(ApiError::order_not_found)?;

    Ok(Json(order))
}

/// Replace the status of one of the caller's orders.
#[instrument(skip(state, update))]
pub async fn update_status(
    State(state): State<AppState>,
    Identity(user): Identity,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Order>> {
    let id = parse_id(&id)?;
    let order = state
        .orders()
        .update_status(&user, id, update.status)
        .await
        .ok_or_else(ApiError::order_not_found)?;
    tracing::info!(
        user_id = %user,
        order_id = %order.id,
        status = %order.status,
        "Order status updated"
    );

    Ok(Json(order))
}
