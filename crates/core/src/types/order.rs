//! Order records produced by checkout.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::id::{OrderId, UserId};
use super::status::OrderStatus;

/// An order: the immutable record of a completed checkout.
///
/// `items` is a by-value snapshot of the cart at checkout time; mutating the
/// cart afterwards never alters an existing order. Only `status` changes
/// after creation, and orders are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
