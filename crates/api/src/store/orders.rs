//! In-memory append-only order store.

use std::sync::Arc;

use tokio::sync::RwLock;

use rustmart_core::{Order, OrderId, OrderStatus, UserId};

/// Append-only order log.
///
/// Orders are appended once and never removed, so insertion order doubles
/// as chronological order. Every read is scoped by user: one user can never
/// see another user's order, even with a valid order ID.
#[derive(Clone, Default)]
pub struct OrderStore {
    inner: Arc<RwLock<Vec<Order>>>,
}

impl OrderStore {
    /// Create an empty order store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All of the user's orders in creation order.
    pub async fn list_for_user(&self, user: &UserId) -> Vec<Order> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|order| &order.user_id == user)
            .cloned()
            .collect()
    }

    /// Look up one of the user's orders by ID.
    pub async fn get(&self, user: &UserId, id: OrderId) -> Option<Order> {
        self.inner
            .read()
            .await
            .iter()
            .find(|order| order.id == id && &order.user_id == user)
            .cloned()
    }

    /// Append an order to the log.
    pub async fn append(&self, order: Order) {
        self.inner.write().await.push(order);
    }

    /// Replace the status of one of the user's orders in place.
    ///
    /// Any status may follow any other; there is no transition state
    /// machine. Returns the updated order, or `None` under the same
    /// conditions as [`Self::get`].
    pub async fn update_status(
        &self,
        user: &UserId,
        id: OrderId,
        status: OrderStatus,
    ) -> Option<Order> {
        let mut orders = self.inner.write().await;
        let order = orders
            .iter_mut()
            .find(|order| order.id == id && &order.user_id == user)?;
        order.status = status;
        Some(order.clone())
    }
}
