//! Checkout: converts a user's cart into an order.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::Mutex;

use rustmart_core::{Order, OrderId, OrderStatus, ProductId, UserId};

use crate::store::{CartStore, OrderStore, ProductStore};

/// Why a checkout was refused. Either way, nothing was mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The user's cart has no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line references a product that no longer exists.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),
}

/// Turns a user's cart into an order.
///
/// Checkout for a given user is serialized through a per-user mutex: read
/// cart, validate products, compute the total, append the order, and clear
/// the cart run as one unit. Two concurrent checkouts for the same user
/// therefore produce exactly one order; the loser finds an empty cart.
/// Checkouts for different users do not contend.
#[derive(Clone)]
pub struct CheckoutService {
    products: ProductStore,
    carts: CartStore,
    orders: OrderStore,
    user_locks: Arc<Mutex<HashMap<UserId, Arc<Mutex<()>>>>>,
}

impl CheckoutService {
    /// Create a checkout service over the given stores.
    #[must_use]
    pub fn new(products: ProductStore, carts: CartStore, orders: OrderStore) -> Self {
        Self {
            products,
            carts,
            orders,
            user_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The serialization lock for one user's checkouts, created on first
    /// use. Lock entries are never reclaimed; user identities are few and
    /// live as long as the process anyway.
    async fn user_lock(&self, user: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        Arc::clone(locks.entry(user.clone()).or_default())
    }

    /// Convert the user's cart into a pending order.
    ///
    /// Every cart line is validated against the product catalog before
    /// anything is written: if any referenced product is gone, the whole
    /// checkout fails and the cart is left exactly as it was. On success
    /// the order carries a by-value snapshot of the cart, the order is
    /// appended, and the cart entry is removed.
    pub async fn checkout(&self, user: &UserId) -> Result<Order, CheckoutError> {
        let lock = self.user_lock(user).await;
        let _guard = lock.lock().await;

        let items = self.carts.get(user).await;
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut total_amount = Decimal::ZERO;
        for item in &items {
            let product = self
                .products
                .get(item.product_id)
                .await
                .ok_or(CheckoutError::ProductNotFound(item.product_id))?;
            total_amount += product.price * Decimal::from(item.quantity);
        }

        let order = Order {
            id: OrderId::generate(),
            user_id: user.clone(),
            items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        self.orders.append(order.clone()).await;
        self.carts.clear(user).await;

        tracing::info!(
            user_id = %user,
            order_id = %order.id,
            total_amount = %order.total_amount,
            "Checkout completed"
        );

        Ok(order)
    }
}
