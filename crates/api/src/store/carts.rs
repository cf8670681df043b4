//! In-memory per-user cart store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use rustmart_core::{CartItem, ProductId, UserId};

/// Per-user carts keyed by user identity.
///
/// An absent entry and an empty cart are indistinguishable to callers:
/// `get` returns an empty list for both, and `clear` removes the entry
/// outright rather than leaving an empty one behind.
#[derive(Clone, Default)]
pub struct CartStore {
    inner: Arc<RwLock<HashMap<UserId, Vec<CartItem>>>>,
}

impl CartStore {
    /// Create an empty cart store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's cart items, empty if the user has no cart.
    pub async fn get(&self, user: &UserId) -> Vec<CartItem> {
        self.inner
            .read()
            .await
            .get(user)
            .cloned()
            .unwrap_or_default()
    }

    /// Add a quantity of a product to the user's cart and return the
    /// updated cart.
    ///
    /// If the product is already in the cart, the existing line's quantity
    /// is incremented; no cart ever holds two lines for the same product.
    /// The cart entry is created on first add.
    pub async fn add_item(
        &self,
        user: &UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Vec<CartItem> {
        let mut carts = self.inner.write().await;
        let cart = carts.entry(user.clone()).or_default();

        match cart.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity += quantity,
            None => cart.push(CartItem {
                product_id,
                quantity,
            }),
        }

        cart.clone()
    }

    /// Remove the user's cart entry entirely.
    ///
    /// Clearing an absent cart is a silent no-op.
    pub async fn clear(&self, user: &UserId) {
        self.inner.write().await.remove(user);
    }
}
