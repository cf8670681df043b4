//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::CheckoutService;
use crate::store::{CartStore, OrderStore, ProductStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// in-memory stores and configuration. The stores themselves also share
/// their backing storage between clones, so every handler sees one
/// process-wide catalog, cart map, and order log.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    products: ProductStore,
    carts: CartStore,
    orders: OrderStore,
    checkout: CheckoutService,
}

impl AppState {
    /// Create a new application state with empty stores.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let products = ProductStore::new();
        let carts = CartStore::new();
        let orders = OrderStore::new();
        let checkout = CheckoutService::new(products.clone(), carts.clone(), orders.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                products,
                carts,
                orders,
                checkout,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the product store.
    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// Get a reference to the checkout service.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutService {
        &self.inner.checkout
    }
}
