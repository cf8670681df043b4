//! In-memory product catalog store.

use std::sync::Arc;

use tokio::sync::RwLock;

use rustmart_core::{NewProduct, Product, ProductId, ProductUpdate};

/// Insertion-ordered product collection guarded by a read-write lock.
///
/// The catalog is small and process-local, so lookups are linear scans over
/// a `Vec` rather than a keyed map. Clones share the same backing storage.
#[derive(Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    /// Create an empty product store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.clone()
    }

    /// Look up a product by ID.
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.inner.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Insert a new product, assigning it a fresh ID.
    pub async fn create(&self, new: NewProduct) -> Product {
        let product = Product {
            id: ProductId::generate(),
            name: new.name,
            description: new.description,
            price: new.price,
            stock: new.stock,
        };
        self.inner.write().await.push(product.clone());
        product
    }

    /// Apply a partial update to a product in place.
    ///
    /// Returns the updated product, or `None` if no product has that ID.
    pub async fn update(&self, id: ProductId, update: ProductUpdate) -> Option<Product> {
        let mut products = self.inner.write().await;
        let product = products.iter_mut().find(|p| p.id == id)?;
        product.apply(update);
        Some(product.clone())
    }

    /// Remove a product. Returns whether a product was removed.
    ///
    /// Carts and orders referencing the product are not touched; their
    /// lines keep the now-dangling ID.
    pub async fn delete(&self, id: ProductId) -> bool {
        let mut products = self.inner.write().await;
        let Some(index) = products.iter().position(|p| p.id == id) else {
            return false;
        };
        products.remove(index);
        true
    }
}
