//! In-memory stores for products, carts, and orders.
//!
//! All state is volatile and process-lifetime only. Each store owns its
//! collection behind an async read-write lock and hands out clones of the
//! records it holds; nothing escapes by reference. Operations that span
//! more than one store (checkout) are coordinated one level up, in
//! `services`.

pub mod carts;
pub mod orders;
pub mod products;

pub use carts::CartStore;
pub use orders::OrderStore;
pub use products::ProductStore;
