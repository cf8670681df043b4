//! Core types for Rustmart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod order;
pub mod product;
pub mod status;

pub use cart::CartItem;
pub use id::*;
pub use order::Order;
pub use product::{NewProduct, Product, ProductUpdate};
pub use status::{OrderStatus, ParseOrderStatusError};
