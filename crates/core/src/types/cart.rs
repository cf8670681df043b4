//! Cart line items.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One line of a user's cart: a product reference and a quantity.
///
/// A cart never holds two lines for the same product; adding a product that
/// is already present increments the existing line's quantity instead. The
/// product reference is checked when the line is added but not afterwards,
/// so a line may outlive the product it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}
