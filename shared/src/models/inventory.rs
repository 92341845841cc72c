//! Per-store inventory models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Product;

/// Stock level of one product in one store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub store_id: i64,
    pub product_id: i64,
    pub current_quantity: i64,
    pub updated_at: NaiveDateTime,
    /// Embedded by the backend when listing inventory
    pub product: Option<Product>,
}

impl InventoryItem {
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.current_quantity <= threshold
    }
}

/// Input for setting the stock level of a product in a store
///
/// The backend upserts: an existing record is overwritten, a missing one
/// is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLevel {
    pub store_id: i64,
    pub product_id: i64,
    pub current_quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LOW_STOCK_THRESHOLD;

    fn item(quantity: i64) -> InventoryItem {
        InventoryItem {
            id: 1,
            store_id: 1,
            product_id: 7,
            current_quantity: quantity,
            updated_at: chrono::NaiveDateTime::default(),
            product: None,
        }
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(item(0).is_low_stock(LOW_STOCK_THRESHOLD));
        assert!(item(5).is_low_stock(LOW_STOCK_THRESHOLD));
        assert!(!item(6).is_low_stock(LOW_STOCK_THRESHOLD));
    }
}
