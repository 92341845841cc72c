//! Inventory calls

use shared::models::{InventoryItem, InventoryLevel};
use shared::types::LOW_STOCK_THRESHOLD;

use super::{to_query, ApiClient};
use crate::error::ApiResult;
use crate::session;

/// Query filters for listing inventory
#[derive(Debug, Default, Clone)]
pub struct InventoryFilter {
    pub store_id: Option<i64>,
    pub product_id: Option<i64>,
    pub low_stock: bool,
    pub threshold: Option<i64>,
}

impl InventoryFilter {
    /// Build the query pairs, falling back to the given store when the
    /// filter does not name one
    fn pairs(&self, default_store: Option<i64>) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(store_id) = self.store_id.or(default_store) {
            pairs.push(("store_id", store_id.to_string()));
        }
        if let Some(product_id) = self.product_id {
            pairs.push(("product_id", product_id.to_string()));
        }
        if self.low_stock {
            pairs.push(("low_stock", "true".to_string()));
            let threshold = self.threshold.unwrap_or(LOW_STOCK_THRESHOLD);
            pairs.push(("threshold", threshold.to_string()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn list_inventory(&self, filter: &InventoryFilter) -> ApiResult<Vec<InventoryItem>> {
        let query = to_query(&filter.pairs(session::selected_store_id()));
        self.get_json(&format!("/inventory/{query}")).await
    }

    /// Items in the selected store at or below the threshold
    pub async fn low_stock(&self, threshold: Option<i64>) -> ApiResult<Vec<InventoryItem>> {
        let filter = InventoryFilter {
            low_stock: true,
            threshold,
            ..InventoryFilter::default()
        };
        self.list_inventory(&filter).await
    }

    /// Set the stock level of one product; the backend upserts
    pub async fn set_quantity(&self, level: &InventoryLevel) -> ApiResult<InventoryItem> {
        self.post_json("/inventory/", level).await
    }
}
