//! Reporting calls

use shared::models::{DailySales, InventorySummary};
use shared::types::DateRange;

use super::{to_query, ApiClient};
use crate::error::ApiResult;
use crate::session;

impl ApiClient {
    /// Inventory summaries; one entry per store, or just the named one
    pub async fn inventory_summary(
        &self,
        store_id: Option<i64>,
        low_stock_threshold: Option<i64>,
    ) -> ApiResult<Vec<InventorySummary>> {
        let mut pairs = Vec::new();
        if let Some(store_id) = store_id.or_else(session::selected_store_id) {
            pairs.push(("store_id", store_id.to_string()));
        }
        if let Some(threshold) = low_stock_threshold {
            pairs.push(("low_stock_threshold", threshold.to_string()));
        }
        let query = to_query(&pairs);
        self.get_json(&format!("/reports/inventory-summary{query}"))
            .await
    }

    /// Daily sales for the selected store over a date range
    pub async fn daily_sales(&self, range: Option<DateRange>) -> ApiResult<Vec<DailySales>> {
        let mut pairs = Vec::new();
        if let Some(store_id) = session::selected_store_id() {
            pairs.push(("store_id", store_id.to_string()));
        }
        if let Some(range) = range {
            pairs.push(("start_date", range.start.to_string()));
            pairs.push(("end_date", range.end.to_string()));
        }
        let query = to_query(&pairs);
        self.get_json(&format!("/reports/daily-sales{query}")).await
    }
}
