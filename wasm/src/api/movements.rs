//! Stock movement calls

use shared::models::{MovementType, NewStockMovement, StockMovement};
use shared::types::DateRange;

use super::{to_query, ApiClient};
use crate::error::ApiResult;
use crate::session;

/// Query filters for listing movements
#[derive(Debug, Default, Clone)]
pub struct MovementFilter {
    pub store_id: Option<i64>,
    pub product_id: Option<i64>,
    pub movement_type: Option<MovementType>,
    pub range: Option<DateRange>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl MovementFilter {
    pub fn recent(limit: i64) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    fn pairs(&self, default_store: Option<i64>) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(store_id) = self.store_id.or(default_store) {
            pairs.push(("store_id", store_id.to_string()));
        }
        if let Some(product_id) = self.product_id {
            pairs.push(("product_id", product_id.to_string()));
        }
        if let Some(movement_type) = self.movement_type {
            pairs.push(("movement_type", movement_type.as_str().to_string()));
        }
        if let Some(range) = self.range {
            pairs.push(("start_date", range.start.to_string()));
            pairs.push(("end_date", range.end.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn list_movements(&self, filter: &MovementFilter) -> ApiResult<Vec<StockMovement>> {
        let query = to_query(&filter.pairs(session::selected_store_id()));
        self.get_json(&format!("/movements/{query}")).await
    }

    /// Record one movement; the backend adjusts the stock level itself
    pub async fn create_movement(&self, input: &NewStockMovement) -> ApiResult<StockMovement> {
        self.post_json("/movements/", input).await
    }
}
