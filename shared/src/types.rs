//! Common types used across the client

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inventory at or below this quantity counts as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Date range for movement and report queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
