//! Reporting models
//!
//! All report computation happens on the backend; the client only sums
//! the daily rows into a total line for display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inventory summary for one store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySummary {
    pub store_id: i64,
    pub store_name: String,
    pub product_count: i64,
    pub low_stock_count: i64,
    pub total_value: Decimal,
}

/// Sales aggregated over one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub transaction_count: i64,
    pub total_items: i64,
    pub total_revenue: Decimal,
}

/// Column totals over a daily-sales report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalesTotals {
    pub transaction_count: i64,
    pub total_items: i64,
    pub total_revenue: Decimal,
}

/// Sum the rows of a daily-sales report for the total line
pub fn sales_totals(days: &[DailySales]) -> SalesTotals {
    days.iter().fold(SalesTotals::default(), |acc, day| SalesTotals {
        transaction_count: acc.transaction_count + day.transaction_count,
        total_items: acc.total_items + day.total_items,
        total_revenue: acc.total_revenue + day.total_revenue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_sales_wire_format() {
        let json = r#"[
            {"date": "2025-03-04", "transaction_count": 4, "total_items": 9, "total_revenue": 100.0},
            {"date": "2025-03-05", "transaction_count": 2, "total_items": 3, "total_revenue": 50.5}
        ]"#;
        let days: Vec<DailySales> = serde_json::from_str(json).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
    }

    #[test]
    fn test_sales_totals_sum_every_column() {
        let days = vec![
            DailySales {
                date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
                transaction_count: 4,
                total_items: 9,
                total_revenue: Decimal::new(1000, 1),
            },
            DailySales {
                date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
                transaction_count: 2,
                total_items: 3,
                total_revenue: Decimal::new(505, 1),
            },
        ];

        let totals = sales_totals(&days);
        assert_eq!(totals.transaction_count, 6);
        assert_eq!(totals.total_items, 12);
        assert_eq!(totals.total_revenue, Decimal::new(1505, 1));
    }

    #[test]
    fn test_sales_totals_empty_report() {
        assert_eq!(sales_totals(&[]), SalesTotals::default());
    }
}
