//! Report fragments: daily sales and inventory value

use shared::models::{sales_totals, DailySales, InventorySummary};

use super::{escape, info, money};

/// Daily-sales table with a summed total row
pub fn render_daily_sales(days: &[DailySales]) -> String {
    if days.is_empty() {
        return info("No sales recorded for this period.");
    }

    let mut html = String::from(
        "<table class=\"table\"><thead><tr>\
         <th>Date</th><th>Transactions</th><th>Items Sold</th><th>Revenue</th>\
         </tr></thead><tbody>",
    );
    for day in days {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            day.date.format("%b %-d, %Y"),
            day.transaction_count,
            day.total_items,
            money(day.total_revenue),
        ));
    }

    let totals = sales_totals(days);
    html.push_str(&format!(
        "</tbody><tfoot><tr class=\"table-active\"><th>Total</th>\
         <th>{}</th><th>{}</th><th>{}</th></tr></tfoot></table>",
        totals.transaction_count,
        totals.total_items,
        money(totals.total_revenue),
    ));
    html
}

/// Inventory value per store
pub fn render_inventory_value(summaries: &[InventorySummary]) -> String {
    if summaries.is_empty() {
        return info("No inventory data available.");
    }

    let mut html = String::from(
        "<table class=\"table\"><thead><tr>\
         <th>Store</th><th>Products</th><th>Low Stock</th><th>Total Value</th>\
         </tr></thead><tbody>",
    );
    for summary in summaries {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&summary.store_name),
            summary.product_count,
            summary.low_stock_count,
            money(summary.total_value),
        ));
    }
    html.push_str("</tbody></table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_total_row_sums_revenue() {
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
        let html = render_daily_sales(&days);
        assert!(html.contains("\u{20b9}150.50"));
        assert!(html.contains("<th>6</th>"));
        assert!(html.contains("<th>12</th>"));
    }

    #[test]
    fn test_empty_period_message() {
        assert!(render_daily_sales(&[]).contains("No sales recorded"));
    }

    #[test]
    fn test_inventory_value_rows() {
        let summaries = vec![InventorySummary {
            store_id: 1,
            store_name: "Main Bazaar".into(),
            product_count: 40,
            low_stock_count: 2,
            total_value: Decimal::new(9_99900, 2),
        }];
        let html = render_inventory_value(&summaries);
        assert!(html.contains("Main Bazaar"));
        assert!(html.contains("\u{20b9}9999.00"));
    }
}
