//! Dashboard fragments: summary cards, low-stock alert, recent movements

use shared::models::{InventoryItem, InventorySummary, StockMovement};

use super::{escape, format_timestamp, info, money, money_opt};

/// Stat cards for the selected store's inventory summary
pub fn render_summary(summary: Option<&InventorySummary>) -> String {
    let Some(summary) = summary else {
        return info("No inventory data available.");
    };

    format!(
        concat!(
            "<div class=\"row\">",
            "<div class=\"col-md-6\"><div class=\"stat-card primary\">",
            "<h5>Total Products</h5><p>{}</p></div></div>",
            "<div class=\"col-md-6\"><div class=\"stat-card danger\">",
            "<h5>Low Stock Items</h5><p>{}</p></div></div>",
            "</div>",
            "<div class=\"row\"><div class=\"col-md-12\">",
            "<div class=\"stat-card success\">",
            "<h5>Total Inventory Value</h5><p>{}</p></div></div></div>"
        ),
        summary.product_count,
        summary.low_stock_count,
        money(summary.total_value)
    )
}

/// Low-stock table; links to the inventory page once it fills up
pub fn render_low_stock(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "<div class=\"alert alert-success\">No low stock items!</div>".to_string();
    }

    let mut html = String::from(
        "<table class=\"table table-sm\"><thead><tr>\
         <th>Product</th><th>Quantity</th></tr></thead><tbody>",
    );
    for item in items {
        let name = item
            .product
            .as_ref()
            .map(|p| escape(&p.name))
            .unwrap_or_else(|| "-".to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"status-low\">{}</td></tr>",
            name, item.current_quantity
        ));
    }
    html.push_str("</tbody></table>");

    if items.len() >= 5 {
        html.push_str(
            "<button id=\"lowStockViewAll\" class=\"btn btn-sm btn-outline-danger\">\
             View All Low Stock Items</button>",
        );
    }
    html
}

/// Recent movement table for the dashboard
pub fn render_recent_movements(movements: &[StockMovement]) -> String {
    if movements.is_empty() {
        return info("No recent transactions.");
    }

    let mut html = String::from(
        "<div class=\"table-responsive\"><table class=\"table table-sm\"><thead><tr>\
         <th>Date</th><th>Product</th><th>Type</th><th>Quantity</th><th>Value</th>\
         </tr></thead><tbody>",
    );
    for movement in movements {
        let name = movement
            .product
            .as_ref()
            .map(|p| escape(&p.name))
            .unwrap_or_else(|| "-".to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"movement-{}\">{}</td><td>{}</td><td>{}</td></tr>",
            format_timestamp(&movement.timestamp),
            name,
            movement.movement_type.as_str(),
            movement.movement_type.label(),
            movement.quantity,
            money_opt(movement.value()),
        ));
    }
    html.push_str("</tbody></table></div>");
    html
}
