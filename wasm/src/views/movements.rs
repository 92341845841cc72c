//! Movement history fragments

use shared::models::StockMovement;

use super::{escape, format_timestamp, info, money_opt};

/// Movement history table
pub fn render_movements(movements: &[StockMovement]) -> String {
    if movements.is_empty() {
        return info("No movements recorded yet.");
    }

    let mut html = String::from(
        "<div class=\"table-responsive\"><table class=\"table\"><thead><tr>\
         <th>Date</th><th>Product</th><th>Type</th><th>Quantity</th>\
         <th>Unit Price</th><th>Value</th><th>Notes</th>\
         </tr></thead><tbody>",
    );
    for movement in movements {
        let name = movement
            .product
            .as_ref()
            .map(|p| escape(&p.name))
            .unwrap_or_else(|| "-".to_string());
        let notes = movement
            .notes
            .as_deref()
            .map(escape)
            .unwrap_or_else(|| "-".to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"movement-{}\">{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            format_timestamp(&movement.timestamp),
            name,
            movement.movement_type.as_str(),
            movement.movement_type.label(),
            movement.quantity,
            money_opt(movement.unit_price),
            money_opt(movement.value()),
            notes,
        ));
    }
    html.push_str("</tbody></table></div>");
    html
}
