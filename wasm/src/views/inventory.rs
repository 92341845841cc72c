//! Per-store inventory fragments

use shared::models::InventoryItem;

use super::{escape, format_timestamp, info};

/// Stock table for the selected store, low rows highlighted
pub fn render_inventory(items: &[InventoryItem], threshold: i64) -> String {
    if items.is_empty() {
        return info("No inventory records for this store yet.");
    }

    let mut html = String::from(
        "<div class=\"table-responsive\"><table class=\"table\"><thead><tr>\
         <th>Product</th><th>Code</th><th>Quantity</th><th>Updated</th><th></th>\
         </tr></thead><tbody>",
    );
    for item in items {
        let (name, code) = match &item.product {
            Some(product) => (
                escape(&product.name),
                product
                    .code
                    .as_deref()
                    .map(escape)
                    .unwrap_or_else(|| "-".to_string()),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        let quantity_class = if item.is_low_stock(threshold) {
            " class=\"status-low\""
        } else {
            ""
        };
        html.push_str(&format!(
            concat!(
                "<tr><td>{}</td><td>{}</td><td{}>{}</td><td>{}</td>",
                "<td><button class=\"btn btn-sm btn-outline-primary update-qty\" ",
                "data-product-id=\"{}\" data-quantity=\"{}\">Update</button></td></tr>"
            ),
            name,
            code,
            quantity_class,
            item.current_quantity,
            format_timestamp(&item.updated_at),
            item.product_id,
            item.current_quantity,
        ));
    }
    html.push_str("</tbody></table></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use shared::models::Product;
    use shared::types::LOW_STOCK_THRESHOLD;

    fn item(quantity: i64) -> InventoryItem {
        InventoryItem {
            id: 1,
            store_id: 1,
            product_id: 9,
            current_quantity: quantity,
            updated_at: NaiveDateTime::default(),
            product: Some(Product {
                id: 9,
                name: "Toor Dal 1kg".into(),
                code: Some("DAL-1".into()),
                category: None,
                purchase_price: None,
                selling_price: None,
                created_at: NaiveDateTime::default(),
            }),
        }
    }

    #[test]
    fn test_empty_inventory_message() {
        assert!(render_inventory(&[], LOW_STOCK_THRESHOLD).contains("No inventory records"));
    }

    #[test]
    fn test_low_rows_are_highlighted() {
        let html = render_inventory(&[item(2)], LOW_STOCK_THRESHOLD);
        assert!(html.contains("status-low"));

        let html = render_inventory(&[item(20)], LOW_STOCK_THRESHOLD);
        assert!(!html.contains("status-low"));
    }

    #[test]
    fn test_update_button_carries_row_data() {
        let html = render_inventory(&[item(7)], LOW_STOCK_THRESHOLD);
        assert!(html.contains("data-product-id=\"9\""));
        assert!(html.contains("data-quantity=\"7\""));
    }
}
