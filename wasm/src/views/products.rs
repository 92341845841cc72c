//! Product catalog fragments

use shared::models::Product;

use super::{escape, info, money_opt};

/// Product table; an empty catalog gets a hint instead of a bare table
pub fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return info("No products found. Add your first product to get started.");
    }

    let mut html = String::from(
        "<div class=\"table-responsive\"><table class=\"table\"><thead><tr>\
         <th>Code</th><th>Name</th><th>Category</th>\
         <th>Purchase Price</th><th>Selling Price</th><th></th>\
         </tr></thead><tbody>",
    );
    for product in products {
        html.push_str(&format!(
            concat!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
                "<td><button class=\"btn btn-sm btn-outline-primary edit-product\" ",
                "data-id=\"{}\">Edit</button></td></tr>"
            ),
            product
                .code
                .as_deref()
                .map(escape)
                .unwrap_or_else(|| "-".to_string()),
            escape(&product.name),
            product
                .category
                .as_deref()
                .map(escape)
                .unwrap_or_else(|| "-".to_string()),
            money_opt(product.purchase_price),
            money_opt(product.selling_price),
            product.id,
        ));
    }
    html.push_str("</tbody></table></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn product(name: &str) -> Product {
        Product {
            id: 7,
            name: name.into(),
            code: Some("SKU-7".into()),
            category: Some("Grains".into()),
            purchase_price: Some(Decimal::new(4000, 2)),
            selling_price: Some(Decimal::new(4850, 2)),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_empty_catalog_message() {
        let html = render_products(&[]);
        assert!(html.contains("No products found"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_rows_and_edit_buttons() {
        let html = render_products(&[product("Basmati Rice 5kg")]);
        assert!(html.contains("Basmati Rice 5kg"));
        assert!(html.contains("data-id=\"7\""));
        assert!(html.contains("\u{20b9}48.50"));
    }

    #[test]
    fn test_names_are_escaped() {
        let html = render_products(&[product("<b>bold</b>")]);
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}
