//! HTML fragment rendering
//!
//! Pure functions from backend data to HTML strings. Kept free of DOM
//! calls so every fragment can be exercised in host tests; the page
//! controllers inject the results with `dom::set_html`.

mod dashboard;
mod inventory;
mod movements;
mod products;
mod reports;

pub use dashboard::*;
pub use inventory::*;
pub use movements::*;
pub use products::*;
pub use reports::*;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use shared::models::Store;

/// Escape text interpolated into HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Placeholder shown while a page section is being fetched
pub fn loading(message: &str) -> String {
    format!(
        "<div class=\"loading-placeholder\">{}</div>",
        escape(message)
    )
}

/// Inline error panel for a failed page load
pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"alert alert-danger\">Error: {}</div>",
        escape(message)
    )
}

/// Informational panel for empty result sets
pub fn info(message: &str) -> String {
    format!("<div class=\"alert alert-info\">{}</div>", escape(message))
}

/// Options for the header store selector
pub fn render_store_options(stores: &[Store]) -> String {
    let mut html = String::new();
    for store in stores {
        html.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            store.id,
            escape(&store.name)
        ));
    }
    html
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Rupee amount with two decimals
pub fn money(value: Decimal) -> String {
    format!("\u{20b9}{:.2}", value)
}

pub fn money_opt(value: Option<Decimal>) -> String {
    value.map(money).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(
            escape("<script>\"a\" & 'b'</script>"),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;"
        );
        assert_eq!(escape("Atta 5kg"), "Atta 5kg");
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(Decimal::new(1505, 1)), "\u{20b9}150.50");
        assert_eq!(money_opt(None), "-");
    }

    #[test]
    fn test_store_options() {
        let stores = vec![Store {
            id: 3,
            name: "Main Bazaar".into(),
            code: "MB".into(),
            address: None,
            phone: None,
            created_at: chrono::NaiveDateTime::default(),
        }];
        assert_eq!(
            render_store_options(&stores),
            "<option value=\"3\">Main Bazaar</option>"
        );
    }

    #[test]
    fn test_timestamp_formatting() {
        let ts: NaiveDateTime = "2025-03-05T10:15:00".parse().unwrap();
        assert_eq!(format_timestamp(&ts), "Mar 5, 2025");
    }
}
