//! Dashboard page: summary cards, low-stock alert, recent movements

use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, MovementFilter};
use crate::app::{self, Page};
use crate::{dom, views};

const SUMMARY: &str = "inventorySummary";
const LOW_STOCK: &str = "lowStockAlert";
const RECENT: &str = "recentTransactions";

const RECENT_LIMIT: i64 = 10;

pub fn load() {
    load_summary();
    load_low_stock();
    load_recent();
}

fn load_summary() {
    dom::set_html(SUMMARY, &views::loading("Loading inventory summary..."));
    spawn_local(async {
        let client = ApiClient::new();
        match client.inventory_summary(None, None).await {
            Ok(summaries) => {
                dom::set_html(SUMMARY, &views::render_summary(summaries.first()));
            }
            Err(err) => dom::set_html(SUMMARY, &views::render_error(&err.to_string())),
        }
    });
}

fn load_low_stock() {
    dom::set_html(LOW_STOCK, &views::loading("Loading low stock items..."));
    spawn_local(async {
        let client = ApiClient::new();
        match client.low_stock(None).await {
            Ok(items) => {
                dom::set_html(LOW_STOCK, &views::render_low_stock(&items));
                // Rendered only once the list reaches five entries
                dom::on_click("lowStockViewAll", |_| app::show_page(Page::Inventory));
            }
            Err(err) => dom::set_html(LOW_STOCK, &views::render_error(&err.to_string())),
        }
    });
}

fn load_recent() {
    dom::set_html(RECENT, &views::loading("Loading recent transactions..."));
    spawn_local(async {
        let client = ApiClient::new();
        match client.list_movements(&MovementFilter::recent(RECENT_LIMIT)).await {
            Ok(movements) => {
                dom::set_html(RECENT, &views::render_recent_movements(&movements));
            }
            Err(err) => dom::set_html(RECENT, &views::render_error(&err.to_string())),
        }
    });
}
