//! Reports page: daily sales over a date range, inventory value

use chrono::{NaiveDate, Utc};
use shared::types::DateRange;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::{dom, views};

const SALES: &str = "dailySalesReport";
const VALUE: &str = "inventoryValueReport";

const START_FIELD: &str = "reportStartDate";
const END_FIELD: &str = "reportEndDate";

pub fn load() {
    load_daily_sales();
    load_inventory_value();
}

fn load_daily_sales() {
    let range = selected_range();
    dom::set_html(SALES, &views::loading("Loading daily sales..."));
    spawn_local(async move {
        let client = ApiClient::new();
        match client.daily_sales(range).await {
            Ok(days) => dom::set_html(SALES, &views::render_daily_sales(&days)),
            Err(err) => dom::set_html(SALES, &views::render_error(&err.to_string())),
        }
    });
}

fn load_inventory_value() {
    dom::set_html(VALUE, &views::loading("Loading inventory value..."));
    spawn_local(async {
        let client = ApiClient::new();
        match client.inventory_summary(None, None).await {
            Ok(summaries) => dom::set_html(VALUE, &views::render_inventory_value(&summaries)),
            Err(err) => dom::set_html(VALUE, &views::render_error(&err.to_string())),
        }
    });
}

fn selected_range() -> Option<DateRange> {
    let start: Option<NaiveDate> = dom::input_value(START_FIELD)?.parse().ok();
    let end: Option<NaiveDate> = dom::input_value(END_FIELD)?.parse().ok();
    Some(DateRange {
        start: start?,
        end: end?,
    })
}

/// One-time wiring; seeds the date inputs with today
pub fn wire() {
    let today = Utc::now().date_naive().to_string();
    if dom::input_value(START_FIELD).map(|v| v.is_empty()).unwrap_or(false) {
        dom::set_input_value(START_FIELD, &today);
    }
    if dom::input_value(END_FIELD).map(|v| v.is_empty()).unwrap_or(false) {
        dom::set_input_value(END_FIELD, &today);
    }

    dom::on_submit("reportFilterForm", |event| {
        event.prevent_default();
        load();
    });
}
