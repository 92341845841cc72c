//! Inventory page: per-store stock table and quantity updates

use shared::types::LOW_STOCK_THRESHOLD;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, InventoryFilter};
use crate::forms::QuantityForm;
use crate::{dom, session, views};

const LIST: &str = "inventoryList";
const MODAL: &str = "quantityModal";

const PRODUCT_FIELD: &str = "quantityProductId";
const QUANTITY_FIELD: &str = "quantityInput";

pub fn load() {
    dom::set_html(LIST, &views::loading("Loading inventory..."));
    spawn_local(async {
        let client = ApiClient::new();
        match client.list_inventory(&InventoryFilter::default()).await {
            Ok(items) => {
                dom::set_html(LIST, &views::render_inventory(&items, LOW_STOCK_THRESHOLD));
                wire_update_buttons();
            }
            Err(err) => dom::set_html(LIST, &views::render_error(&err.to_string())),
        }
    });
}

/// One-time wiring of the quantity modal
pub fn wire() {
    dom::on_click("quantityModalClose", |_| dom::hide(MODAL));

    dom::on_submit("quantityForm", |event| {
        event.prevent_default();
        save();
    });
}

fn wire_update_buttons() {
    dom::for_each(".update-qty", |el| {
        let Some(product_id) = el.get_attribute("data-product-id") else {
            return;
        };
        let quantity = el.get_attribute("data-quantity").unwrap_or_default();
        dom::on_click_el(&el, move |_| {
            dom::set_input_value(PRODUCT_FIELD, &product_id);
            dom::set_input_value(QUANTITY_FIELD, &quantity);
            dom::show(MODAL);
        });
    });
}

fn save() {
    let Some(store_id) = session::selected_store_id() else {
        dom::alert("Select a store first.");
        return;
    };

    let form = QuantityForm {
        store_id: store_id.to_string(),
        product_id: dom::input_value(PRODUCT_FIELD).unwrap_or_default(),
        quantity: dom::input_value(QUANTITY_FIELD).unwrap_or_default(),
    };

    let level = match form.into_level() {
        Ok(level) => level,
        Err(message) => {
            dom::alert(message);
            return;
        }
    };

    spawn_local(async move {
        let client = ApiClient::new();
        match client.set_quantity(&level).await {
            Ok(_) => {
                dom::hide(MODAL);
                load();
            }
            Err(err) => dom::alert(&err.to_string()),
        }
    });
}
