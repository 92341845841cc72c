//! Movements page: history with filters, record-movement modal

use chrono::NaiveDate;
use shared::models::MovementType;
use shared::types::DateRange;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, MovementFilter, ProductFilter};
use crate::forms::MovementForm;
use crate::{dom, session, views};

const LIST: &str = "movementsList";
const MODAL: &str = "movementModal";

const TYPE_FILTER: &str = "movementTypeFilter";
const START_FILTER: &str = "movementStartDate";
const END_FILTER: &str = "movementEndDate";

const PRODUCT_SELECT: &str = "movementProduct";
const TYPE_FIELD: &str = "movementType";
const QUANTITY_FIELD: &str = "movementQuantity";
const PRICE_FIELD: &str = "movementUnitPrice";
const NOTES_FIELD: &str = "movementNotes";

pub fn load() {
    let filter = current_filter();
    dom::set_html(LIST, &views::loading("Loading movements..."));
    spawn_local(async move {
        let client = ApiClient::new();
        match client.list_movements(&filter).await {
            Ok(movements) => dom::set_html(LIST, &views::render_movements(&movements)),
            Err(err) => dom::set_html(LIST, &views::render_error(&err.to_string())),
        }
    });
}

/// Read the filter controls; unparsable values fall back to no filter
fn current_filter() -> MovementFilter {
    let movement_type = dom::select_value(TYPE_FILTER)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<MovementType>().ok());

    let start = date_input(START_FILTER);
    let end = date_input(END_FILTER);
    let range = match (start, end) {
        (Some(start), Some(end)) => Some(DateRange { start, end }),
        _ => None,
    };

    MovementFilter {
        movement_type,
        range,
        ..MovementFilter::default()
    }
}

fn date_input(id: &str) -> Option<NaiveDate> {
    dom::input_value(id)?.parse().ok()
}

/// One-time wiring of the filters and the record-movement modal
pub fn wire() {
    dom::on_submit("movementFilterForm", |event| {
        event.prevent_default();
        load();
    });

    dom::on_click("recordMovementBtn", |_| open_record_modal());

    dom::on_click("movementModalClose", |_| dom::hide(MODAL));

    dom::on_submit("movementForm", |event| {
        event.prevent_default();
        save();
    });
}

/// Fill the product selector from the catalog, then show the modal
fn open_record_modal() {
    spawn_local(async {
        let client = ApiClient::new();
        match client.list_products(&ProductFilter::default()).await {
            Ok(products) => {
                let mut options = String::new();
                for product in &products {
                    options.push_str(&format!(
                        "<option value=\"{}\">{}</option>",
                        product.id,
                        views::escape(&product.name)
                    ));
                }
                dom::set_html(PRODUCT_SELECT, &options);
                dom::set_input_value(QUANTITY_FIELD, "");
                dom::set_input_value(PRICE_FIELD, "");
                dom::set_textarea_value(NOTES_FIELD, "");
                dom::show(MODAL);
            }
            Err(err) => dom::alert(&err.to_string()),
        }
    });
}

fn save() {
    let Some(store_id) = session::selected_store_id() else {
        dom::alert("Select a store first.");
        return;
    };

    let form = MovementForm {
        store_id: store_id.to_string(),
        product_id: dom::select_value(PRODUCT_SELECT).unwrap_or_default(),
        movement_type: dom::select_value(TYPE_FIELD).unwrap_or_default(),
        quantity: dom::input_value(QUANTITY_FIELD).unwrap_or_default(),
        unit_price: dom::input_value(PRICE_FIELD).unwrap_or_default(),
        notes: dom::textarea_value(NOTES_FIELD).unwrap_or_default(),
    };

    let movement = match form.into_movement() {
        Ok(movement) => movement,
        Err(message) => {
            dom::alert(message);
            return;
        }
    };

    spawn_local(async move {
        let client = ApiClient::new();
        match client.create_movement(&movement).await {
            Ok(_) => {
                dom::hide(MODAL);
                load();
            }
            Err(err) => dom::alert(&err.to_string()),
        }
    });
}
