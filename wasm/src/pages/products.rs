//! Product catalog page: listing, search, add/edit modal

use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, ProductFilter};
use crate::forms::ProductForm;
use crate::{dom, views};

const LIST: &str = "productsList";
const MODAL: &str = "productModal";

const SEARCH_INPUT: &str = "productSearchInput";
const ID_FIELD: &str = "productId";
const NAME_FIELD: &str = "productName";
const CODE_FIELD: &str = "productCode";
const CATEGORY_FIELD: &str = "productCategory";
const PURCHASE_FIELD: &str = "productPurchasePrice";
const SELLING_FIELD: &str = "productSellingPrice";

pub fn load() {
    let filter = match dom::input_value(SEARCH_INPUT).filter(|v| !v.trim().is_empty()) {
        Some(term) => ProductFilter::search(term.trim().to_string()),
        None => ProductFilter::default(),
    };

    dom::set_html(LIST, &views::loading("Loading products..."));
    spawn_local(async move {
        let client = ApiClient::new();
        match client.list_products(&filter).await {
            Ok(products) => {
                dom::set_html(LIST, &views::render_products(&products));
                wire_edit_buttons();
            }
            Err(err) => dom::set_html(LIST, &views::render_error(&err.to_string())),
        }
    });
}

/// One-time wiring of the page's forms and buttons
pub fn wire() {
    dom::on_submit("productSearchForm", |event| {
        event.prevent_default();
        load();
    });

    dom::on_click("addProductBtn", |_| {
        clear_form();
        dom::show(MODAL);
    });

    dom::on_click("productModalClose", |_| dom::hide(MODAL));

    dom::on_submit("productForm", |event| {
        event.prevent_default();
        save();
    });
}

fn wire_edit_buttons() {
    dom::for_each(".edit-product", |el| {
        let Some(id) = el
            .get_attribute("data-id")
            .and_then(|v| v.parse::<i64>().ok())
        else {
            return;
        };
        dom::on_click_el(&el, move |_| open_edit(id));
    });
}

/// Pre-fill the modal from the backend's view of the product
fn open_edit(id: i64) {
    spawn_local(async move {
        let client = ApiClient::new();
        match client.get_product(id).await {
            Ok(product) => {
                dom::set_input_value(ID_FIELD, &product.id.to_string());
                dom::set_input_value(NAME_FIELD, &product.name);
                dom::set_input_value(CODE_FIELD, product.code.as_deref().unwrap_or(""));
                dom::set_input_value(CATEGORY_FIELD, product.category.as_deref().unwrap_or(""));
                dom::set_input_value(
                    PURCHASE_FIELD,
                    &product
                        .purchase_price
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                );
                dom::set_input_value(
                    SELLING_FIELD,
                    &product
                        .selling_price
                        .map(|p| p.to_string())
                        .unwrap_or_default(),
                );
                dom::show(MODAL);
            }
            Err(err) => dom::alert(&err.to_string()),
        }
    });
}

fn clear_form() {
    for field in [
        ID_FIELD,
        NAME_FIELD,
        CODE_FIELD,
        CATEGORY_FIELD,
        PURCHASE_FIELD,
        SELLING_FIELD,
    ] {
        dom::set_input_value(field, "");
    }
}

fn save() {
    let form = ProductForm {
        name: dom::input_value(NAME_FIELD).unwrap_or_default(),
        code: dom::input_value(CODE_FIELD).unwrap_or_default(),
        category: dom::input_value(CATEGORY_FIELD).unwrap_or_default(),
        purchase_price: dom::input_value(PURCHASE_FIELD).unwrap_or_default(),
        selling_price: dom::input_value(SELLING_FIELD).unwrap_or_default(),
    };
    let editing: Option<i64> = dom::input_value(ID_FIELD).and_then(|v| v.parse().ok());

    let input = match form.into_product() {
        Ok(input) => input,
        Err(message) => {
            dom::alert(message);
            return;
        }
    };

    spawn_local(async move {
        let client = ApiClient::new();
        let result = match editing {
            Some(id) => client.update_product(id, &input).await,
            None => client.create_product(&input).await,
        };
        match result {
            Ok(_) => {
                dom::hide(MODAL);
                load();
            }
            Err(err) => dom::alert(&err.to_string()),
        }
    });
}
