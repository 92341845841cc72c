//! Page navigation and session wiring
//!
//! The whole state machine: five mutually exclusive page sections, one
//! visible at a time. Navigating shows a section and re-runs its load
//! routine; everything else the client remembers lives in `session`.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::{dom, pages, session, views};

/// The five pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Products,
    Inventory,
    Movements,
    Reports,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Products,
        Page::Inventory,
        Page::Movements,
        Page::Reports,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Products => "products",
            Page::Inventory => "inventory",
            Page::Movements => "movements",
            Page::Reports => "reports",
        }
    }

    fn section_id(self) -> String {
        format!("{}-page", self.as_str())
    }

    fn nav_id(self) -> String {
        format!("nav-{}", self.as_str())
    }

    /// Re-fetch and re-render the page's containers
    pub fn load(self) {
        match self {
            Page::Dashboard => pages::dashboard::load(),
            Page::Products => pages::products::load(),
            Page::Inventory => pages::inventory::load(),
            Page::Movements => pages::movements::load(),
            Page::Reports => pages::reports::load(),
        }
    }
}

/// Show one page, hide the rest, and refresh its data
pub fn show_page(page: Page) {
    for p in Page::ALL {
        dom::hide(&p.section_id());
        dom::remove_class(&p.nav_id(), "active");
    }
    dom::show(&page.section_id());
    dom::add_class(&page.nav_id(), "active");
    page.load();
}

/// Page whose section is currently visible
pub fn current_page() -> Page {
    Page::ALL
        .into_iter()
        .find(|p| !dom::has_class(&p.section_id(), "d-none"))
        .unwrap_or(Page::Dashboard)
}

/// Re-run the load routine of whichever page is on screen
pub fn refresh_current_page() {
    current_page().load();
}

/// Wire navigation and session controls, restore persisted state, and
/// land on the dashboard
pub fn bootstrap() -> Result<(), JsValue> {
    for page in Page::ALL {
        dom::on_click(&page.nav_id(), move |event| {
            event.prevent_default();
            show_page(page);
        });
    }

    pages::products::wire();
    pages::inventory::wire();
    pages::movements::wire();
    pages::reports::wire();

    dom::on_change(session::STORE_SELECTOR, |_| {
        if let Some(value) = dom::select_value(session::STORE_SELECTOR) {
            session::set(session::STORE_KEY, &value);
        }
        refresh_current_page();
    });

    dom::on_change(session::API_KEY_INPUT, |_| {
        if let Some(value) = dom::input_value(session::API_KEY_INPUT) {
            session::set(session::API_KEY_KEY, &value);
        }
        refresh_current_page();
    });

    // Restore the persisted key; seed the demo key on first run
    match session::get(session::API_KEY_KEY) {
        Some(key) => dom::set_input_value(session::API_KEY_INPUT, &key),
        None => {
            dom::set_input_value(session::API_KEY_INPUT, session::DEFAULT_API_KEY);
            session::set(session::API_KEY_KEY, session::DEFAULT_API_KEY);
        }
    }

    load_store_selector();
    show_page(Page::Dashboard);
    Ok(())
}

/// Populate the store selector from the backend and restore the saved pick
fn load_store_selector() {
    spawn_local(async {
        let client = ApiClient::new();
        match client.list_stores().await {
            Ok(stores) => {
                dom::set_html(session::STORE_SELECTOR, &views::render_store_options(&stores));
                if let Some(saved) = session::get(session::STORE_KEY) {
                    dom::set_select_value(session::STORE_SELECTOR, &saved);
                }
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Failed to load stores: {err}").into());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_names() {
        assert_eq!(Page::Dashboard.as_str(), "dashboard");
        assert_eq!(Page::Reports.as_str(), "reports");
    }

    #[test]
    fn test_section_and_nav_ids() {
        assert_eq!(Page::Products.section_id(), "products-page");
        assert_eq!(Page::Movements.nav_id(), "nav-movements");
    }

    #[test]
    fn test_all_pages_are_distinct() {
        let mut names: Vec<_> = Page::ALL.iter().map(|p| p.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), 5);
    }
}
