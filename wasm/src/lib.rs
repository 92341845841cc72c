//! WebAssembly browser client for the Kiryana Inventory system
//!
//! A thin presentation layer over the inventory REST backend: renders the
//! dashboard, product catalog, per-store stock levels, movement history,
//! and reports from JSON, and forwards form submissions back as HTTP
//! calls. All state beyond the DOM lives on the backend; the client only
//! persists the selected store and the API key.

pub mod api;
pub mod app;
pub mod dom;
pub mod error;
pub mod forms;
pub mod pages;
pub mod session;
pub mod views;

pub use api::ApiClient;
pub use error::{ApiError, ApiResult};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module and mount the application
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    app::bootstrap()
}
