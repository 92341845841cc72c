//! HTTP client for the Kiryana Inventory REST API
//!
//! Wraps browser `fetch` with the headers, credential mode, and status
//! classification every call shares. Resource-specific calls live in the
//! submodules; each issues exactly one request, resolves once, and never
//! retries.

mod inventory;
mod movements;
mod products;
mod reports;
mod stores;

pub use inventory::InventoryFilter;
pub use movements::MovementFilter;
pub use products::ProductFilter;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::error::{ApiError, ApiResult};
use crate::session;

/// Backend origin the client is deployed against
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Shown when a non-2xx body carries no `detail` message
const GENERIC_ERROR: &str = "An error occurred";

/// Client for the inventory backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client against a custom origin (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> ApiResult<T> {
        self.request("GET", path_and_query, None).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let payload =
            serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request("POST", path, Some(payload)).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let payload =
            serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request("PUT", path, Some(payload)).await
    }

    /// Issue one request and classify the response
    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path_and_query: &str,
        body: Option<String>,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_credentials(RequestCredentials::Include);
        if let Some(payload) = &body {
            opts.set_body(&JsValue::from_str(payload));
        }

        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let headers = request.headers();
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        headers
            .set("X-API-Key", &session::api_key())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;

        let status = resp.status();
        if status == 401 {
            // A rejected key is never valid again; force re-entry
            session::clear_api_key();
        }

        let reset = resp.headers().get("X-RateLimit-Reset").ok().flatten();
        let text = read_body(&resp).await;

        if !(200..300).contains(&status) {
            let err = classify_failure(status, backend_detail(&text), reset);
            web_sys::console::error_1(&format!("API error: {err}").into());
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn read_body(resp: &Response) -> String {
    let Ok(promise) = resp.text() else {
        return String::new();
    };
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// Extract the backend's `detail` message from an error body
fn backend_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(|s| s.to_string())
}

/// Map a non-2xx status to the error shown to the user
fn classify_failure(status: u16, detail: Option<String>, reset: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        429 => ApiError::RateLimited {
            reset: reset.unwrap_or_else(|| "a few".to_string()),
        },
        _ => ApiError::Backend(detail.unwrap_or_else(|| GENERIC_ERROR.to_string())),
    }
}

/// Assemble a query string from key/value pairs
///
/// Values are percent-encoded; an empty pair list yields an empty string
/// so callers can always append the result to a path.
pub(crate) fn to_query(pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Status classification
    // ========================================================================

    #[test]
    fn test_classify_401_as_auth_failure() {
        let err = classify_failure(401, Some("Invalid API Key".into()), None);
        assert_eq!(err, ApiError::Unauthorized);
        assert!(err.to_string().contains("Session expired"));
    }

    #[test]
    fn test_classify_429_includes_reset_header() {
        let err = classify_failure(429, None, Some("1741180800".into()));
        assert!(err.to_string().contains("1741180800"));
    }

    #[test]
    fn test_classify_other_uses_backend_detail() {
        let err = classify_failure(400, Some("Not enough stock".into()), None);
        assert_eq!(err, ApiError::Backend("Not enough stock".into()));
    }

    #[test]
    fn test_classify_other_falls_back_to_generic() {
        let err = classify_failure(500, None, None);
        assert_eq!(err, ApiError::Backend(GENERIC_ERROR.into()));
    }

    #[test]
    fn test_backend_detail_extraction() {
        assert_eq!(
            backend_detail(r#"{"detail": "Store not found"}"#),
            Some("Store not found".into())
        );
        assert_eq!(backend_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(backend_detail("<html>502</html>"), None);
    }

    // ========================================================================
    // Query assembly
    // ========================================================================

    #[test]
    fn test_to_query_joins_pairs() {
        let query = to_query(&[("store_id", "1".into()), ("low_stock", "true".into())]);
        assert_eq!(query, "?store_id=1&low_stock=true");
    }

    #[test]
    fn test_to_query_empty() {
        assert_eq!(to_query(&[]), "");
    }

    #[test]
    fn test_to_query_encodes_values() {
        let query = to_query(&[("search", "atta 5kg".into())]);
        assert_eq!(query, "?search=atta%205kg");
    }
}
