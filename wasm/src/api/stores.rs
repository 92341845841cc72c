//! Store calls

use shared::models::{NewStore, Store};

use super::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    pub async fn list_stores(&self) -> ApiResult<Vec<Store>> {
        self.get_json("/stores/").await
    }

    pub async fn get_store(&self, id: i64) -> ApiResult<Store> {
        self.get_json(&format!("/stores/{id}")).await
    }

    pub async fn create_store(&self, input: &NewStore) -> ApiResult<Store> {
        self.post_json("/stores/", input).await
    }
}
