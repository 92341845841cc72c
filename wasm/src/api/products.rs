//! Product catalog calls

use shared::models::{NewProduct, Product};

use super::{to_query, ApiClient};
use crate::error::ApiResult;

/// Query filters for listing products
#[derive(Debug, Default, Clone)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ProductFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn list_products(&self, filter: &ProductFilter) -> ApiResult<Vec<Product>> {
        let query = to_query(&filter.pairs());
        self.get_json(&format!("/products/{query}")).await
    }

    pub async fn get_product(&self, id: i64) -> ApiResult<Product> {
        self.get_json(&format!("/products/{id}")).await
    }

    pub async fn create_product(&self, input: &NewProduct) -> ApiResult<Product> {
        self.post_json("/products/", input).await
    }

    /// Save changes to an existing product
    pub async fn update_product(&self, id: i64, input: &NewProduct) -> ApiResult<Product> {
        self.put_json(&format!("/products/{id}"), input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_pairs() {
        assert!(ProductFilter::default().pairs().is_empty());
    }

    #[test]
    fn test_search_filter_pairs() {
        let filter = ProductFilter {
            search: Some("rice".into()),
            limit: Some(50),
            ..ProductFilter::default()
        };
        assert_eq!(
            filter.pairs(),
            vec![("search", "rice".to_string()), ("limit", "50".to_string())]
        );
    }
}
