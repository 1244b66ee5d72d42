//! Catalog Endpoint

use super::{get_json, CatalogApi};
use crate::error::ApiResult;
use crate::models::{CatalogPage, Product};

#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogApi for HttpCatalog {
    async fn products(&self) -> ApiResult<Vec<Product>> {
        let page: CatalogPage = get_json(&self.url).await?;
        Ok(page.products)
    }
}
