//! Item Endpoints
//!
//! `HttpItemsApi` talks to `{api_base}/items`.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{get_json, send, ItemsApi};
use crate::error::ApiResult;
use crate::models::{Item, NewItem};

#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    api_base: String,
}

impl HttpItemsApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    fn collection_url(&self) -> String {
        format!("{}/items", self.api_base)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/items/{}", self.api_base, utf8_percent_encode(id, NON_ALPHANUMERIC))
    }
}

impl ItemsApi for HttpItemsApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        get_json(&self.collection_url()).await
    }

    async fn create(&self, item: &NewItem) -> ApiResult<()> {
        let body = serde_json::to_string(item)?;
        send("POST", &self.collection_url(), Some(body)).await?;
        Ok(())
    }

    async fn replace(&self, item: &Item) -> ApiResult<()> {
        let body = serde_json::to_string(item)?;
        send("PUT", &self.item_url(&item.id), Some(body)).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        send("DELETE", &self.item_url(id), None).await?;
        Ok(())
    }
}
