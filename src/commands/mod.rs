//! Backend Bindings
//!
//! HTTP wrappers for the persistence API and the external product catalog,
//! organized by domain. The traits are the seam the controllers are
//! written against.

mod item;
mod catalog;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::{ApiError, ApiResult};
use crate::models::{Item, NewItem, Product};

pub use item::HttpItemsApi;
pub use catalog::HttpCatalog;

/// CRUD contract of the persistence API
#[allow(async_fn_in_trait)]
pub trait ItemsApi {
    /// `GET /items`
    async fn list(&self) -> ApiResult<Vec<Item>>;
    /// `POST /items`
    async fn create(&self, item: &NewItem) -> ApiResult<()>;
    /// `PUT /items/{id}` with the full record
    async fn replace(&self, item: &Item) -> ApiResult<()>;
    /// `DELETE /items/{id}`
    async fn delete(&self, id: &str) -> ApiResult<()>;
}

/// Read-only product feed
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn products(&self) -> ApiResult<Vec<Product>>;
}

// ========================
// fetch helpers
// ========================

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Issue a request and fail on any non-2xx status
async fn send(method: &str, url: &str, body: Option<String>) -> ApiResult<Response> {
    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        let headers = Headers::new().map_err(js_error)?;
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(ApiError::Status { status: response.status(), url: url.to_string() });
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let decode = |err: JsValue| ApiError::Decode(format!("{:?}", err));
    let promise = response.json().map_err(decode)?;
    let value = JsFuture::from(promise).await.map_err(decode)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    let response = send("GET", url, None).await?;
    read_json(response).await
}
