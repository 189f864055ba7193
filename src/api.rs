//! Item REST Client
//!
//! Thin async wrappers over the items API. One method per operation,
//! JSON throughout, no retry or timeout: a failed attempt is terminal
//! for that user action.

use gloo_net::http::Request;
use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::models::{Item, ItemPayload, ItemResponse, ItemsResponse};

/// Per-action error messages shown in the form pages
pub const FETCH_ITEM_FAILED: &str = "Failed to fetch item data.";
pub const CREATE_ITEM_FAILED: &str = "Failed to create item.";
pub const UPDATE_ITEM_FAILED: &str = "Failed to update item.";

/// Client for the items API, holding the injected base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/api/items/{}", self.base_url, id)
    }

    /// GET /api/items
    pub async fn list_items(&self) -> Result<Vec<Item>, String> {
        let resp = Request::get(&self.items_url())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("list request returned status {}", resp.status()));
        }
        let data: ItemsResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(data.items)
    }

    /// GET /api/items/{id}
    ///
    /// Transport, HTTP, and parse failures all collapse to the same
    /// user-visible message.
    pub async fn get_item(&self, id: u32) -> Result<Item, String> {
        let resp = Request::get(&self.item_url(id))
            .send()
            .await
            .map_err(|_| FETCH_ITEM_FAILED.to_string())?;
        if !resp.ok() {
            return Err(FETCH_ITEM_FAILED.to_string());
        }
        let data: ItemResponse = resp
            .json()
            .await
            .map_err(|_| FETCH_ITEM_FAILED.to_string())?;
        Ok(data.item)
    }

    /// POST /api/items
    pub async fn create_item(&self, payload: &ItemPayload) -> Result<(), String> {
        let resp = Request::post(&self.items_url())
            .json(payload)
            .map_err(|_| CREATE_ITEM_FAILED.to_string())?
            .send()
            .await
            .map_err(|_| CREATE_ITEM_FAILED.to_string())?;
        if !resp.ok() {
            return Err(CREATE_ITEM_FAILED.to_string());
        }
        Ok(())
    }

    /// PUT /api/items/{id}
    pub async fn update_item(&self, id: u32, payload: &ItemPayload) -> Result<(), String> {
        let resp = Request::put(&self.item_url(id))
            .json(payload)
            .map_err(|_| UPDATE_ITEM_FAILED.to_string())?
            .send()
            .await
            .map_err(|_| UPDATE_ITEM_FAILED.to_string())?;
        if !resp.ok() {
            return Err(UPDATE_ITEM_FAILED.to_string());
        }
        Ok(())
    }

    /// DELETE /api/items/{id}
    pub async fn delete_item(&self, id: u32) -> Result<(), String> {
        let resp = Request::delete(&self.item_url(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("delete request returned status {}", resp.status()));
        }
        Ok(())
    }
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(base))
    }

    #[test]
    fn collection_url() {
        assert_eq!(client("http://localhost:8787").items_url(), "http://localhost:8787/api/items");
    }

    #[test]
    fn single_item_url() {
        assert_eq!(client("http://localhost:8787").item_url(42), "http://localhost:8787/api/items/42");
    }

    #[test]
    fn trailing_slash_base_builds_clean_urls() {
        assert_eq!(client("https://example.dev/").item_url(1), "https://example.dev/api/items/1");
    }
}
