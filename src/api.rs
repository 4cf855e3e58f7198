//! Browser Transport
//!
//! `gloo-net` HTTP GET behind the core `Transport` trait.

use async_trait::async_trait;
use gloo_net::http::Request;
use mealdb_core::{FetchError, Transport};

/// GET through the page's `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}
