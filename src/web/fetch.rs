//! Dataset transport over the browser `fetch` API.

use super::describe_js_error;
use crate::dataset::{DatasetSource, FetchResponse};
use crate::domain::error::{DirectoryError, Result};
use futures_util::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// GET through `window.fetch`, resolved against the page origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetch;

impl BrowserFetch {
    async fn get(path: &str) -> Result<FetchResponse> {
        let window = web_sys::window().ok_or_else(|| DirectoryError::Fetch("no window".to_string()))?;

        let value = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(|e| DirectoryError::Fetch(format!("{path}: {}", describe_js_error(&e))))?;
        let response: web_sys::Response = value
            .dyn_into()
            .map_err(|_| DirectoryError::Fetch("fetch did not resolve to a Response".to_string()))?;

        let status = response.status();
        tracing::debug!(path = %path, status = status, "fetch completed");

        let text = response
            .text()
            .map_err(|e| DirectoryError::Fetch(describe_js_error(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| DirectoryError::Fetch(format!("reading body: {}", describe_js_error(&e))))?
            .as_string()
            .unwrap_or_default();

        Ok(FetchResponse::with_status(status, body))
    }
}

impl DatasetSource for BrowserFetch {
    fn fetch<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<FetchResponse>> {
        Self::get(path).boxed_local()
    }
}
