//! Authenticated gateway for network-based API calls
//!
//! Thin wrapper over [`reqwest::Client`] with one interception
//! behavior: before transmission the current token is read from the
//! credential store and set as the `x-token` header. When no token is
//! stored the request goes out unmodified; rejecting unauthenticated
//! calls is the service's job. No retry, no backoff, no caching.

use std::path::Path;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult, TokenStore};

/// Header carrying the auth token
pub const TOKEN_HEADER: &str = "x-token";

/// Authenticated HTTP gateway to the café service
#[derive(Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
}

impl Gateway {
    /// Create a new gateway from configuration and a credential store
    pub fn new(config: &ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Service base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credential store backing this gateway
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Inject the stored token, when present
    fn apply_token(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.token() {
            Some(token) => request.header(TOKEN_HEADER, token),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.apply_token(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.apply_token(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.apply_token(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Upload image bytes for a product as a multipart form
    ///
    /// Reads the file at `image_path` (the locator handed back by the
    /// picker) and posts it under the `archivo` field.
    pub async fn upload_image(&self, product_id: &str, image_path: &Path) -> ClientResult<()> {
        let bytes = tokio::fs::read(image_path).await?;

        let filename = image_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.jpg")
            .to_string();

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str("application/octet-stream")
            .map_err(|e| ClientError::Upload(format!("invalid multipart part: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("archivo", part);

        let path = format!("productos/upload-imagen/productos/{}", product_id);
        let request = self.apply_token(self.client.post(self.url(&path)).multipart(form));
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Upload(format!("({}) {}", status, text)));
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
