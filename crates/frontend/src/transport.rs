//! gloo-net transport for the activities API.

use activity_board::{BoardError, HttpTransport, Result};
use async_trait::async_trait;
use gloo_net::http::Request;
use web_types::{ApiRequest, ApiResponse, Method};

/// Sends API requests with the browser's fetch.
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = request.url(&self.base_url);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| BoardError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| BoardError::Transport(e.to_string()))?;

        Ok(ApiResponse::new(response.status(), body))
    }
}
