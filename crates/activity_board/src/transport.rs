//! HTTP transport seam.

use async_trait::async_trait;
use web_types::{ApiRequest, ApiResponse};

use crate::error::Result;

/// Sends API requests and hands back the raw status and body.
///
/// Implementations only move bytes. Status and body interpretation belong
/// to [`crate::ActivityClient`]. Futures are not `Send` because the browser
/// runs everything on one thread.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Send a request. Errors only when no response could be read.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}
