//! Wire types for the activities REST API.
//!
//! Requests are described as a method plus a fully encoded path so that
//! any HTTP transport can send them; responses are a status plus raw body.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods used by the activities API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request against the activities API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path and query, already percent-encoded
    pub path: String,
}

impl ApiRequest {
    /// GET /activities
    pub fn list_activities() -> Self {
        Self {
            method: Method::Get,
            path: "/activities".to_string(),
        }
    }

    /// POST /activities/{name}/signup?email={email}
    pub fn signup(activity: &str, email: &str) -> Self {
        Self {
            method: Method::Post,
            path: format!(
                "/activities/{}/signup?email={}",
                urlencoding::encode(activity),
                urlencoding::encode(email)
            ),
        }
    }

    /// DELETE /activities/{name}/participants?email={email}
    pub fn unregister(activity: &str, email: &str) -> Self {
        Self {
            method: Method::Delete,
            path: format!(
                "/activities/{}/participants?email={}",
                urlencoding::encode(activity),
                urlencoding::encode(email)
            ),
        }
    }

    /// Absolute or origin-relative URL for this request.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Raw response from the activities API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response with a JSON-encoded body.
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        Self::new(status, serde_json::to_string(value).unwrap_or_default())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `detail` string of an error body, if the body carries one.
    pub fn error_detail(&self) -> Option<String> {
        serde_json::from_str::<ApiError>(&self.body)
            .ok()
            .map(|e| e.detail)
            .filter(|d| !d.is_empty())
    }
}

/// Success payload for mutating calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: String,
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
