//! Typed client for the activities API.

use core_types::Activities;
use web_types::{ApiMessage, ApiRequest, ApiResponse};

use crate::error::{BoardError, Result};
use crate::transport::HttpTransport;

/// Client for the activities API over any [`HttpTransport`].
pub struct ActivityClient<T> {
    transport: T,
}

impl<T: HttpTransport> ActivityClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET /activities - all activities in server order.
    pub async fn list_activities(&self) -> Result<Activities> {
        let response = self.send(ApiRequest::list_activities()).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// POST /activities/{name}/signup - enroll `email` in `activity`.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<ApiMessage> {
        let response = self.send(ApiRequest::signup(activity, email)).await?;
        parse_message(&response)
    }

    /// DELETE /activities/{name}/participants - unregister `email`.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<ApiMessage> {
        let response = self.send(ApiRequest::unregister(activity, email)).await?;
        parse_message(&response)
    }

    /// Send a request, turning non-2xx statuses into [`BoardError::Rejected`].
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        log::debug!("{request}");
        let response = self.transport.send(request).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(BoardError::Rejected {
                status: response.status,
                detail: response.error_detail(),
            })
        }
    }
}

/// Success body of a mutating call.
///
/// An empty body or a JSON object without `message` yields an empty message;
/// any other non-JSON body is a [`BoardError::Decode`].
fn parse_message(response: &ApiResponse) -> Result<ApiMessage> {
    if response.body.trim().is_empty() {
        return Ok(ApiMessage::default());
    }
    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use web_types::{ApiError, Method};

    #[tokio::test]
    async fn test_list_activities_parses_mapping() {
        let transport = FakeTransport::new();
        transport.push_ok(
            r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 3, "participants": ["a@x.edu"]}}"#,
        );
        let client = ActivityClient::new(transport);

        let activities = client.list_activities().await.unwrap();

        assert_eq!(activities.len(), 1);
        assert_eq!(activities.get("Chess Club").unwrap().spots_left(), 2);
        assert_eq!(client.transport().requests(), vec![ApiRequest::list_activities()]);
    }

    #[tokio::test]
    async fn test_list_activities_rejects_error_status() {
        let transport = FakeTransport::new();
        transport.push(ApiResponse::json(500, &ApiError::new("boom")));
        let client = ActivityClient::new(transport);

        let err = client.list_activities().await.unwrap_err();

        assert_eq!(
            err,
            BoardError::Rejected {
                status: 500,
                detail: Some("boom".to_string())
            }
        );
    }

    #[tokio::test]
    async fn test_list_activities_decode_error() {
        let transport = FakeTransport::new();
        transport.push_ok("[1, 2, 3]");
        let client = ActivityClient::new(transport);

        let err = client.list_activities().await.unwrap_err();

        assert!(matches!(err, BoardError::Decode(_)));
    }

    #[tokio::test]
    async fn test_signup_success_message() {
        let transport = FakeTransport::new();
        transport.push(ApiResponse::json(
            200,
            &ApiMessage::new("Signed up a@x.edu for Chess Club"),
        ));
        let client = ActivityClient::new(transport);

        let msg = client.signup("Chess Club", "a@x.edu").await.unwrap();

        assert_eq!(msg.message, "Signed up a@x.edu for Chess Club");
        let sent = client.transport().requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/activities/Chess%20Club/signup?email=a%40x.edu");
    }

    #[tokio::test]
    async fn test_signup_rejected_with_detail() {
        let transport = FakeTransport::new();
        transport.push(ApiResponse::json(400, &ApiError::new("Activity full")));
        let client = ActivityClient::new(transport);

        let err = client.signup("Chess Club", "a@x.edu").await.unwrap_err();

        assert_eq!(err.detail(), Some("Activity full"));
    }

    #[tokio::test]
    async fn test_unregister_accepts_body_without_message() {
        let transport = FakeTransport::new();
        transport.push_ok(r#"{"ok": true}"#);
        let client = ActivityClient::new(transport);

        let msg = client.unregister("Chess Club", "a@x.edu").await.unwrap();

        assert_eq!(msg, ApiMessage::default());
        assert_eq!(client.transport().requests()[0].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_signup_non_json_success_body_is_decode_error() {
        let transport = FakeTransport::new();
        transport.push_ok("<html>OK</html>");
        let client = ActivityClient::new(transport);

        let err = client.signup("Chess Club", "a@x.edu").await.unwrap_err();

        assert!(matches!(err, BoardError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unregister_empty_success_body() {
        let transport = FakeTransport::new();
        transport.push_ok("");
        let client = ActivityClient::new(transport);

        let msg = client.unregister("Chess Club", "a@x.edu").await.unwrap();

        assert_eq!(msg, ApiMessage::default());
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let transport = FakeTransport::new();
        transport.push_err(BoardError::Transport("connection refused".to_string()));
        let client = ActivityClient::new(transport);

        let err = client.unregister("Chess Club", "a@x.edu").await.unwrap_err();

        assert_eq!(err, BoardError::Transport("connection refused".to_string()));
    }
}
