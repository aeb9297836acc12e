//! Mock activities backend for testing
//!
//! This module provides a mock HTTP server that simulates the activities
//! REST API. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Mock activities backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    /// Start a new mock backend server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to point the client at
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Percent-encoded signup/unregister path for an activity
    fn activity_path(activity: &str, action: &str) -> String {
        format!("/activities/{}/{}", urlencoding::encode(activity), action)
    }

    /// Serve the given roster body from GET /activities, a limited number
    /// of times when `times` is set
    pub async fn mock_roster(&self, body: Value, times: Option<u64>) {
        let mut mock = Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body));
        if let Some(times) = times {
            mock = mock.up_to_n_times(times);
        }
        mock.mount(&self.server).await;
    }

    /// Fail GET /activities with the given status
    pub async fn mock_roster_failure(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve a malformed roster body from GET /activities
    pub async fn mock_roster_malformed(&self) {
        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "a", "roster"])))
            .mount(&self.server)
            .await;
    }

    /// Accept a signup for the given activity/email pair
    pub async fn mock_signup_success(&self, activity: &str, email: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path(Self::activity_path(activity, "signup")))
            .and(query_param("email", email))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": message })))
            .mount(&self.server)
            .await;
    }

    /// Reject a signup with the given status and optional detail body
    pub async fn mock_signup_rejected(&self, activity: &str, status: u16, detail: Option<&str>) {
        let response = match detail {
            Some(detail) => {
                ResponseTemplate::new(status).set_body_json(json!({ "detail": detail }))
            }
            None => ResponseTemplate::new(status).set_body_json(json!({})),
        };
        Mock::given(method("POST"))
            .and(path(Self::activity_path(activity, "signup")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Accept an unregister for the given activity/email pair
    pub async fn mock_unregister_success(&self, activity: &str, email: &str) {
        Mock::given(method("DELETE"))
            .and(path(Self::activity_path(activity, "unregister")))
            .and(query_param("email", email))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": format!("Unregistered {} from {}", email, activity)
            })))
            .mount(&self.server)
            .await;
    }

    /// Reject an unregister with the given status
    pub async fn mock_unregister_failure(&self, activity: &str, status: u16) {
        Mock::given(method("DELETE"))
            .and(path(Self::activity_path(activity, "unregister")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "detail": "Student is not signed up for this activity"
            })))
            .mount(&self.server)
            .await;
    }
}
