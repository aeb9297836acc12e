//! Activities backend client
//!
//! This service wraps the backend's REST API: roster listing, signup and
//! unregister. Every call is a single request/response cycle: no retries,
//! no client-side timeout (transport defaults apply), no request dedup.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::config::Settings;
use crate::models::Roster;
use crate::utils::errors::{BoardError, Result};

/// Body of a successful signup response
#[derive(Debug, Clone, Deserialize)]
struct SignupResponse {
    message: String,
}

/// Body of a rejected request, as produced by the backend
#[derive(Debug, Clone, Deserialize)]
struct ErrorResponse {
    detail: Option<String>,
}

/// HTTP client for the activities backend
#[derive(Debug, Clone)]
pub struct ActivitiesApi {
    client: Client,
    base_url: String,
}

impl ActivitiesApi {
    /// Create a new ActivitiesApi instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent("ActivityBoard/1.0")
            .build()
            .map_err(BoardError::Http)?;

        Ok(Self {
            client,
            base_url: settings.backend.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current roster.
    ///
    /// A network failure, a non-2xx status and a malformed body are all load
    /// failures; the caller decides how to surface them.
    pub async fn fetch_roster(&self) -> Result<Roster> {
        let url = format!("{}/activities", self.base_url);
        debug!(url = %url, "Fetching activity roster");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BoardError::LoadFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::LoadFailed(format!(
                "backend returned HTTP {}",
                status
            )));
        }

        let roster: Roster = response
            .json()
            .await
            .map_err(|e| BoardError::LoadFailed(format!("malformed roster body: {}", e)))?;

        debug!(activities = roster.len(), "Roster fetched");
        Ok(roster)
    }

    /// Sign a participant up for an activity.
    ///
    /// Returns the backend's success message. A rejection maps to
    /// `SignupRejected` carrying the backend `detail` when present.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let url = format!(
            "{}/activities/{}/signup?email={}",
            self.base_url,
            encode(activity),
            encode(email)
        );
        debug!(activity = %activity, email = %email, "Submitting signup");

        let response = self.client.post(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            let body: SignupResponse = response.json().await?;
            Ok(body.message)
        } else {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| "An error occurred".to_string());
            warn!(activity = %activity, email = %email, status = %status, message = %message, "Signup rejected");
            Err(BoardError::SignupRejected { message })
        }
    }

    /// Remove a participant from an activity. The response body is ignored.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let url = format!(
            "{}/activities/{}/unregister?email={}",
            self.base_url,
            encode(activity),
            encode(email)
        );
        debug!(activity = %activity, email = %email, "Submitting unregister");

        let response = self.client.delete(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::UnregisterFailed {
                activity: activity.to_string(),
                email: email.to_string(),
                reason: format!("backend returned HTTP {}", status),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_response_deserialization() {
        let json = r#"{"message": "Signed up ada@example.com for Chess Club"}"#;
        let response: SignupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Signed up ada@example.com for Chess Club");
    }

    #[test]
    fn test_error_response_with_detail() {
        let json = r#"{"detail": "Activity full"}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.detail.as_deref(), Some("Activity full"));
    }

    #[test]
    fn test_error_response_without_detail() {
        let json = r#"{}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert!(response.detail.is_none());
    }
}
