//! Board controller module
//!
//! The `ActivityBoard` owns the current view and drives the three user
//! flows: refresh, signup and unregister. Within one flow the refresh fetch
//! is only started after the write response has been observed; independent
//! flows are not coordinated, so the last response to render wins.

use tokio::time::{Duration, Instant};
use tracing::{error, info};

use crate::models::Roster;
use crate::services::ActivitiesApi;
use crate::utils::errors::BoardError;
use crate::view::BoardView;

/// How long a status banner stays visible
pub const STATUS_VISIBLE: Duration = Duration::from_secs(5);

/// Banner text when the signup request never completed
pub const SIGNUP_UNREACHABLE_MESSAGE: &str = "Failed to sign up. Please try again.";

/// Visual style of a status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A transient status banner with its expiry deadline
#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub message: String,
    pub kind: StatusKind,
    expires_at: Instant,
}

impl StatusBanner {
    fn new(message: String, kind: StatusKind) -> Self {
        Self {
            message,
            kind,
            expires_at: Instant::now() + STATUS_VISIBLE,
        }
    }

    /// Whether the banner has passed its visibility window
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// The activity board: the current view plus the API client behind it
#[derive(Debug)]
pub struct ActivityBoard {
    api: ActivitiesApi,
    view: BoardView,
    status: Option<StatusBanner>,
}

impl ActivityBoard {
    /// Create a board with an empty view; call `refresh` to populate it.
    pub fn new(api: ActivitiesApi) -> Self {
        Self {
            api,
            view: BoardView::render(&Roster::new()),
            status: None,
        }
    }

    /// Re-fetch the roster and rebuild the whole view from it.
    ///
    /// On failure the list is replaced by the failure notice and the error
    /// is logged; there is no automatic retry.
    pub async fn refresh(&mut self) {
        match self.api.fetch_roster().await {
            Ok(roster) => {
                self.view = BoardView::render(&roster);
            }
            Err(e) => {
                error!(error = %e, "Failed to load activity roster");
                self.view = BoardView::load_failed();
            }
        }
    }

    /// Submit a signup, then refresh on success.
    ///
    /// The banner always reflects the outcome: the backend's message on
    /// success, its `detail` (or a generic fallback) on rejection, and a
    /// fixed message when the request never completed. The refresh is only
    /// started after the signup response has been observed.
    pub async fn submit_signup(&mut self, activity: &str, email: &str) {
        match self.api.signup(activity, email).await {
            Ok(message) => {
                info!(activity = %activity, email = %email, "Signup accepted");
                self.status = Some(StatusBanner::new(message, StatusKind::Success));
                self.refresh().await;
            }
            Err(BoardError::SignupRejected { message }) => {
                self.status = Some(StatusBanner::new(message, StatusKind::Error));
            }
            Err(e) => {
                error!(activity = %activity, email = %email, error = %e, "Signup request failed");
                self.status = Some(StatusBanner::new(
                    SIGNUP_UNREACHABLE_MESSAGE.to_string(),
                    StatusKind::Error,
                ));
            }
        }
    }

    /// Unregister a participant, then refresh on success.
    ///
    /// Failures are logged only; this action has no user-visible error
    /// surface.
    pub async fn remove_participant(&mut self, activity: &str, email: &str) {
        match self.api.unregister(activity, email).await {
            Ok(()) => {
                info!(activity = %activity, email = %email, "Participant unregistered");
                self.refresh().await;
            }
            Err(e) => {
                error!(activity = %activity, email = %email, error = %e, "Failed to unregister participant");
            }
        }
    }

    /// The current view
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// The status banner, if one is set and still within its visibility window
    pub fn status(&self) -> Option<&StatusBanner> {
        self.status.as_ref().filter(|banner| !banner.is_expired())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_banner_visible_before_deadline() {
        let banner = StatusBanner::new("Activity full".to_string(), StatusKind::Error);
        tokio::time::advance(Duration::from_millis(4_999)).await;
        assert!(!banner.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_hides_after_five_seconds() {
        let banner = StatusBanner::new("Signed up".to_string(), StatusKind::Success);
        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(banner.is_expired());
    }
}
