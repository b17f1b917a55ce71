//! The activity board controller.
//!
//! Every mutation is followed by a full resync: the board re-fetches and
//! re-renders all activities instead of patching the view locally, so
//! derived fields such as `spots_left` always come from the server.

use core_types::Participant;

use crate::banner::MessageBanner;
use crate::client::ActivityClient;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::render::{LOAD_FAILURE_MESSAGE, render_board};
use crate::surface::BoardSurface;
use crate::transport::HttpTransport;

const MISSING_SIGNUP_FIELDS: &str = "Please enter an email and choose an activity.";
const SIGNUP_REJECTED: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const MISSING_EMAIL: &str = "Cannot unregister this participant: no email on record.";
const UNREGISTER_FAILED: &str = "Failed to unregister participant.";

/// Result of a participant removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The participant has no email; nothing was sent.
    MissingEmail,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Removed,
    Failed,
}

/// Fetches, renders and mutates activities through an injected surface.
pub struct ActivityBoard<T, S> {
    client: ActivityClient<T>,
    surface: S,
    config: BoardConfig,
}

impl<T: HttpTransport, S: BoardSurface> ActivityBoard<T, S> {
    pub fn new(client: ActivityClient<T>, surface: S, config: BoardConfig) -> Self {
        Self {
            client,
            surface,
            config,
        }
    }

    pub fn client(&self) -> &ActivityClient<T> {
        &self.client
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Load all activities and replace the list and select options.
    ///
    /// Failures are logged and replace the list with a fixed message; they
    /// are never returned and never retried.
    pub async fn fetch_activities(&self) {
        match self.client.list_activities().await {
            Ok(activities) => {
                if activities.is_empty() {
                    log::warn!("Activities API returned no activities");
                } else {
                    log::debug!("Loaded {} activities", activities.len());
                }
                self.surface.show_board(render_board(&activities));
            }
            Err(err) => {
                log::error!("Error fetching activities: {err}");
                self.surface.show_load_failure(LOAD_FAILURE_MESSAGE);
            }
        }
    }

    /// Sign `email` up for `activity` and report the result in the banner.
    ///
    /// A success clears the form and triggers one resync. Every result
    /// arms its own hide timer.
    pub async fn submit_signup(&self, email: &str, activity: &str) -> MessageBanner {
        let email = email.trim();

        if email.is_empty() || activity.trim().is_empty() {
            return self.report(MessageBanner::error(MISSING_SIGNUP_FIELDS));
        }

        match self.client.signup(activity, email).await {
            Ok(response) => {
                log::info!("Signed up {email} for {activity}");
                let text = if response.message.trim().is_empty() {
                    format!("Signed up {email} for {activity}")
                } else {
                    response.message
                };
                let banner = self.report(MessageBanner::success(text));
                self.surface.reset_form();
                self.fetch_activities().await;
                banner
            }
            Err(err) => {
                let banner = match err.detail() {
                    Some(detail) => MessageBanner::error(detail),
                    None if matches!(err, BoardError::Rejected { .. }) => {
                        MessageBanner::error(SIGNUP_REJECTED)
                    }
                    None => {
                        log::error!("Error signing up: {err}");
                        MessageBanner::error(SIGNUP_FAILED)
                    }
                };
                self.report(banner)
            }
        }
    }

    /// Unregister a participant after the user confirms.
    ///
    /// On success the row is dropped from the view and a resync follows.
    pub async fn remove_participant(
        &self,
        activity: &str,
        participant: &Participant,
    ) -> RemovalOutcome {
        let Some(email) = participant.email() else {
            log::warn!("Refusing to unregister participant without email from {activity}");
            self.surface.alert(MISSING_EMAIL);
            return RemovalOutcome::MissingEmail;
        };

        if !self
            .surface
            .confirm(&format!("Unregister {email} from {activity}?"))
        {
            return RemovalOutcome::Cancelled;
        }

        match self.client.unregister(activity, email).await {
            Ok(_) => {
                log::info!("Unregistered {email} from {activity}");
                self.surface.remove_participant_row(activity, email);
                self.fetch_activities().await;
                RemovalOutcome::Removed
            }
            Err(err) => {
                log::error!("Error unregistering {email} from {activity}: {err}");
                self.surface.alert(err.detail().unwrap_or(UNREGISTER_FAILED));
                RemovalOutcome::Failed
            }
        }
    }

    /// Show a banner and arm its hide timer.
    fn report(&self, banner: MessageBanner) -> MessageBanner {
        self.surface.show_message(banner.clone());
        self.surface.schedule_message_hide(self.config.message_hide_ms);
        banner
    }
}
