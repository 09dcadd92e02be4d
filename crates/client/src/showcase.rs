//! The showcase submission form: session gate, catalog loading, rating
//! selection, and guarded submission.

use std::time::Duration;

use architect_core::types::DbId;
use architect_core::validate::{normalize_optional, RATING_MAX, RATING_MIN};
use serde::Deserialize;

use crate::error::FlowError;
use crate::session::Session;

/// Message shown when the server rejects a submission.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit. Please try again.";

/// Fixed delay between the confirmation view and navigation to the showcase
/// listing. The timer is fire-and-forget and not cancellable.
pub const CONFIRMATION_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// A catalog entry offered in the optional tool selection list.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogTool {
    pub id: DbId,
    pub name: String,
}

/// Where the form is in its lifecycle. `Submitting` doubles as the busy
/// flag: while set, further submit calls are no-ops, mirroring a disabled
/// submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Ready,
    Submitting,
    Confirmation,
}

/// Result of a submit attempt that did not error.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The entry was created; the form shows the confirmation view.
    Accepted,
    /// A submission is already in flight (or already confirmed); ignored.
    AlreadyInFlight,
}

/// Outcome of opening the submit page: either a usable form or a redirect
/// for unauthenticated visitors.
#[derive(Debug)]
pub enum SessionGate {
    Authenticated(ShowcaseForm),
    /// No session; the caller navigates to `/login`.
    RedirectToLogin,
}

/// The submission form's fields and state machine:
/// `ready -> submitting -> { confirmation, ready (error kept by caller) }`.
#[derive(Debug)]
pub struct ShowcaseForm {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    state: FormState,
    tools: Vec<CatalogTool>,
    rating: i32,
    pub prompt_text: String,
    pub image_url: String,
    pub tool_used: String,
}

impl ShowcaseForm {
    /// Open the submit page. Without a session this is the redirect case.
    pub fn open(base_url: impl Into<String>, session: Option<Session>) -> SessionGate {
        let Some(session) = session else {
            return SessionGate::RedirectToLogin;
        };
        SessionGate::Authenticated(Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
            state: FormState::Ready,
            tools: Vec::new(),
            // The star control starts at full rating.
            rating: RATING_MAX,
            prompt_text: String::new(),
            image_url: String::new(),
            tool_used: String::new(),
        })
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    /// Select a star rating. Last write wins; values outside the five-star
    /// range are ignored. No network round-trip.
    pub fn set_rating(&mut self, stars: i32) {
        if (RATING_MIN..=RATING_MAX).contains(&stars) {
            self.rating = stars;
        }
    }

    /// Tools available in the optional selection list.
    pub fn tools(&self) -> &[CatalogTool] {
        &self.tools
    }

    /// Populate the tool selection list from the image catalog.
    ///
    /// Failure is logged and leaves the list empty; submission is never
    /// blocked by a missing catalog.
    pub async fn load_tools(&mut self) {
        let result = async {
            self.http
                .get(format!("{}/api/tools/image", self.base_url))
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<CatalogTool>>()
                .await
        }
        .await;

        match result {
            Ok(tools) => self.tools = tools,
            Err(e) => tracing::warn!(error = %e, "Error fetching tools"),
        }
    }

    /// Submit the form.
    ///
    /// Blank `image_url`/`tool_used` are sent as explicit JSON `null`. On
    /// failure every field is left unchanged and the control re-enables; on
    /// success the form enters the confirmation state and stays there.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FlowError> {
        if self.state != FormState::Ready {
            return Ok(SubmitOutcome::AlreadyInFlight);
        }
        self.state = FormState::Submitting;

        let body = serde_json::json!({
            "userId": self.session.user_id,
            "promptText": self.prompt_text,
            "rating": self.rating,
            "imageUrl": normalize_optional(&self.image_url),
            "toolUsed": normalize_optional(&self.tool_used),
        });

        let result = self
            .http
            .post(format!("{}/api/showcase", self.base_url))
            .bearer_auth(&self.session.access_token)
            .json(&body)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                self.state = FormState::Confirmation;
                Ok(SubmitOutcome::Accepted)
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Showcase submission rejected");
                self.state = FormState::Ready;
                Err(FlowError::Rejected(SUBMIT_FAILED_MESSAGE.to_string()))
            }
            Err(e) => {
                self.state = FormState::Ready;
                Err(FlowError::Transport(e))
            }
        }
    }

    /// Wait out the fixed confirmation delay, after which the caller
    /// navigates to the showcase listing. Typically spawned fire-and-forget.
    pub async fn confirmation_redirect() {
        tokio::time::sleep(CONFIRMATION_REDIRECT_DELAY).await;
    }
}
