//! The two-phase registration flow: create the account, then establish a
//! session with the same credentials.

use architect_core::types::DbId;
use serde::Deserialize;

use crate::error::{error_message, FlowError};
use crate::session::Session;

/// Message shown for the created-but-not-signed-in terminal state.
pub const MANUAL_SIGN_IN_MESSAGE: &str =
    "Account created but sign in failed. Please try signing in manually.";

/// Terminal outcome of a successful account creation.
///
/// `CreatedNotSignedIn` is a valid state, not an error: the account exists,
/// the user just has to sign in manually. Nothing is rolled back.
#[derive(Debug)]
pub enum RegistrationOutcome {
    /// Account created and session established; navigate to the builder.
    SignedIn(Session),
    /// Account created, session establishment failed; show
    /// [`MANUAL_SIGN_IN_MESSAGE`].
    CreatedNotSignedIn,
}

/// Wire shape of a successful `/api/login` response.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    user: LoginUser,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    id: DbId,
}

/// Drives registration against the API at `base_url`.
pub struct RegistrationFlow {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrationFlow {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Run the two-phase registration.
    ///
    /// 1. POST `/api/signup`. A non-success status stops the flow with the
    ///    server's error message; no session establishment is attempted.
    /// 2. On success, attempt session establishment exactly once with the
    ///    same credentials. Rejection there is the named partial-success
    ///    outcome, not an error.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegistrationOutcome, FlowError> {
        let response = self
            .http
            .post(format!("{}/api/signup", self.base_url))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FlowError::Rejected(error_message(response).await));
        }

        match self.establish_session(email, password).await {
            Ok(session) => Ok(RegistrationOutcome::SignedIn(session)),
            Err(FlowError::Rejected(msg)) => {
                tracing::warn!(%msg, "Sign-in after registration failed");
                Ok(RegistrationOutcome::CreatedNotSignedIn)
            }
            Err(transport) => Err(transport),
        }
    }

    /// Establish a session via `/api/login`. Also usable on its own by a
    /// sign-in page.
    pub async fn establish_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, FlowError> {
        let response = self
            .http
            .post(format!("{}/api/login", self.base_url))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FlowError::Rejected(error_message(response).await));
        }

        let body: LoginResponse = response.json().await?;
        Ok(Session {
            user_id: body.user.id,
            access_token: body.access_token,
        })
    }
}
