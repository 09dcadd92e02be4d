//! Flow error type and error-body decoding.

use serde::Deserialize;

/// Fallback shown when the server provides no usable error message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors surfaced by the client flows.
///
/// The taxonomy is deliberately flat: a rejection carries whatever message
/// the server sent (or the generic fallback), and every transport or decode
/// problem collapses to one retry-prompting message. The flows never retry
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The server rejected the request; the message is shown inline.
    #[error("{0}")]
    Rejected(String),

    /// Network or decode failure.
    #[error("Something went wrong. Please try again.")]
    Transport(#[from] reqwest::Error),
}

/// Extract the `error` field from a failure response body, falling back to
/// [`GENERIC_ERROR_MESSAGE`] when the body is absent or malformed.
pub(crate) async fn error_message(response: reqwest::Response) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    match response.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(msg) }) => msg,
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}
