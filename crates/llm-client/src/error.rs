//! Classified generation errors.
//!
//! Every failure of a generation call is narrowed to one [`LlmError`] kind so callers can
//! tell configuration problems (bad key, wrong endpoint) from transient service trouble.

use openai_client::{EmptyCompletion, OpenAIError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    /// Rejected credentials or missing permission.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Quota exhausted or too many requests.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with something that is not a completion.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Empty response")]
    EmptyResponse,

    /// Any other error reported by the service or the client.
    #[error("Service error: {0}")]
    Service(String),
}

impl LlmError {
    /// True for failures that may succeed when the user tries again later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LlmError::RateLimited(_) | LlmError::Timeout | LlmError::Network(_) | LlmError::Service(_)
        )
    }

    /// Short stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Auth(_) => "auth",
            LlmError::RateLimited(_) => "rate_limited",
            LlmError::Timeout => "timeout",
            LlmError::Network(_) => "network",
            LlmError::MalformedResponse(_) => "malformed_response",
            LlmError::EmptyResponse => "empty_response",
            LlmError::Service(_) => "service",
        }
    }
}

const AUTH_HINTS: &[&str] = &[
    "api key",
    "api_key",
    "unauthorized",
    "unauthenticated",
    "permission",
    "401",
    "403",
];

const RATE_LIMIT_HINTS: &[&str] = &[
    "quota",
    "rate limit",
    "resource_exhausted",
    "resource has been exhausted",
    "too many requests",
    "429",
];

fn classify_api_message(message: &str) -> LlmError {
    let lower = message.to_lowercase();
    if AUTH_HINTS.iter().any(|h| lower.contains(h)) {
        LlmError::Auth(message.to_string())
    } else if RATE_LIMIT_HINTS.iter().any(|h| lower.contains(h)) {
        LlmError::RateLimited(message.to_string())
    } else {
        LlmError::Service(message.to_string())
    }
}

impl From<OpenAIError> for LlmError {
    fn from(e: OpenAIError) -> Self {
        match e {
            OpenAIError::Reqwest(err) if err.is_timeout() => LlmError::Timeout,
            OpenAIError::Reqwest(err) => LlmError::Network(err.to_string()),
            OpenAIError::ApiError(api) => classify_api_message(&api.message),
            OpenAIError::JSONDeserialize(err) => LlmError::MalformedResponse(err.to_string()),
            other => classify_api_message(&other.to_string()),
        }
    }
}

impl From<anyhow::Error> for LlmError {
    fn from(e: anyhow::Error) -> Self {
        if e.is::<EmptyCompletion>() {
            return LlmError::EmptyResponse;
        }
        match e.downcast::<OpenAIError>() {
            Ok(openai) => openai.into(),
            Err(other) => LlmError::Service(format!("{:#}", other)),
        }
    }
}
