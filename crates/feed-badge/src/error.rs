//! Error types for the feed badge server.
//!
//! Every failure kind maps to its own status code and a short plain-text
//! body. Upstream details are logged, never echoed to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing credentials or a missing / repeated query parameter
    #[error("Invalid Request")]
    InvalidRequest,

    #[error("Unknown badge type: {0}")]
    UnknownBadgeType(String),

    #[error("Unknown badge style: {0}")]
    UnknownStyle(String),

    /// The identity provider rejected the session request
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The identity provider failed without judging the credentials
    #[error("Session creation failed: {0}")]
    SessionUnavailable(String),

    #[error("Feed not found: {0}")]
    FeedNotFound(String),

    /// The feed provider failed for a reason other than an unknown feed
    #[error("Feed lookup failed: {0}")]
    FeedLookup(String),

    /// A success response whose body does not have the expected shape
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Transport error talking to the upstream service
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnknownBadgeType(_) | AppError::UnknownStyle(_) => StatusCode::BAD_REQUEST,
            AppError::FeedNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Authentication(_)
            | AppError::SessionUnavailable(_)
            | AppError::FeedLookup(_)
            | AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            AppError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Template(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent to the client.
    fn public_message(&self) -> String {
        match self {
            AppError::InvalidRequest => "Invalid Request".to_string(),
            AppError::UnknownBadgeType(_) | AppError::UnknownStyle(_) => self.to_string(),
            AppError::FeedNotFound(_) => "Feed not found".to_string(),
            AppError::Authentication(_) => "Upstream authentication failed".to_string(),
            AppError::SessionUnavailable(_) => "Upstream session service failed".to_string(),
            AppError::FeedLookup(_) => "Upstream feed lookup failed".to_string(),
            AppError::MalformedResponse(_) => "Malformed upstream response".to_string(),
            AppError::Upstream(e) if e.is_timeout() => "Upstream timed out".to_string(),
            AppError::Upstream(_) => "Upstream unavailable".to_string(),
            AppError::Template(_) => "Badge rendering failed".to_string(),
            AppError::Config(_) => "Configuration error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::InvalidRequest
            | AppError::UnknownBadgeType(_)
            | AppError::UnknownStyle(_) => {
                tracing::debug!(error = %self, "Rejected badge request");
            }
            AppError::FeedNotFound(_) => tracing::info!(error = %self, "Feed not found"),
            AppError::Authentication(_)
            | AppError::SessionUnavailable(_)
            | AppError::FeedLookup(_)
            | AppError::MalformedResponse(_)
            | AppError::Upstream(_) => {
                tracing::warn!(error = %self, "External service error");
            }
            AppError::Template(_) | AppError::Config(_) => {
                tracing::error!(error = %self, "Internal error");
            }
        }

        (status, self.public_message()).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error() {
        let err = AppError::InvalidRequest;
        assert_eq!(err.to_string(), "Invalid Request");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unknown_badge_type_error() {
        let err = AppError::UnknownBadgeType("followers".to_string());
        assert_eq!(err.to_string(), "Unknown badge type: followers");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_statuses_are_distinct() {
        let auth = AppError::Authentication("AuthenticationRequired".to_string());
        let missing = AppError::FeedNotFound("UnknownFeed".to_string());
        assert_eq!(auth.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        let lookup = AppError::FeedLookup(String::new());
        assert_ne!(auth.public_message(), lookup.public_message());
    }

    #[test]
    fn test_session_unavailable_is_not_an_auth_failure() {
        let err = AppError::SessionUnavailable("500 Internal Server Error".to_string());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.public_message(), "Upstream session service failed");
    }

    #[test]
    fn test_public_message_hides_upstream_detail() {
        let err = AppError::Authentication("Invalid identifier or password".to_string());
        assert_eq!(err.public_message(), "Upstream authentication failed");
    }
}
