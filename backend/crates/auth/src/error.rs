//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Status mapping follows the reference contract: lookup failures on the
/// verification endpoints answer 400, code-state failures answer 401, and
/// lockout answers 429.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed request input (identifier or code shape)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing account or wrong password - never distinguished
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account matches the identifier
    #[error("Account not found")]
    AccountNotFound,

    /// No one-time code has been issued (or it was already used)
    #[error("No active code for this account")]
    NoActiveCode,

    /// The one-time code has expired
    #[error("One-time code has expired")]
    CodeExpired,

    /// The submitted code does not match
    #[error("Invalid one-time code")]
    CodeMismatch,

    /// Too many failed verification attempts
    #[error("Too many failed attempts, request a new code")]
    LockedOut,

    /// Session token missing, malformed, or expired
    #[error("Invalid or expired session token")]
    TokenInvalid,

    /// Valid token but insufficient role
    #[error("Administrator role required")]
    AdminRequired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidInput(_)
            | AuthError::InvalidCredentials
            | AuthError::AccountNotFound => StatusCode::BAD_REQUEST,
            AuthError::NoActiveCode
            | AuthError::CodeExpired
            | AuthError::CodeMismatch
            | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::LockedOut => StatusCode::TOO_MANY_REQUESTS,
            AuthError::AdminRequired => StatusCode::FORBIDDEN,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidInput(_)
            | AuthError::InvalidCredentials
            | AuthError::AccountNotFound => ErrorKind::BadRequest,
            AuthError::NoActiveCode
            | AuthError::CodeExpired
            | AuthError::CodeMismatch
            | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::LockedOut => ErrorKind::TooManyRequests,
            AuthError::AdminRequired => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::CodeMismatch => {
                tracing::warn!("Wrong one-time code submitted");
            }
            AuthError::LockedOut => {
                tracing::warn!("Verification attempt on locked account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (
                AuthError::InvalidInput("code".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::InvalidCredentials, StatusCode::BAD_REQUEST),
            (AuthError::AccountNotFound, StatusCode::BAD_REQUEST),
            (AuthError::NoActiveCode, StatusCode::UNAUTHORIZED),
            (AuthError::CodeExpired, StatusCode::UNAUTHORIZED),
            (AuthError::CodeMismatch, StatusCode::UNAUTHORIZED),
            (AuthError::LockedOut, StatusCode::TOO_MANY_REQUESTS),
            (AuthError::TokenInvalid, StatusCode::UNAUTHORIZED),
            (AuthError::AdminRequired, StatusCode::FORBIDDEN),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_credentials_wording_is_generic() {
        // Missing account and wrong password must render identically
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}
