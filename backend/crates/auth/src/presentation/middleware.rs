//! Auth Middleware
//!
//! Credential-consuming middleware for protected routes: decodes the
//! bearer token, checks expiry, and requires the admin role.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::session_token::verify_session_token;
use crate::domain::notifier::CodeNotifier;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_role::AccountRole;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Authenticated account identity stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub account_id: String,
    pub identifier: String,
    pub role: AccountRole,
}

/// Middleware that requires a valid admin session credential
pub async fn require_admin<R, N>(
    axum::extract::State(state): axum::extract::State<AuthAppState<R, N>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    N: CodeNotifier + Send + Sync + 'static,
{
    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AuthError::TokenInvalid.into_response())?;

    let claims =
        verify_session_token(token, &state.config).map_err(|e| e.into_response())?;

    let role = AccountRole::from_code(&claims.role);
    if !role.is_admin() {
        return Err(AuthError::AdminRequired.into_response());
    }

    req.extensions_mut().insert(CurrentAccount {
        account_id: claims.sub,
        identifier: claims.identifier,
        role,
    });

    Ok(next.run(req).await)
}
