//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::notifier::CodeNotifier;
use crate::domain::repository::AccountRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware;

/// Create the Auth router for any repository/notifier implementation
pub fn auth_router<R, N>(repo: R, notifier: N, config: AuthConfig) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    N: CodeNotifier + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/me", get(handlers::current_account))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::require_admin::<R, N>,
        ));

    Router::new()
        .route("/login", post(handlers::start_login::<R, N>))
        .route("/verify-otp", post(handlers::verify_otp::<R, N>))
        .route("/resend-otp", post(handlers::resend_otp::<R, N>))
        .merge(protected)
        .with_state(state)
}
