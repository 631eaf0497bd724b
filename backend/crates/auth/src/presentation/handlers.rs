//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use std::sync::Arc;

use platform::client::extract_client_ip;

use crate::application::config::AuthConfig;
use crate::application::{
    ResendOtpUseCase, StartLoginInput, StartLoginUseCase, VerifyOtpInput, VerifyOtpUseCase,
};
use crate::domain::notifier::CodeNotifier;
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    CurrentAccountResponse, LoginRequest, LoginResponse, ResendOtpRequest, ResendOtpResponse,
    SessionData, VerifyOtpRequest, VerifyOtpResponse,
};
use crate::presentation::middleware::CurrentAccount;

/// Shared state for auth handlers
pub struct AuthAppState<R, N>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    N: CodeNotifier + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub config: Arc<AuthConfig>,
}

impl<R, N> Clone for AuthAppState<R, N>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    N: CodeNotifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            notifier: self.notifier.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Start Login
// ============================================================================

/// POST /api/auth/login
pub async fn start_login<R, N>(
    State(state): State<AuthAppState<R, N>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    N: CodeNotifier + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    tracing::debug!(client_ip = ?client_ip, "Login attempt");

    let use_case = StartLoginUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    let input = StartLoginInput {
        identifier: req.identifier,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        otp_sent: true,
        session_data: SessionData {
            identifier: output.identifier,
        },
    }))
}

// ============================================================================
// Verify Code
// ============================================================================

/// POST /api/auth/verify-otp
pub async fn verify_otp<R, N>(
    State(state): State<AuthAppState<R, N>>,
    headers: HeaderMap,
    axum::extract::ConnectInfo(addr): axum::extract::ConnectInfo<std::net::SocketAddr>,
    Json(req): Json<VerifyOtpRequest>,
) -> AuthResult<Json<VerifyOtpResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    N: CodeNotifier + Send + Sync + 'static,
{
    let client_ip = extract_client_ip(&headers, Some(addr.ip()));
    tracing::debug!(client_ip = ?client_ip, "Code verification attempt");

    let use_case = VerifyOtpUseCase::new(state.repo.clone(), state.config.clone());

    let input = VerifyOtpInput {
        identifier: req.identifier,
        code: req.code,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(VerifyOtpResponse {
        token: output.token,
        message: "Login successful".to_string(),
    }))
}

// ============================================================================
// Resend Code
// ============================================================================

/// POST /api/auth/resend-otp
pub async fn resend_otp<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<ResendOtpRequest>,
) -> AuthResult<Json<ResendOtpResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
    N: CodeNotifier + Send + Sync + 'static,
{
    let use_case = ResendOtpUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    use_case.execute(&req.identifier).await?;

    Ok(Json(ResendOtpResponse {
        message: "A new code has been sent".to_string(),
    }))
}

// ============================================================================
// Current Account
// ============================================================================

/// GET /api/auth/me (behind require_admin)
pub async fn current_account(
    axum::Extension(current): axum::Extension<CurrentAccount>,
) -> Json<CurrentAccountResponse> {
    Json(CurrentAccountResponse {
        account_id: current.account_id,
        identifier: current.identifier,
        role: current.role.code().to_string(),
    })
}
