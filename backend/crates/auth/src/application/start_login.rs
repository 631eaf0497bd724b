//! Start Login Use Case
//!
//! First protocol step: checks the password and issues a one-time code.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::notifier::CodeNotifier;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::RawPassword, email::Email, otp_code::OtpCode,
};
use crate::error::{AuthError, AuthResult};

/// Start login input
pub struct StartLoginInput {
    /// Login identifier (email)
    pub identifier: String,
    /// Password
    pub password: String,
}

/// Start login output
///
/// Only the identifier crosses back to the caller, echoed for client-side
/// step sequencing. The code itself travels exclusively via the notifier.
pub struct StartLoginOutput {
    pub identifier: String,
}

/// Start login use case
pub struct StartLoginUseCase<R, N>
where
    R: AccountRepository,
    N: CodeNotifier + Send + Sync + 'static,
{
    accounts: Arc<R>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<R, N> StartLoginUseCase<R, N>
where
    R: AccountRepository,
    N: CodeNotifier + Send + Sync + 'static,
{
    pub fn new(accounts: Arc<R>, notifier: Arc<N>, config: Arc<AuthConfig>) -> Self {
        Self {
            accounts,
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: StartLoginInput) -> AuthResult<StartLoginOutput> {
        if input.password.is_empty() {
            return Err(AuthError::InvalidInput("Password is required".to_string()));
        }

        let email = Email::new(&input.identifier)
            .map_err(|_| AuthError::InvalidInput("Invalid identifier".to_string()))?;

        // Lookup miss and hash mismatch collapse into one response below.
        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !account.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        // Password accepted: issue a fresh code. Storing it resets the
        // attempt counter in the same write.
        let code = OtpCode::generate();
        let expires_at = Utc::now() + self.config.otp_ttl_chrono();

        self.accounts
            .store_otp(&account.account_id, &code, expires_at)
            .await?;

        dispatch_code(self.notifier.clone(), account.email.clone(), code);

        tracing::info!(
            identifier = %account.email,
            "One-time code issued"
        );

        Ok(StartLoginOutput {
            identifier: account.email.to_string(),
        })
    }
}

/// Hand the code to the notifier without holding up the request.
///
/// The request already succeeded once the code is persisted; a delivery
/// failure is logged and the caller can use resend.
pub(crate) fn dispatch_code<N>(notifier: Arc<N>, email: Email, code: OtpCode)
where
    N: CodeNotifier + Send + Sync + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = notifier.send_code(&email, &code).await {
            tracing::warn!(
                error = %e,
                identifier = %email,
                "One-time code delivery failed"
            );
        }
    });
}
