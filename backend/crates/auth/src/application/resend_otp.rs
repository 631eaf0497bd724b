//! Resend Code Use Case
//!
//! Re-runs the issue/persist/notify tail of StartLogin. A resend always
//! stores a fresh code with a zeroed attempt counter, superseding any
//! in-flight lockout.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::start_login::dispatch_code;
use crate::domain::notifier::CodeNotifier;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{email::Email, otp_code::OtpCode};
use crate::error::{AuthError, AuthResult};

/// Resend code use case
pub struct ResendOtpUseCase<R, N>
where
    R: AccountRepository,
    N: CodeNotifier + Send + Sync + 'static,
{
    accounts: Arc<R>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<R, N> ResendOtpUseCase<R, N>
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

    pub async fn execute(&self, identifier: &str) -> AuthResult<()> {
        let email = Email::new(identifier)
            .map_err(|_| AuthError::InvalidInput("Invalid identifier".to_string()))?;

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let code = OtpCode::generate();
        let expires_at = Utc::now() + self.config.otp_ttl_chrono();

        self.accounts
            .store_otp(&account.account_id, &code, expires_at)
            .await?;

        dispatch_code(self.notifier.clone(), account.email.clone(), code);

        tracing::info!(
            identifier = %account.email,
            "One-time code reissued"
        );

        Ok(())
    }
}
