//! Verify Code Use Case
//!
//! Second protocol step: checks the submitted one-time code and mints the
//! session credential. A credential is issued if and only if the code
//! matches while neither expired nor locked out; every failure path leaves
//! no usable session behind.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_token::issue_session_token;
use crate::domain::entity::account::OtpGate;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{email::Email, otp_code::OtpCode};
use crate::error::{AuthError, AuthResult};

/// Verify code input
pub struct VerifyOtpInput {
    /// Login identifier (email)
    pub identifier: String,
    /// Submitted one-time code
    pub code: String,
}

/// Verify code output
pub struct VerifyOtpOutput {
    /// Signed session credential
    pub token: String,
}

/// Verify code use case
pub struct VerifyOtpUseCase<R>
where
    R: AccountRepository,
{
    accounts: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> VerifyOtpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(accounts: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { accounts, config }
    }

    pub async fn execute(&self, input: VerifyOtpInput) -> AuthResult<VerifyOtpOutput> {
        if input.code.len() != OtpCode::LENGTH {
            return Err(AuthError::InvalidInput(format!(
                "Code must be exactly {} characters",
                OtpCode::LENGTH
            )));
        }

        let email = Email::new(&input.identifier)
            .map_err(|_| AuthError::InvalidInput("Invalid identifier".to_string()))?;

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let stored = match account.otp_gate(self.config.max_otp_attempts) {
            OtpGate::LockedOut => {
                self.accounts.clear_otp(&account.account_id).await?;
                tracing::warn!(
                    identifier = %account.email,
                    attempts = account.otp_attempts,
                    "Account locked out, code invalidated"
                );
                return Err(AuthError::LockedOut);
            }
            OtpGate::NoActiveCode => return Err(AuthError::NoActiveCode),
            OtpGate::Expired => {
                self.accounts.clear_otp(&account.account_id).await?;
                return Err(AuthError::CodeExpired);
            }
            OtpGate::Active(stored) => stored,
        };

        if !stored.matches(&input.code) {
            // Persist the failed attempt before answering, so repeated
            // wrong guesses monotonically approach lockout.
            let attempts = self
                .accounts
                .record_otp_mismatch(&account.account_id)
                .await?;
            tracing::warn!(
                identifier = %account.email,
                attempts,
                "One-time code mismatch"
            );
            return Err(AuthError::CodeMismatch);
        }

        // Compare-and-set consume: if a concurrent request already used or
        // replaced the code, no second credential is minted.
        let consumed = self
            .accounts
            .consume_otp(&account.account_id, stored.as_str())
            .await?;

        if !consumed {
            return Err(AuthError::NoActiveCode);
        }

        let token = issue_session_token(&account, &self.config)?;

        self.accounts.record_login(&account.account_id).await?;

        tracing::info!(
            identifier = %account.email,
            role = %account.account_role,
            "Login completed, session credential issued"
        );

        Ok(VerifyOtpOutput { token })
    }
}
