//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! The one-time-code mutations are deliberately narrow so that each maps to
//! a single conditional statement: the attempt counter is incremented only
//! while a code is still stored, and a successful match consumes the code
//! with a compare-and-set. Concurrent requests for the same account resolve
//! last-write-wins; there is no cross-request lock.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{account_id::AccountId, email::Email, otp_code::OtpCode};
use crate::error::AuthResult;
use chrono::{DateTime, Utc};

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by login identifier (already lowercased by `Email`)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Store a freshly issued code: sets code + expiry, resets the attempt
    /// counter to zero in the same write
    async fn store_otp(
        &self,
        account_id: &AccountId,
        code: &OtpCode,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<()>;

    /// Atomically increment the attempt counter, guarded on a code still
    /// being stored. Returns the new counter value (0 if no code remained).
    async fn record_otp_mismatch(&self, account_id: &AccountId) -> AuthResult<u16>;

    /// Atomically consume the stored code if it still equals `code`:
    /// clears the code pair and resets the attempt counter.
    /// Returns false if the stored code was already gone or replaced.
    async fn consume_otp(&self, account_id: &AccountId, code: &str) -> AuthResult<bool>;

    /// Clear the code pair (expiry/lockout paths). Leaves the attempt
    /// counter untouched so a locked account stays locked until resend.
    async fn clear_otp(&self, account_id: &AccountId) -> AuthResult<()>;

    /// Record a successful login
    async fn record_login(&self, account_id: &AccountId) -> AuthResult<()>;
}
