//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_password::AccountPassword, account_role::AccountRole,
    email::Email, otp_code::OtpCode,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clear one-time codes whose expiry has passed (startup sweep)
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let cleared = sqlx::query(
            r#"
            UPDATE accounts
            SET otp_code = NULL, otp_expires_at = NULL, updated_at = now()
            WHERE otp_expires_at < now()
            "#,
        )
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::info!(codes_cleared = cleared, "Cleaned up expired one-time codes");

        Ok(cleared)
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                email,
                password_hash,
                account_role,
                otp_code,
                otp_expires_at,
                otp_attempts,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.account_role.id())
        .bind(account.otp_code.as_ref().map(|c| c.as_str()))
        .bind(account.otp_expires_at)
        .bind(account.otp_attempts as i16)
        .bind(account.last_login_at)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                email,
                password_hash,
                account_role,
                otp_code,
                otp_expires_at,
                otp_attempts,
                last_login_at,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn store_otp(
        &self,
        account_id: &AccountId,
        code: &OtpCode,
        expires_at: DateTime<Utc>,
    ) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                otp_code = $2,
                otp_expires_at = $3,
                otp_attempts = 0,
                updated_at = now()
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(code.as_str())
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn record_otp_mismatch(&self, account_id: &AccountId) -> AuthResult<u16> {
        // Guarded increment: a concurrent consume/clear removes the code and
        // with it the ability to accrue further attempts.
        let attempts = sqlx::query_scalar::<_, i16>(
            r#"
            UPDATE accounts SET
                otp_attempts = otp_attempts + 1,
                updated_at = now()
            WHERE account_id = $1 AND otp_code IS NOT NULL
            RETURNING otp_attempts
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(attempts.unwrap_or(0) as u16)
    }

    async fn consume_otp(&self, account_id: &AccountId, code: &str) -> AuthResult<bool> {
        // Compare-and-set: only the request whose code still matches the
        // stored value clears it and may mint a credential.
        let consumed = sqlx::query(
            r#"
            UPDATE accounts SET
                otp_code = NULL,
                otp_expires_at = NULL,
                otp_attempts = 0,
                updated_at = now()
            WHERE account_id = $1 AND otp_code = $2
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(code)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(consumed == 1)
    }

    async fn clear_otp(&self, account_id: &AccountId) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                otp_code = NULL,
                otp_expires_at = NULL,
                updated_at = now()
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn record_login(&self, account_id: &AccountId) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                last_login_at = now(),
                updated_at = now()
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    password_hash: String,
    account_role: i16,
    otp_code: Option<String>,
    otp_expires_at: Option<DateTime<Utc>>,
    otp_attempts: i16,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password_hash = AccountPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        let otp_code = self
            .otp_code
            .map(OtpCode::new)
            .transpose()
            .map_err(|e| AuthError::Internal(format!("Invalid stored code: {}", e)))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            password_hash,
            account_role: AccountRole::from_id(self.account_role),
            otp_code,
            otp_expires_at: self.otp_expires_at,
            otp_attempts: self.otp_attempts as u16,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
