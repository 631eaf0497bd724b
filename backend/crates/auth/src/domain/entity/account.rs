//! Account Entity
//!
//! An administrative user of the content backend, including the
//! one-time-code state driven by the login protocol.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_id::AccountId, account_password::AccountPassword, account_role::AccountRole,
    email::Email, otp_code::OtpCode,
};

/// Account entity
///
/// Invariant: `otp_code` and `otp_expires_at` are set and cleared together.
/// `otp_attempts` counts consecutive failed verifications since the current
/// code was issued and resets to zero whenever a new code is stored.
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Login identifier (unique, lowercased)
    pub email: Email,
    /// Hashed password
    pub password_hash: AccountPassword,
    /// Role (Editor, Admin)
    pub account_role: AccountRole,
    /// Currently active one-time code, if any
    pub otp_code: Option<OtpCode>,
    /// Absolute expiry of the active code
    pub otp_expires_at: Option<DateTime<Utc>>,
    /// Consecutive failed verification attempts for the active code
    pub otp_attempts: u16,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Entry decision for a verification attempt, evaluated in order.
///
/// Lockout wins over every other state: a locked account answers
/// `LockedOut` until a resend issues a fresh code.
#[derive(Debug)]
pub enum OtpGate<'a> {
    /// Too many failed attempts since the code was issued
    LockedOut,
    /// No code has been issued (or it was already consumed/cleared)
    NoActiveCode,
    /// A code exists but its expiry has passed
    Expired,
    /// A live code is available for comparison
    Active(&'a OtpCode),
}

impl Account {
    /// Create a new account (out-of-band provisioning)
    pub fn new(email: Email, password_hash: AccountPassword, account_role: AccountRole) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            email,
            password_hash,
            account_role,
            otp_code: None,
            otp_expires_at: None,
            otp_attempts: 0,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Evaluate the verification entry ladder for this account
    pub fn otp_gate(&self, max_attempts: u16) -> OtpGate<'_> {
        if self.otp_attempts >= max_attempts {
            return OtpGate::LockedOut;
        }

        let (code, expires_at) = match (&self.otp_code, self.otp_expires_at) {
            (Some(code), Some(expires_at)) => (code, expires_at),
            _ => return OtpGate::NoActiveCode,
        };

        if expires_at < Utc::now() {
            return OtpGate::Expired;
        }

        OtpGate::Active(code)
    }

    /// Whether a code is currently stored (regardless of expiry)
    pub fn has_active_code(&self) -> bool {
        self.otp_code.is_some() && self.otp_expires_at.is_some()
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::account_password::RawPassword;
    use chrono::Duration;

    fn test_account() -> Account {
        let raw = RawPassword::new("CorrectHorse9!".to_string()).unwrap();
        let hash = AccountPassword::from_raw(&raw).unwrap();
        Account::new(
            Email::new("admin@example.com").unwrap(),
            hash,
            AccountRole::Admin,
        )
    }

    #[test]
    fn test_gate_no_active_code() {
        let account = test_account();
        assert!(matches!(account.otp_gate(5), OtpGate::NoActiveCode));
        assert!(!account.has_active_code());
    }

    #[test]
    fn test_gate_active_code() {
        let mut account = test_account();
        account.otp_code = Some(OtpCode::new("314159").unwrap());
        account.otp_expires_at = Some(Utc::now() + Duration::minutes(5));

        match account.otp_gate(5) {
            OtpGate::Active(code) => assert!(code.matches("314159")),
            other => panic!("expected Active, got {:?}", other),
        }
    }

    #[test]
    fn test_gate_expired_code() {
        let mut account = test_account();
        account.otp_code = Some(OtpCode::new("314159").unwrap());
        account.otp_expires_at = Some(Utc::now() - Duration::milliseconds(1));

        assert!(matches!(account.otp_gate(5), OtpGate::Expired));
    }

    #[test]
    fn test_gate_lockout_wins_over_everything() {
        let mut account = test_account();
        account.otp_attempts = 5;

        // Locked with no code stored
        assert!(matches!(account.otp_gate(5), OtpGate::LockedOut));

        // Locked even with a live code stored
        account.otp_code = Some(OtpCode::new("314159").unwrap());
        account.otp_expires_at = Some(Utc::now() + Duration::minutes(5));
        assert!(matches!(account.otp_gate(5), OtpGate::LockedOut));
    }

    #[test]
    fn test_record_login() {
        let mut account = test_account();
        assert!(account.last_login_at.is_none());
        account.record_login();
        assert!(account.last_login_at.is_some());
    }
}
