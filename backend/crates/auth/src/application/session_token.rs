//! Session Token Issuance and Verification
//!
//! The session credential is a signed, self-contained claims token
//! (HS256). It is minted only by a fully successful code verification and
//! consumed by the authorization middleware in front of protected routes.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::error::{AuthError, AuthResult};

/// Claims carried by a session credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account ID
    pub sub: String,
    /// Login identifier
    pub identifier: String,
    /// Role code ("editor" / "admin")
    pub role: String,
    /// Issued at (Unix seconds)
    pub iat: usize,
    /// Expiration (Unix seconds)
    pub exp: usize,
}

/// Mint a session credential for a fully authenticated account
pub fn issue_session_token(account: &Account, config: &AuthConfig) -> AuthResult<String> {
    let now = Utc::now();
    let exp = now + chrono::Duration::seconds(config.session_ttl_secs());

    let claims = SessionClaims {
        sub: account.account_id.to_string(),
        identifier: account.email.to_string(),
        role: account.account_role.code().to_string(),
        iat: now.timestamp() as usize,
        exp: exp.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(&config.token_secret),
    )
    .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))
}

/// Verify a session credential and return its claims
///
/// Signature and expiry are both checked; any failure collapses to
/// `TokenInvalid` so callers leak nothing about which check failed.
pub fn verify_session_token(token: &str, config: &AuthConfig) -> AuthResult<SessionClaims> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&config.token_secret),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::TokenInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        account_password::{AccountPassword, RawPassword},
        account_role::AccountRole,
        email::Email,
    };

    fn test_account() -> Account {
        let raw = RawPassword::new("CorrectHorse9!".to_string()).unwrap();
        Account::new(
            Email::new("admin@example.com").unwrap(),
            AccountPassword::from_raw(&raw).unwrap(),
            AccountRole::Admin,
        )
    }

    #[test]
    fn test_token_roundtrip() {
        let config = AuthConfig::with_random_secret();
        let account = test_account();

        let token = issue_session_token(&account, &config).unwrap();
        let claims = verify_session_token(&token, &config).unwrap();

        assert_eq!(claims.sub, account.account_id.to_string());
        assert_eq!(claims.identifier, "admin@example.com");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp - claims.iat, 5 * 3600);
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let config = AuthConfig::with_random_secret();
        let other = AuthConfig::with_random_secret();
        let account = test_account();

        let token = issue_session_token(&account, &config).unwrap();
        assert!(matches!(
            verify_session_token(&token, &other),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = AuthConfig::with_random_secret();
        let account = test_account();

        let mut token = issue_session_token(&account, &config).unwrap();
        // Flip a character in the payload section
        let flipped = if token.ends_with('a') { 'b' } else { 'a' };
        token.pop();
        token.push(flipped);

        assert!(matches!(
            verify_session_token(&token, &config),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = AuthConfig::with_random_secret();
        let account = test_account();

        // Craft claims whose expiry is well past the default leeway
        let now = Utc::now().timestamp() as usize;
        let claims = SessionClaims {
            sub: account.account_id.to_string(),
            identifier: account.email.to_string(),
            role: account.account_role.code().to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.token_secret),
        )
        .unwrap();

        assert!(matches!(
            verify_session_token(&token, &config),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let config = AuthConfig::with_random_secret();
        assert!(matches!(
            verify_session_token("not-a-token", &config),
            Err(AuthError::TokenInvalid)
        ));
    }
}
