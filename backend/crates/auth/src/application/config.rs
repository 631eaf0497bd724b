//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// One-time code validity window (5 minutes)
    pub otp_ttl: Duration,
    /// Failed verification attempts before lockout
    pub max_otp_attempts: u16,
    /// Session credential validity window (5 hours)
    pub session_ttl: Duration,
    /// Secret key for signing session credentials (32 bytes)
    pub token_secret: [u8; 32],
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            otp_ttl: Duration::from_secs(5 * 60),
            max_otp_attempts: 5,
            session_ttl: Duration::from_secs(5 * 3600),
            token_secret: [0u8; 32],
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Code TTL as a chrono duration (for expiry arithmetic)
    pub fn otp_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.otp_ttl.as_secs() as i64)
    }

    /// Session TTL in whole seconds
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();

        assert_eq!(config.otp_ttl, Duration::from_secs(300));
        assert_eq!(config.max_otp_attempts, 5);
        assert_eq!(config.session_ttl, Duration::from_secs(18_000));
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_ne!(config1.token_secret, config2.token_secret);
        assert!(config1.token_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_ttl_helpers() {
        let config = AuthConfig::default();
        assert_eq!(config.otp_ttl_chrono(), chrono::Duration::minutes(5));
        assert_eq!(config.session_ttl_secs(), 5 * 3600);
    }
}
