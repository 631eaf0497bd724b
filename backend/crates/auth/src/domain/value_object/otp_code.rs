//! One-Time Code Value Object
//!
//! The 6-digit numeric code emailed as the second login factor.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

/// One-time code value object
///
/// Always exactly [`OtpCode::LENGTH`] ASCII digits. Comparison against a
/// submitted candidate is constant-time.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Code length in digits
    pub const LENGTH: usize = 6;

    /// Generate a uniformly random code in `100000..=999999`
    ///
    /// The first digit is never zero, so the code survives any
    /// string/number round-trip a client might put it through.
    pub fn generate() -> Self {
        use rand::Rng;
        let value: u32 = rand::rng().random_range(100_000..=999_999);
        Self(value.to_string())
    }

    /// Create from a stored value with validation
    pub fn new(code: impl Into<String>) -> AppResult<Self> {
        let code = code.into();

        if code.len() != Self::LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::internal("Malformed one-time code"));
        }

        Ok(Self(code))
    }

    /// Get the code as a string slice (for delivery and storage)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a submitted candidate in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        platform::crypto::constant_time_eq(self.0.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OtpCode").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        for _ in 0..64 {
            let code = OtpCode::generate();
            assert_eq!(code.as_str().len(), OtpCode::LENGTH);
            assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));

            let value: u32 = code.as_str().parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_new_validation() {
        assert!(OtpCode::new("123456").is_ok());
        assert!(OtpCode::new("000000").is_ok());
        assert!(OtpCode::new("12345").is_err());
        assert!(OtpCode::new("1234567").is_err());
        assert!(OtpCode::new("12345a").is_err());
        assert!(OtpCode::new("").is_err());
    }

    #[test]
    fn test_matches() {
        let code = OtpCode::new("314159").unwrap();
        assert!(code.matches("314159"));
        assert!(!code.matches("314158"));
        assert!(!code.matches("31415"));
        assert!(!code.matches(""));
    }

    #[test]
    fn test_debug_redaction() {
        let code = OtpCode::new("314159").unwrap();
        let debug = format!("{:?}", code);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("314159"));
    }
}
