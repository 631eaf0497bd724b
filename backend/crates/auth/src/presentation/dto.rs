//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Start Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login identifier (email)
    pub identifier: String,
    pub password: String,
}

/// Login response
///
/// Confirms a code was issued and echoes the identifier for client-side
/// step sequencing. Nothing secret crosses back to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub otp_sent: bool,
    pub session_data: SessionData,
}

/// Client-side step sequencing data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub identifier: String,
}

// ============================================================================
// Verify Code
// ============================================================================

/// Code verification request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub identifier: String,
    pub code: String,
}

/// Code verification response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    /// Opaque bearer credential
    pub token: String,
    pub message: String,
}

// ============================================================================
// Resend Code
// ============================================================================

/// Code resend request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    pub identifier: String,
}

/// Code resend response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpResponse {
    pub message: String,
}

// ============================================================================
// Current Account (for authenticated admins)
// ============================================================================

/// Current account info response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAccountResponse {
    pub account_id: String,
    pub identifier: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_serialization() {
        let response = LoginResponse {
            otp_sent: true,
            session_data: SessionData {
                identifier: "admin@example.com".to_string(),
            },
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""otpSent":true"#));
        assert!(json.contains(r#""sessionData""#));
        assert!(json.contains(r#""identifier":"admin@example.com""#));
    }

    #[test]
    fn test_login_request_deserialization() {
        let json = r#"{"identifier":"admin@example.com","password":"hunter2hunter2"}"#;
        let request: LoginRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.identifier, "admin@example.com");
        assert_eq!(request.password, "hunter2hunter2");
    }

    #[test]
    fn test_verify_request_deserialization() {
        let json = r#"{"identifier":"admin@example.com","code":"123456"}"#;
        let request: VerifyOtpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.identifier, "admin@example.com");
        assert_eq!(request.code, "123456");
    }

    #[test]
    fn test_verify_response_serialization() {
        let response = VerifyOtpResponse {
            token: "abc.def.ghi".to_string(),
            message: "Login successful".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""token":"abc.def.ghi""#));
        assert!(json.contains(r#""message""#));
    }
}
