//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod resend_otp;
pub mod session_token;
pub mod start_login;
pub mod verify_otp;

// Re-exports
pub use config::AuthConfig;
pub use resend_otp::ResendOtpUseCase;
pub use session_token::{SessionClaims, issue_session_token, verify_session_token};
pub use start_login::{StartLoginInput, StartLoginOutput, StartLoginUseCase};
pub use verify_otp::{VerifyOtpInput, VerifyOtpOutput, VerifyOtpUseCase};
