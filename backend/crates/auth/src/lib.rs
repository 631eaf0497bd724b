//! Auth (Two-Factor Login) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and SMTP implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Password + emailed one-time code login for administrators
//! - Signed, time-limited session credentials (bearer tokens)
//! - Attempt counting with lockout on repeated wrong codes
//! - Self-service code resend
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - One-time codes compared in constant time and consumed atomically
//! - Missing account and wrong password collapse to one response
//! - Session credentials carry role claims checked by middleware

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAccountRepository;
pub use infra::smtp::{LogOnlyNotifier, SmtpCodeNotifier};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
