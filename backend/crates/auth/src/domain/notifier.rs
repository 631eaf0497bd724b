//! Code Notifier Trait
//!
//! Interface for delivering one-time codes. Delivery is fire-and-forget:
//! failures are logged by the caller and never surfaced to the client,
//! because the code is already persisted and independently resendable.

use crate::domain::value_object::{email::Email, otp_code::OtpCode};
use thiserror::Error;

/// Notifier delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Address could not be parsed by the transport
    #[error("Invalid mail address: {0}")]
    InvalidAddress(String),

    /// Message could not be assembled
    #[error("Message build failed: {0}")]
    Message(String),

    /// Transport-level failure (connection, auth, submission)
    #[error("Transport error: {0}")]
    Transport(String),
}

/// One-time code notifier trait
#[trait_variant::make(CodeNotifier: Send)]
pub trait LocalCodeNotifier {
    /// Deliver a one-time code to the account's login address
    async fn send_code(&self, to: &Email, code: &OtpCode) -> Result<(), NotifyError>;
}
