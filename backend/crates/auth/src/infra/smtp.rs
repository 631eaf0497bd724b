//! SMTP Notifier Implementation
//!
//! Delivers one-time codes over authenticated SMTP. The transport is
//! constructed once at startup and shared; delivery runs on a detached
//! task, so errors here only ever reach the logs.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::notifier::{CodeNotifier, NotifyError};
use crate::domain::value_object::{email::Email, otp_code::OtpCode};

/// SMTP-backed code notifier
pub struct SmtpCodeNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpCodeNotifier {
    /// Build a relay transport with credentials
    pub fn new(host: &str, user: &str, pass: &str, from: &str) -> Result<Self, NotifyError> {
        let creds = Credentials::new(user.to_string(), pass.to_string());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        let from = from
            .parse()
            .map_err(|_| NotifyError::InvalidAddress(from.to_string()))?;

        Ok(Self { mailer, from })
    }
}

impl CodeNotifier for SmtpCodeNotifier {
    async fn send_code(&self, to: &Email, code: &OtpCode) -> Result<(), NotifyError> {
        let to_mailbox: Mailbox = to
            .as_str()
            .parse()
            .map_err(|_| NotifyError::InvalidAddress(to.to_string()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject("Your sign-in code")
            .body(format!(
                "Your one-time sign-in code is {}.\n\n\
                 It expires in a few minutes. If you did not request it, \
                 you can ignore this email.",
                code.as_str()
            ))
            .map_err(|e| NotifyError::Message(e.to_string()))?;

        self.mailer
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// Development fallback when SMTP is not configured: the code goes to the
/// log instead of an inbox.
pub struct LogOnlyNotifier;

impl CodeNotifier for LogOnlyNotifier {
    async fn send_code(&self, to: &Email, code: &OtpCode) -> Result<(), NotifyError> {
        tracing::info!(
            identifier = %to,
            code = code.as_str(),
            "SMTP not configured, delivering one-time code via log"
        );
        Ok(())
    }
}
