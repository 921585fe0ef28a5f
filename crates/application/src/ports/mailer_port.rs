//! Mailer port - interface for email submission

use async_trait::async_trait;
use domain::EmailAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mailer port errors
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),
}

/// An outgoing notification email
///
/// Exactly one recipient; the body is a self-contained HTML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address
    pub to: EmailAddress,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html_body: String,
}

impl EmailMessage {
    /// Create a new message
    pub fn new(to: EmailAddress, subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }
}

/// Port for email delivery
#[async_trait]
pub trait MailerPort: Send + Sync {
    /// Submit the message to its single recipient
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError>;
}
