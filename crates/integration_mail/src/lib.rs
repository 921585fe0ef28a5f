//! Mail submission integration
//!
//! Async SMTP client for delivering the review email over implicit TLS.

mod smtp_client;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use smtp_client::SmtpMailer;

/// Mail integration errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("SMTP error: {0}")]
    SmtpError(String),
}

/// Connection and credential settings for the submission endpoint
#[derive(Clone)]
pub struct MailConfig {
    /// Submission host
    pub smtp_host: String,
    /// Submission port (implicit TLS)
    pub smtp_port: u16,
    /// Sender address, also the login name
    pub sender: String,
    /// App-specific password
    pub password: SecretString,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("sender", &self.sender)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A composed email ready for submission
///
/// One recipient, one HTML body; the MIME envelope is built at send time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailComposition {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html_body: String,
}

impl EmailComposition {
    /// Create a new composition
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }
}
