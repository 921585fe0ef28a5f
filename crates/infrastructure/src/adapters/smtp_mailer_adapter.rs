//! Mailer adapter - implements MailerPort using integration_mail

use application::ports::{EmailMessage, MailerError, MailerPort};
use async_trait::async_trait;
use integration_mail::{EmailComposition, MailConfig, MailError, SmtpMailer};
use tracing::instrument;

/// Adapter for SMTP delivery
#[derive(Debug)]
pub struct SmtpMailerAdapter {
    mailer: SmtpMailer,
}

impl SmtpMailerAdapter {
    /// Create a new adapter with the given configuration
    pub const fn new(config: MailConfig) -> Self {
        Self {
            mailer: SmtpMailer::new(config),
        }
    }

    fn map_error(e: MailError) -> MailerError {
        match e {
            MailError::ConnectionFailed(msg) => MailerError::ConnectionFailed(msg),
            MailError::AuthenticationFailed => MailerError::AuthenticationFailed,
            MailError::SmtpError(msg) => MailerError::SubmissionFailed(msg),
        }
    }
}

#[async_trait]
impl MailerPort for SmtpMailerAdapter {
    #[instrument(skip(self, message), fields(to = %message.to))]
    async fn send(&self, message: &EmailMessage) -> Result<(), MailerError> {
        let composition = EmailComposition::new(
            message.to.as_str(),
            message.subject.clone(),
            message.html_body.clone(),
        );

        self.mailer
            .send_email(&composition)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}
