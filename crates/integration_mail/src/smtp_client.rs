//! SMTP client for the mail submission endpoint
//!
//! Lightweight implementation over tokio and tokio-native-tls: implicit TLS
//! on the submission port, AUTH PLAIN, a single recipient per message.

use base64::Engine;
use secrecy::ExposeSecret;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
};
use tokio_native_tls::TlsConnector;
use tracing::{debug, error, instrument, trace};

use crate::{EmailComposition, MailConfig, MailError};

/// SMTP client for the configured submission endpoint
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: MailConfig,
}

impl SmtpMailer {
    /// Creates a new mailer with the given configuration
    pub const fn new(config: MailConfig) -> Self {
        Self { config }
    }

    /// Sends an email to its single recipient
    ///
    /// Returns the generated message id.
    #[instrument(skip(self, email), fields(to = %email.to))]
    pub async fn send_email(&self, email: &EmailComposition) -> Result<String, MailError> {
        debug!(subject = %email.subject, "Sending email");

        let message_id = format!(
            "<{}.{}@{}>",
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4(),
            Self::extract_domain(&self.config.sender)
        );

        let content = self.build_mime_content(email, &message_id);
        self.send_smtp(&email.to, &content).await?;

        debug!(message_id = %message_id, "Email sent successfully");
        Ok(message_id)
    }

    /// Builds the message in RFC 5322 format: multipart/alternative with
    /// one HTML part
    fn build_mime_content(&self, email: &EmailComposition, message_id: &str) -> String {
        let date = chrono::Utc::now().format("%a, %d %b %Y %H:%M:%S +0000");
        let boundary = format!("=_pushreview_{}", uuid::Uuid::new_v4().simple());

        format!(
            "From: {from}\r\n\
             To: {to}\r\n\
             Subject: {subject}\r\n\
             Date: {date}\r\n\
             Message-ID: {message_id}\r\n\
             MIME-Version: 1.0\r\n\
             Content-Type: multipart/alternative; boundary=\"{boundary}\"\r\n\
             \r\n\
             --{boundary}\r\n\
             Content-Type: text/html; charset=utf-8\r\n\
             Content-Transfer-Encoding: 8bit\r\n\
             \r\n\
             {body}\r\n\
             --{boundary}--\r\n",
            from = self.config.sender,
            to = email.to,
            subject = email.subject,
            body = email.html_body,
        )
    }

    /// Opens the implicit-TLS connection and runs the session
    async fn send_smtp(&self, to: &str, content: &str) -> Result<(), MailError> {
        let addr = format!("{}:{}", self.config.smtp_host, self.config.smtp_port);

        let stream = TcpStream::connect(&addr).await.map_err(|e| {
            error!(error = %e, "Failed to connect to SMTP server");
            MailError::ConnectionFailed(format!("SMTP connection failed: {e}"))
        })?;

        let connector = native_tls::TlsConnector::new()
            .map_err(|e| MailError::ConnectionFailed(format!("TLS builder failed: {e}")))?;
        let tls = TlsConnector::from(connector);

        let tls_stream = tls
            .connect(&self.config.smtp_host, stream)
            .await
            .map_err(|e| MailError::ConnectionFailed(format!("TLS handshake failed: {e}")))?;

        self.smtp_session(tls_stream, to, content).await
    }

    /// Runs the SMTP conversation over the established TLS stream
    async fn smtp_session<S>(&self, stream: S, to: &str, content: &str) -> Result<(), MailError>
    where
        S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
    {
        let (reader, mut writer) = tokio::io::split(stream);
        let mut reader = BufReader::new(reader);

        // Read greeting
        self.read_response(&mut reader).await?;

        // Send EHLO
        let hostname = hostname::get().map_or_else(
            |_| "localhost".to_string(),
            |h| h.to_string_lossy().to_string(),
        );
        self.send_command(&mut writer, &format!("EHLO {hostname}"))
            .await?;
        self.read_response(&mut reader).await?;

        // Authenticate using AUTH PLAIN
        let auth_string = format!(
            "\0{}\0{}",
            self.config.sender,
            self.config.password.expose_secret()
        );
        let auth_b64 = base64::engine::general_purpose::STANDARD.encode(auth_string);

        self.send_command(&mut writer, &format!("AUTH PLAIN {auth_b64}"))
            .await?;
        let auth_response = self.read_response(&mut reader).await?;
        if !auth_response.starts_with("235") {
            return Err(MailError::AuthenticationFailed);
        }

        // MAIL FROM
        self.send_command(&mut writer, &format!("MAIL FROM:<{}>", self.config.sender))
            .await?;
        self.expect_response(&mut reader, "250").await?;

        // RCPT TO (single recipient)
        self.send_command(&mut writer, &format!("RCPT TO:<{to}>"))
            .await?;
        self.expect_response(&mut reader, "250").await?;

        // DATA
        self.send_command(&mut writer, "DATA").await?;
        self.expect_response(&mut reader, "354").await?;

        // Send content (escape dots at start of lines)
        let escaped_content = content.replace("\r\n.", "\r\n..");
        writer
            .write_all(escaped_content.as_bytes())
            .await
            .map_err(|e| MailError::SmtpError(format!("Failed to send content: {e}")))?;

        // End DATA with <CRLF>.<CRLF>
        writer
            .write_all(b"\r\n.\r\n")
            .await
            .map_err(|e| MailError::SmtpError(format!("Failed to end DATA: {e}")))?;
        writer.flush().await.ok();

        self.expect_response(&mut reader, "250").await?;

        // QUIT
        self.send_command(&mut writer, "QUIT").await?;
        // Don't wait for QUIT response, server may close connection

        Ok(())
    }

    /// Sends an SMTP command
    async fn send_command<W>(&self, writer: &mut W, command: &str) -> Result<(), MailError>
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        trace!(command = %command.split(' ').next().unwrap_or(command), "Sending SMTP command");
        writer
            .write_all(format!("{command}\r\n").as_bytes())
            .await
            .map_err(|e| MailError::SmtpError(format!("Failed to send command: {e}")))?;
        writer.flush().await.ok();
        Ok(())
    }

    /// Reads an SMTP response (possibly multi-line)
    async fn read_response<R>(&self, reader: &mut BufReader<R>) -> Result<String, MailError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let mut response = String::new();
        loop {
            let mut line = String::new();
            reader
                .read_line(&mut line)
                .await
                .map_err(|e| MailError::SmtpError(format!("Failed to read response: {e}")))?;

            trace!(line = %line.trim(), "SMTP response");
            response.push_str(&line);

            // Check if this is the last line (no hyphen after code)
            if line.len() >= 4 && line.chars().nth(3) != Some('-') {
                break;
            }
        }
        Ok(response)
    }

    /// Expects a specific response code
    async fn expect_response<R>(
        &self,
        reader: &mut BufReader<R>,
        expected_code: &str,
    ) -> Result<(), MailError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let response = self.read_response(reader).await?;
        if !response.starts_with(expected_code) {
            return Err(MailError::SmtpError(format!(
                "Expected {expected_code}, got: {response}"
            )));
        }
        Ok(())
    }

    /// Extracts domain from an email address
    fn extract_domain(email: &str) -> String {
        email.split('@').nth(1).unwrap_or("pushreview.local").to_string()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn test_config() -> MailConfig {
        MailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 1025,
            sender: "ci-bot@example.com".to_string(),
            password: SecretString::from("app-password".to_string()),
        }
    }

    #[test]
    fn mailer_creation() {
        let mailer = SmtpMailer::new(test_config());
        assert!(format!("{mailer:?}").contains("SmtpMailer"));
    }

    #[test]
    fn extract_domain_from_address() {
        assert_eq!(SmtpMailer::extract_domain("user@example.com"), "example.com");
        assert_eq!(SmtpMailer::extract_domain("a@b.org"), "b.org");
    }

    #[test]
    fn extract_domain_fallback() {
        assert_eq!(
            SmtpMailer::extract_domain("invalid-address"),
            "pushreview.local"
        );
    }

    #[tokio::test]
    async fn send_fails_for_unreachable_server() {
        let config = MailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 19999, // nothing listens here
            sender: "ci-bot@example.com".to_string(),
            password: SecretString::from("app-password".to_string()),
        };
        let mailer = SmtpMailer::new(config);

        let email = EmailComposition::new("dev@example.com", "Subject", "<p>Body</p>");
        let err = mailer.send_email(&email).await.unwrap_err();
        assert!(matches!(err, MailError::ConnectionFailed(_)));
    }

    #[test]
    fn mime_content_has_required_headers() {
        let mailer = SmtpMailer::new(test_config());
        let email = EmailComposition::new("dev@example.com", "Check passed", "<p>All good</p>");

        let content = mailer.build_mime_content(&email, "<123@example.com>");

        assert!(content.contains("From: ci-bot@example.com\r\n"));
        assert!(content.contains("To: dev@example.com\r\n"));
        assert!(content.contains("Subject: Check passed\r\n"));
        assert!(content.contains("Message-ID: <123@example.com>\r\n"));
        assert!(content.contains("MIME-Version: 1.0\r\n"));
    }

    #[test]
    fn mime_content_is_multipart_alternative_with_html_part() {
        let mailer = SmtpMailer::new(test_config());
        let email = EmailComposition::new("dev@example.com", "Subject", "<p>Body</p>");

        let content = mailer.build_mime_content(&email, "<id@example.com>");

        assert!(content.contains("Content-Type: multipart/alternative; boundary="));
        assert!(content.contains("Content-Type: text/html; charset=utf-8\r\n"));
        assert!(content.contains("<p>Body</p>\r\n"));
        // Closing boundary terminates the message
        assert!(content.trim_end().ends_with("--"));
    }

    #[test]
    fn mime_body_follows_blank_line() {
        let mailer = SmtpMailer::new(test_config());
        let email = EmailComposition::new("dev@example.com", "S", "<p>x</p>");

        let content = mailer.build_mime_content(&email, "<id@example.com>");
        let headers_end = content.find("\r\n\r\n").unwrap();
        assert!(content[..headers_end].contains("Content-Type: multipart/alternative"));
    }
}
