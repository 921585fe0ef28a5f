//! Push-notify pipeline: changed files in, type check + review email out
//!
//! Strictly sequential: type check, excerpt, review, render, deliver.
//! Nothing after the type check can change the exit-code decision; the
//! caller derives it from `NotifyRun::outcome.passed` alone.

use std::{fmt, sync::Arc};

use domain::{ChangedFileSet, EmailAddress, ReviewReport, TypeCheckOutcome};
use tracing::{info, instrument, warn};

use crate::ports::{
    ChangeSetReaderPort, EmailMessage, MailerPort, RendererPort, ReportEmailData, ReportFormat,
    TypeCheckPort,
};
use crate::prompt;
use crate::services::ReviewService;

/// Title used for the rendered notification email
const NOTIFY_TITLE: &str = "Push Analysis Report";

/// Paragraph shown above the report section
const NOTIFY_INTRO: &str =
    "Your push was type-checked and reviewed automatically. The detailed report follows:";

/// Result of one notify run
#[derive(Debug, Clone)]
pub struct NotifyRun {
    /// The type-check result; its flag alone decides the exit code
    pub outcome: TypeCheckOutcome,
    /// The review report that was (or would have been) delivered
    pub report: ReviewReport,
    /// Whether the email actually reached the SMTP endpoint
    pub delivered: bool,
}

/// Pipeline B: type check → prompt → review → email
pub struct PushNotifyPipeline {
    review: ReviewService,
    renderer: Arc<dyn RendererPort>,
    type_checker: Arc<dyn TypeCheckPort>,
    reader: Arc<dyn ChangeSetReaderPort>,
    mailer: Option<Arc<dyn MailerPort>>,
}

impl fmt::Debug for PushNotifyPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushNotifyPipeline")
            .field("review", &self.review)
            .field("mailer_configured", &self.mailer.is_some())
            .finish_non_exhaustive()
    }
}

impl PushNotifyPipeline {
    /// Create the pipeline
    pub fn new(
        review: ReviewService,
        renderer: Arc<dyn RendererPort>,
        type_checker: Arc<dyn TypeCheckPort>,
        reader: Arc<dyn ChangeSetReaderPort>,
        mailer: Option<Arc<dyn MailerPort>>,
    ) -> Self {
        Self {
            review,
            renderer,
            type_checker,
            reader,
            mailer,
        }
    }

    /// Run the pipeline for one push
    ///
    /// Infallible: every stage after input validation degrades per the
    /// policy table, so the run always reaches its exit-code decision.
    #[instrument(skip(self, files), fields(recipient = %recipient, file_count = files.len()))]
    pub async fn run(&self, recipient: &EmailAddress, files: &ChangedFileSet) -> NotifyRun {
        info!(files = ?files.paths(), "Analyzing push");

        let outcome = self.type_checker.run().await;
        info!(passed = outcome.passed, "Type check finished");

        let excerpts = self.reader.excerpts(files);
        let parts = prompt::type_check_review(&outcome.report, &excerpts);
        let report = self.review.review(&parts).await;

        // The service was asked for HTML, so newline substitution is off.
        let data =
            ReportEmailData::new(NOTIFY_TITLE, NOTIFY_INTRO, report.body(), ReportFormat::Html);
        let html_body = match self.renderer.render(&data) {
            Ok(html) => html,
            Err(e) => {
                warn!(error = %e, "Rendering failed, sending raw report body");
                report.body().to_string()
            },
        };

        let message = EmailMessage::new(recipient.clone(), outcome.subject_line(), html_body);
        let delivered = self.deliver(&message).await;

        if !outcome.passed {
            // Surface the diagnostics in the CI log next to the failing exit code.
            info!(report = %outcome.report, "Type errors detected, workflow will fail");
        }

        NotifyRun {
            outcome,
            report,
            delivered,
        }
    }

    /// Best-effort delivery; the body is dumped to the log whenever the
    /// email cannot go out, so the review stays visible somewhere.
    async fn deliver(&self, message: &EmailMessage) -> bool {
        let Some(mailer) = &self.mailer else {
            warn!("No mail credentials configured, dumping email body to log");
            info!(body = %message.html_body, "Undelivered review email");
            return false;
        };

        match mailer.send(message).await {
            Ok(()) => {
                info!(to = %message.to, "Email sent");
                true
            },
            Err(e) => {
                warn!(error = %e, "Email delivery failed, dumping body to log");
                info!(body = %message.html_body, "Undelivered review email");
                false
            },
        }
    }
}
