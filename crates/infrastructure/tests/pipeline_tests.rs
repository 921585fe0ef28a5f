//! End-to-end pipeline tests over the real adapters
//!
//! Wires the application pipelines to the real template engine, the real
//! subprocess checker, and the real filesystem reader; only the AI service
//! and SMTP endpoint stay out (unconfigured, exercising the degraded paths).

use std::io::Write;
use std::sync::Arc;

use application::ports::{MailerPort, RendererPort, TypeCheckPort};
use application::{FileReviewPipeline, PushNotifyPipeline, ReviewService};
use domain::{
    ChangedFileSet, EmailAddress, SAMPLE_MARKER, SUBJECT_CHECK_FAILED, SUBJECT_CHECK_PASSED,
    TypeCheckOutcome,
};
use infrastructure::{FsChangeSetReader, ReportTemplateEngine, SubprocessTypeChecker};
use tempfile::TempDir;

fn renderer() -> Arc<dyn RendererPort> {
    Arc::new(ReportTemplateEngine::new().unwrap())
}

/// Review service with no inference client: every report is the sample.
fn unconfigured_review() -> ReviewService {
    ReviewService::new(None)
}

#[tokio::test]
async fn file_review_without_credentials_writes_sample_document() {
    let pipeline = FileReviewPipeline::new(unconfigured_review(), renderer());

    let html = pipeline.run("+ def f(): pass").await.unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(SAMPLE_MARKER));
    // Markdownish embedding converted the sample's newlines
    assert!(html.contains("<br>"));
}

#[tokio::test]
async fn notify_exit_decision_follows_the_checker_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.py");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"x: int = 1\n").unwrap();

    let recipient = EmailAddress::new("dev@example.com").unwrap();
    let files = ChangedFileSet::from_args([path.to_string_lossy().into_owned()]);

    // `true` exits zero: the run must pass despite no AI and no mailer.
    let passing = PushNotifyPipeline::new(
        unconfigured_review(),
        renderer(),
        Arc::new(SubprocessTypeChecker::new("true", [])),
        Arc::new(FsChangeSetReader::new()),
        None::<Arc<dyn MailerPort>>,
    );
    let run = passing.run(&recipient, &files).await;
    assert!(run.outcome.passed);
    assert_eq!(run.outcome.subject_line(), SUBJECT_CHECK_PASSED);
    assert!(!run.delivered);

    // `false` exits nonzero: the run must fail despite everything else
    // degrading identically.
    let failing = PushNotifyPipeline::new(
        unconfigured_review(),
        renderer(),
        Arc::new(SubprocessTypeChecker::new("false", [])),
        Arc::new(FsChangeSetReader::new()),
        None::<Arc<dyn MailerPort>>,
    );
    let run = failing.run(&recipient, &files).await;
    assert!(!run.outcome.passed);
    assert_eq!(run.outcome.subject_line(), SUBJECT_CHECK_FAILED);
}

#[tokio::test]
async fn notify_survives_a_missing_checker_binary() {
    let recipient = EmailAddress::new("dev@example.com").unwrap();
    let files = ChangedFileSet::from_args(["app.py"]);

    let checker: Arc<dyn TypeCheckPort> =
        Arc::new(SubprocessTypeChecker::new("no-such-type-checker", []));
    let pipeline = PushNotifyPipeline::new(
        unconfigured_review(),
        renderer(),
        checker,
        Arc::new(FsChangeSetReader::new()),
        None,
    );

    let run = pipeline.run(&recipient, &files).await;
    assert!(!run.outcome.passed);
    assert!(run.outcome.report.contains("Failed to run"));
}

#[test]
fn checker_outcome_report_reaches_the_prompt_verbatim() {
    let outcome = TypeCheckOutcome::failed("app.py:3: error: bad type");
    let parts = application::prompt::type_check_review(&outcome.report, &[]);
    assert!(parts.user.contains("app.py:3: error: bad type"));
}
