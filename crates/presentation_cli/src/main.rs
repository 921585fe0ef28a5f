//! PushReview CLI
//!
//! Two subcommands, one per pipeline:
//! - `review <diff_file> <output_html>`: diff in, HTML report file out.
//! - `notify <recipient> <changed_files>...`: type check the working tree,
//!   email the AI review, fail the workflow when the check failed.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use application::ports::{MailerPort, RendererPort};
use application::{ApplicationError, FileReviewPipeline, PushNotifyPipeline, ReviewService};
use clap::{Parser, Subcommand};
use domain::{ChangedFileSet, EmailAddress};
use infrastructure::{
    AppConfig, FsChangeSetReader, OpenAiInferenceAdapter, ReportTemplateEngine, SmtpMailerAdapter,
    SubprocessTypeChecker, init_telemetry,
};
use tracing::{error, info, warn};

/// PushReview CLI
#[derive(Debug, Parser)]
#[command(name = "pushreview-cli")]
#[command(author, version, about = "AI-assisted push review automation", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Review a diff file and write the HTML report next to it
    Review {
        /// Path to the diff to analyze
        diff_file: PathBuf,

        /// Path the HTML report is written to
        output_html: PathBuf,
    },

    /// Type-check the working tree and email the review report
    Notify {
        /// Recipient email address
        recipient: String,

        /// Changed file paths (individual arguments or one
        /// whitespace-separated string, as CI systems pass them)
        #[arg(required = true)]
        changed_files: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_telemetry(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Pipeline aborted");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> Result<ExitCode, ApplicationError> {
    let config = AppConfig::load().map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    let renderer: Arc<dyn RendererPort> = Arc::new(
        ReportTemplateEngine::new().map_err(|e| ApplicationError::Render(e.to_string()))?,
    );
    let review = build_review_service(&config);

    match cli.command {
        Commands::Review {
            diff_file,
            output_html,
        } => {
            let diff = std::fs::read_to_string(&diff_file)
                .map_err(|e| ApplicationError::input_read(diff_file.display().to_string(), e))?;

            let pipeline = FileReviewPipeline::new(review, renderer);
            let html = pipeline.run(&diff).await?;

            std::fs::write(&output_html, html)
                .map_err(|e| ApplicationError::output_write(output_html.display().to_string(), e))?;

            info!(output = %output_html.display(), "Review report written");
            Ok(ExitCode::SUCCESS)
        },

        Commands::Notify {
            recipient,
            changed_files,
        } => {
            let recipient = EmailAddress::new(recipient)?;
            let files = ChangedFileSet::from_args(changed_files);
            if files.is_empty() {
                return Err(ApplicationError::Usage(
                    "at least one changed file path is required".to_string(),
                ));
            }

            let type_checker = Arc::new(SubprocessTypeChecker::from_settings(&config.typecheck));
            let reader = Arc::new(FsChangeSetReader::new());
            let mailer = build_mailer(&config);

            let pipeline =
                PushNotifyPipeline::new(review, renderer, type_checker, reader, mailer);
            let run = pipeline.run(&recipient, &files).await;

            // The type-check flag alone decides; AI and delivery outcomes
            // were already degraded inside the pipeline.
            Ok(if run.outcome.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        },
    }
}

/// Build the review service, degrading to sample-report mode when no
/// inference client can be constructed.
fn build_review_service(config: &AppConfig) -> ReviewService {
    match OpenAiInferenceAdapter::new(config.inference.clone()) {
        Ok(adapter) => ReviewService::new(Some(Arc::new(adapter))),
        Err(ai_core::InferenceError::MissingCredentials) => {
            warn!("No AI API key configured, reviews degrade to the sample report");
            ReviewService::new(None)
        },
        Err(e) => {
            warn!(error = %e, "Could not construct inference client, degrading");
            ReviewService::new(None)
        },
    }
}

/// Build the mailer, degrading to log-only delivery without credentials.
fn build_mailer(config: &AppConfig) -> Option<Arc<dyn MailerPort>> {
    match config.mail.to_mail_config() {
        Some(mail_config) => Some(Arc::new(SmtpMailerAdapter::new(mail_config))),
        None => {
            warn!("Mail credentials absent, delivery degrades to log output");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn review_requires_both_paths() {
        let err = Cli::try_parse_from(["pushreview-cli", "review", "diff.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn review_parses_paths_positionally() {
        let cli =
            Cli::try_parse_from(["pushreview-cli", "review", "diff.txt", "out.html"]).unwrap();
        match cli.command {
            Commands::Review {
                diff_file,
                output_html,
            } => {
                assert_eq!(diff_file, PathBuf::from("diff.txt"));
                assert_eq!(output_html, PathBuf::from("out.html"));
            },
            Commands::Notify { .. } => unreachable!("expected review command"),
        }
    }

    #[test]
    fn notify_requires_recipient_and_files() {
        let err = Cli::try_parse_from(["pushreview-cli", "notify", "dev@example.com"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn notify_accepts_multiple_file_arguments() {
        let cli = Cli::try_parse_from([
            "pushreview-cli",
            "notify",
            "dev@example.com",
            "a.py",
            "b.py",
        ])
        .unwrap();
        match cli.command {
            Commands::Notify {
                recipient,
                changed_files,
            } => {
                assert_eq!(recipient, "dev@example.com");
                assert_eq!(changed_files, ["a.py", "b.py"]);
            },
            Commands::Review { .. } => unreachable!("expected notify command"),
        }
    }

    #[tokio::test]
    async fn missing_diff_file_aborts_without_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("out.html");

        let cli = Cli::try_parse_from([
            "pushreview-cli",
            "review",
            "definitely-missing.diff",
            &out.to_string_lossy(),
        ])
        .unwrap();

        let err = run(cli).await.unwrap_err();
        assert!(matches!(err, ApplicationError::InputRead { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn verbosity_flag_counts() {
        let cli = Cli::try_parse_from([
            "pushreview-cli",
            "-vv",
            "notify",
            "dev@example.com",
            "a.py",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
