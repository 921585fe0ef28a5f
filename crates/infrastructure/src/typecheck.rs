//! Type-checker subprocess adapter
//!
//! Invokes the configured static checker against the working tree and
//! converts every possible failure into a `TypeCheckOutcome`; nothing
//! escapes this boundary.

use async_trait::async_trait;
use domain::TypeCheckOutcome;
use tokio::process::Command;
use tracing::{info, instrument, warn};

use application::ports::TypeCheckPort;

use crate::config::TypeCheckSettings;

/// Runs the external type checker as a one-shot subprocess
#[derive(Debug, Clone)]
pub struct SubprocessTypeChecker {
    command: String,
    args: Vec<String>,
}

impl SubprocessTypeChecker {
    /// Create a checker for the given command line
    pub fn new(command: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            command: command.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Create a checker from configuration
    pub fn from_settings(settings: &TypeCheckSettings) -> Self {
        Self::new(settings.command.clone(), settings.args.iter().cloned())
    }
}

#[async_trait]
impl TypeCheckPort for SubprocessTypeChecker {
    #[instrument(skip(self), fields(command = %self.command))]
    async fn run(&self) -> TypeCheckOutcome {
        info!(args = ?self.args, "Running type checker");

        let output = Command::new(&self.command).args(&self.args).output().await;

        match output {
            Ok(output) => {
                let report = String::from_utf8_lossy(&output.stdout).into_owned();
                let passed = output.status.success();
                info!(passed, "Type check finished");
                if passed {
                    TypeCheckOutcome::passed(report)
                } else {
                    TypeCheckOutcome::failed(report)
                }
            },
            Err(e) => {
                warn!(error = %e, "Type checker could not be invoked");
                TypeCheckOutcome::failed(format!("Failed to run {}: {e}", self.command))
            },
        }
    }
}
