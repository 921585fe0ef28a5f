//! Failure-policy table
//!
//! One place that decides, per pipeline and stage, whether a failure aborts
//! the process (exit code 1, no partial output) or degrades to a fallback
//! artifact and lets the run continue. Call sites consult this table instead
//! of scattering try/catch policy.
//!
//! Note: `Degrade` for the type-check stage means the failure flows on as a
//! failed `TypeCheckOutcome`; the outcome's `passed` flag still determines
//! the final exit code of the notify pipeline.

/// Which pipeline is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Diff file in, HTML file out
    FileReview,
    /// Changed files in, type check + email out
    PushNotify,
}

/// A stage at which an external interaction can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading CLI inputs (diff file, recipient address, change list)
    InputRead,
    /// Running the external type checker
    TypeCheck,
    /// Calling the AI service
    Inference,
    /// Rendering the HTML document
    Render,
    /// Submitting the email
    Delivery,
    /// Writing the result file
    OutputWrite,
}

/// What to do when a stage fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    /// Terminate with exit code 1, produce no partial output
    Abort,
    /// Substitute a fallback artifact and continue
    Degrade,
}

/// Look up the action for a failure at `stage` of `pipeline`
pub const fn on_failure(pipeline: Pipeline, stage: Stage) -> FailureAction {
    match (pipeline, stage) {
        // Input and output boundaries are hard failures everywhere.
        (_, Stage::InputRead | Stage::OutputWrite) => FailureAction::Abort,

        // The file-review pipeline has no email leg; a render failure there
        // means the result file cannot be produced at all.
        (Pipeline::FileReview, Stage::Render) => FailureAction::Abort,

        // Everything downstream of input degrades in the notify pipeline:
        // the run must always reach its exit-code decision.
        _ => FailureAction::Degrade,
    }
}
