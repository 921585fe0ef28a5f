//! Application layer for PushReview
//!
//! Orchestrates the two pipelines (file review and push notify) over ports
//! implemented by the infrastructure and integration crates. Holds the
//! explicit failure-policy table that decides which stage failures abort
//! the process and which degrade to a fallback artifact.

pub mod error;
pub mod policy;
pub mod ports;
pub mod prompt;
pub mod services;

pub use error::ApplicationError;
pub use services::{FileReviewPipeline, NotifyRun, PushNotifyPipeline, ReviewService};
