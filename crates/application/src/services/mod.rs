//! Application services
//!
//! The shared review step plus the two pipeline orchestrations.

mod file_review;
mod push_notify;
mod review_service;

pub use file_review::FileReviewPipeline;
pub use push_notify::{NotifyRun, PushNotifyPipeline};
pub use review_service::ReviewService;
