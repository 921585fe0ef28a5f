//! Infrastructure layer for PushReview
//!
//! Concrete adapters behind the application ports: configuration loading,
//! tracing setup, the HTML template engine, the type-checker subprocess,
//! the filesystem change-set reader, and the inference bridge.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;
pub mod typecheck;

pub use adapters::{FsChangeSetReader, OpenAiInferenceAdapter, SmtpMailerAdapter};
pub use config::{AppConfig, MailSettings, TypeCheckSettings};
pub use telemetry::init_telemetry;
pub use templates::{ReportTemplateEngine, TemplateError};
pub use typecheck::SubprocessTypeChecker;
