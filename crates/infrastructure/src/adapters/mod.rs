//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod fs_change_set_reader;
mod openai_inference_adapter;
mod smtp_mailer_adapter;

pub use fs_change_set_reader::FsChangeSetReader;
pub use openai_inference_adapter::OpenAiInferenceAdapter;
pub use smtp_mailer_adapter::SmtpMailerAdapter;
