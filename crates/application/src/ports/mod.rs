//! Application ports
//!
//! Interfaces to external collaborators (AI service, type checker, SMTP,
//! template engine, filesystem). Implemented by adapters in the
//! infrastructure and integration crates.

mod change_set_reader;
mod inference_port;
mod mailer_port;
mod renderer_port;
mod type_check_port;

pub use change_set_reader::{ChangeSetReaderPort, FileExcerpt};
pub use inference_port::{InferencePort, InferenceResult};
pub use mailer_port::{EmailMessage, MailerError, MailerPort};
pub use renderer_port::{RendererPort, ReportEmailData, ReportFormat};
pub use type_check_port::TypeCheckPort;
