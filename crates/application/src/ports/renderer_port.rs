//! Renderer port - typed HTML template function for the report email

use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// How the report body should be embedded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text or Markdown: newlines become `<br>` before embedding
    /// (no Markdown parsing, only newline substitution)
    Markdownish,
    /// Already HTML: embedded as-is
    Html,
}

/// Named fields for the fixed report document template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEmailData {
    /// Document and header title
    pub title: String,
    /// Paragraph shown above the report section
    pub intro: String,
    /// The review report body
    pub report: String,
    /// How to embed `report`
    pub format: ReportFormat,
}

impl ReportEmailData {
    /// Create template data for a report
    pub fn new(
        title: impl Into<String>,
        intro: impl Into<String>,
        report: impl Into<String>,
        format: ReportFormat,
    ) -> Self {
        Self {
            title: title.into(),
            intro: intro.into(),
            report: report.into(),
            format,
        }
    }
}

/// Port for rendering the self-contained HTML document
pub trait RendererPort: Send + Sync {
    /// Render the fixed template with the given fields
    fn render(&self, data: &ReportEmailData) -> Result<String, ApplicationError>;
}
