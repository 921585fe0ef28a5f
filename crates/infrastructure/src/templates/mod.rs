//! HTML template engine for review documents
//!
//! One fixed Tera template renders both the file-review output and the
//! notification email body: a self-contained document with inline CSS and
//! no external assets. The report body is embedded unescaped (the notify
//! pipeline requests HTML from the service); title and intro go through
//! normal escaping.

use application::ApplicationError;
use application::ports::{RendererPort, ReportEmailData, ReportFormat};
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Template name under which the report document is registered
const REPORT_TEMPLATE: &str = "report_email.html";

/// The fixed report document
const REPORT_TEMPLATE_SOURCE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{{ title }}</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background-color: #f4f7fa; margin: 0; padding: 0; }
        .container { max-width: 600px; margin: 40px auto; background-color: #ffffff; padding: 30px; border-radius: 12px; box-shadow: 0 4px 20px rgba(0,0,0,0.05); border-top: 5px solid #007bff; }
        h1 { color: #007bff; font-size: 24px; border-bottom: 1px solid #e0e0e0; padding-bottom: 15px; margin-top: 0; }
        h2 { color: #333333; font-size: 18px; margin-top: 25px; }
        p { color: #555555; line-height: 1.6; }
        .report-section { margin-top: 20px; padding: 15px; border-radius: 8px; background-color: #f9f9f9; border: 1px solid #eee; }
        .footer { margin-top: 40px; text-align: center; color: #999999; font-size: 12px; border-top: 1px solid #e0e0e0; padding-top: 15px; }
        code { background-color: #eeeeee; padding: 2px 4px; border-radius: 4px; font-size: 90%; }
        pre { background-color: #e9ecef; border: 1px solid #ced4da; padding: 10px; overflow-x: auto; border-radius: 6px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>{{ title }}</h1>
        <p>Hello,</p>
        <p>{{ intro }}</p>

        <div class="report-section">
            {{ report | safe }}
        </div>

        <p>Please look over the points raised to keep improving the quality of the codebase.</p>

        <div class="footer">
            This email was generated automatically by PushReview. Please do not reply.
        </div>
    </div>
</body>
</html>
"#;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        Self::Render(e.to_string())
    }
}

/// Renders review reports into the fixed HTML document
#[derive(Debug)]
pub struct ReportTemplateEngine {
    tera: Tera,
}

impl ReportTemplateEngine {
    /// Create the engine with the embedded template
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(REPORT_TEMPLATE, REPORT_TEMPLATE_SOURCE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Render the document for the given fields
    pub fn render_report(&self, data: &ReportEmailData) -> Result<String, TemplateError> {
        let report = match data.format {
            // No Markdown parsing, only newline substitution.
            ReportFormat::Markdownish => data.report.replace('\n', "<br>\n"),
            ReportFormat::Html => data.report.clone(),
        };

        let mut context = Context::new();
        context.insert("title", &data.title);
        context.insert("intro", &data.intro);
        context.insert("report", &report);

        debug!(template = REPORT_TEMPLATE, "Rendering report document");
        Ok(self.tera.render(REPORT_TEMPLATE, &context)?)
    }
}

impl RendererPort for ReportTemplateEngine {
    fn render(&self, data: &ReportEmailData) -> Result<String, ApplicationError> {
        self.render_report(data)
            .map_err(|e| ApplicationError::Render(e.to_string()))
    }
}
