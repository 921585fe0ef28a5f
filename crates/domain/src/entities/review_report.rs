//! Review report returned by the AI service, or synthesized locally

use serde::{Deserialize, Serialize};

/// Marker present in every locally synthesized failure report
pub const FALLBACK_MARKER: &str = "AI review unavailable";

/// Marker present in the canned no-credentials report
pub const SAMPLE_MARKER: &str = "Sample review report";

/// Where a report came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportOrigin {
    /// Generated by the AI service
    Service,
    /// Synthesized locally after a service failure
    Fallback,
    /// Canned demo report, used when no service client is configured
    Sample,
}

/// A natural-language code-review report
///
/// The body is untrusted free text (Markdown or HTML); no schema is
/// enforced beyond the optional code-fence stripping at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReport {
    body: String,
    origin: ReportOrigin,
}

impl ReviewReport {
    /// Wrap a raw service response, stripping a boundary code fence
    pub fn from_service(raw: impl Into<String>) -> Self {
        Self {
            body: strip_code_fence(&raw.into()),
            origin: ReportOrigin::Service,
        }
    }

    /// Synthesize a fallback report naming the failure reason
    pub fn fallback(reason: impl std::fmt::Display) -> Self {
        Self {
            body: format!(
                "**{FALLBACK_MARKER}**\n\n\
                 The review service could not process this request ({reason}). \
                 Check the API key configuration or try again later."
            ),
            origin: ReportOrigin::Fallback,
        }
    }

    /// Canned demo report, used when no service client could be constructed
    pub fn sample() -> Self {
        Self {
            body: format!(
                "# {SAMPLE_MARKER}\n\n\
                 **Verdict**: Impeccable push! 🎉\n\n\
                 **Strengths**\n\
                 * Clean dependency handling in `package.json`.\n\n\
                 **Improvements**\n\
                 1. **Readability**: the indentation of `calculate_sum` (lines 15-20) could be simplified.\n\
                 2. **Performance**: the nested loops in `process_data` may be costly; consider a map-based lookup.\n\n\
                 **Conclusion**\n\
                 Good work! Keep it up to maintain a high-quality codebase."
            ),
            origin: ReportOrigin::Sample,
        }
    }

    /// The report text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Where this report came from
    pub const fn origin(&self) -> ReportOrigin {
        self.origin
    }

    /// Whether this is a locally synthesized substitute
    pub const fn is_degraded(&self) -> bool {
        !matches!(self.origin, ReportOrigin::Service)
    }
}

/// Strip a leading ```` ```html ```` (or bare ```` ``` ````) and a trailing
/// ```` ``` ```` when they sit at the response boundary.
///
/// Services asked for HTML often wrap the whole answer in one fence; fences
/// inside the body are left alone.
fn strip_code_fence(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```html") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim().to_string()
}
