//! File-review pipeline: diff text in, HTML document out
//!
//! The caller owns the file I/O on both ends; this service owns the
//! prompt → review → render sequence between them.

use std::{fmt, sync::Arc};

use tracing::{info, instrument};

use crate::error::ApplicationError;
use crate::ports::{RendererPort, ReportEmailData, ReportFormat};
use crate::prompt;
use crate::services::ReviewService;

/// Title used for the rendered report document
const REPORT_TITLE: &str = "Automated Code Review Report";

/// Paragraph shown above the report section
const REPORT_INTRO: &str =
    "Your latest push was analyzed by the AI review system. The detailed report follows:";

/// Pipeline A: diff → review → rendered HTML
pub struct FileReviewPipeline {
    review: ReviewService,
    renderer: Arc<dyn RendererPort>,
}

impl fmt::Debug for FileReviewPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileReviewPipeline")
            .field("review", &self.review)
            .finish_non_exhaustive()
    }
}

impl FileReviewPipeline {
    /// Create the pipeline
    pub fn new(review: ReviewService, renderer: Arc<dyn RendererPort>) -> Self {
        Self { review, renderer }
    }

    /// Produce the HTML review document for a diff
    ///
    /// # Errors
    ///
    /// Only rendering can fail here; per the policy table that failure
    /// aborts this pipeline (its sole output cannot be produced). The AI
    /// outcome never surfaces as an error.
    #[instrument(skip(self, diff), fields(diff_len = diff.len()))]
    pub async fn run(&self, diff: &str) -> Result<String, ApplicationError> {
        let parts = prompt::diff_review(diff);
        let report = self.review.review(&parts).await;

        info!(origin = ?report.origin(), "Rendering review document");

        let data = ReportEmailData::new(
            REPORT_TITLE,
            REPORT_INTRO,
            report.body(),
            ReportFormat::Markdownish,
        );
        self.renderer.render(&data)
    }
}
