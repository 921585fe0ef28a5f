//! Shared review-generation step
//!
//! Both pipelines obtain their report here; the only variation between them
//! is the prompt they pass in. Failure handling follows the policy table:
//! inference never aborts, a degraded report is always produced.

use std::{fmt, sync::Arc};

use domain::ReviewReport;
use tracing::{debug, info, instrument, warn};

use crate::ports::InferencePort;
use crate::prompt::ReviewPromptParts;

/// Generates review reports, degrading instead of failing
pub struct ReviewService {
    inference: Option<Arc<dyn InferencePort>>,
}

impl fmt::Debug for ReviewService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewService")
            .field("configured", &self.inference.is_some())
            .finish_non_exhaustive()
    }
}

impl ReviewService {
    /// Create a new service
    ///
    /// `None` means no service client could be constructed (missing
    /// credentials); every review then yields the canned sample report so
    /// the pipelines stay runnable without live credentials.
    pub fn new(inference: Option<Arc<dyn InferencePort>>) -> Self {
        Self { inference }
    }

    /// Whether a live inference client is available
    pub const fn is_configured(&self) -> bool {
        self.inference.is_some()
    }

    /// Obtain a review report for the given prompt
    ///
    /// Never fails: service errors become a fallback report naming the
    /// reason, and a missing client becomes the sample report.
    #[instrument(skip(self, parts), fields(prompt_len = parts.user.len()))]
    pub async fn review(&self, parts: &ReviewPromptParts) -> ReviewReport {
        let Some(engine) = &self.inference else {
            info!("No inference client configured, substituting sample report");
            return ReviewReport::sample();
        };

        match engine.generate(&parts.system, &parts.user).await {
            Ok(result) => {
                debug!(
                    model = %result.model,
                    tokens = ?result.tokens_used,
                    latency_ms = result.latency_ms,
                    "Review generated"
                );
                ReviewReport::from_service(result.content)
            },
            Err(e) => {
                warn!(error = %e, "Inference failed, substituting fallback report");
                ReviewReport::fallback(e)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use domain::{FALLBACK_MARKER, ReportOrigin, SAMPLE_MARKER};

    use super::*;
    use crate::ApplicationError;
    use crate::ports::InferenceResult;
    use crate::prompt;

    struct FakeInference {
        response: Result<String, String>,
    }

    #[async_trait]
    impl InferencePort for FakeInference {
        async fn generate(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
        ) -> Result<InferenceResult, ApplicationError> {
            match &self.response {
                Ok(content) => Ok(InferenceResult {
                    content: content.clone(),
                    model: "fake-model".to_string(),
                    tokens_used: Some(10),
                    latency_ms: 1,
                }),
                Err(reason) => Err(ApplicationError::Inference(reason.clone())),
            }
        }

        fn current_model(&self) -> &str {
            "fake-model"
        }
    }

    fn parts() -> ReviewPromptParts {
        prompt::diff_review("+ x = 1")
    }

    #[tokio::test]
    async fn successful_inference_yields_service_report() {
        let service = ReviewService::new(Some(Arc::new(FakeInference {
            response: Ok("## Verdict\nGood push.".to_string()),
        })));

        let report = service.review(&parts()).await;
        assert_eq!(report.origin(), ReportOrigin::Service);
        assert_eq!(report.body(), "## Verdict\nGood push.");
    }

    #[tokio::test]
    async fn failed_inference_yields_fallback_with_reason() {
        let service = ReviewService::new(Some(Arc::new(FakeInference {
            response: Err("quota exceeded".to_string()),
        })));

        let report = service.review(&parts()).await;
        assert_eq!(report.origin(), ReportOrigin::Fallback);
        assert!(report.body().contains(FALLBACK_MARKER));
        assert!(report.body().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn missing_client_yields_sample_report() {
        let service = ReviewService::new(None);
        assert!(!service.is_configured());

        let report = service.review(&parts()).await;
        assert_eq!(report.origin(), ReportOrigin::Sample);
        assert!(report.body().contains(SAMPLE_MARKER));
    }

    #[tokio::test]
    async fn fenced_service_response_is_stripped() {
        let service = ReviewService::new(Some(Arc::new(FakeInference {
            response: Ok("```html\n<h1>Report</h1>\n```".to_string()),
        })));

        let report = service.review(&parts()).await;
        assert_eq!(report.body(), "<h1>Report</h1>");
    }
}
