//! Inference port - interface for the AI review service

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Result of an inference call
#[derive(Debug, Clone)]
pub struct InferenceResult {
    /// Generated response content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Number of tokens used (if reported)
    pub tokens_used: Option<u32>,
    /// Latency in milliseconds
    pub latency_ms: u64,
}

/// Port for review-generation inference
///
/// One blocking call per pipeline run. Implementations must not retry;
/// the caller's policy table decides what a failure means.
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate a response for a system/user prompt pair
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<InferenceResult, ApplicationError>;

    /// Name of the model answering requests
    fn current_model(&self) -> &str;
}
