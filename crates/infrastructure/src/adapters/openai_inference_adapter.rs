//! Inference adapter - implements InferencePort using ai_core

use std::time::Instant;

use ai_core::{InferenceConfig, InferenceEngine, InferenceRequest, OpenAiChatEngine};
use application::{
    error::ApplicationError,
    ports::{InferencePort, InferenceResult},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for OpenAI-compatible inference
#[derive(Debug)]
pub struct OpenAiInferenceAdapter {
    engine: OpenAiChatEngine,
}

impl OpenAiInferenceAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Propagates `MissingCredentials` so the caller can decide to run
    /// without a client (sample-report mode) instead of aborting.
    pub fn new(config: InferenceConfig) -> Result<Self, ai_core::InferenceError> {
        let engine = OpenAiChatEngine::new(config)?;
        Ok(Self { engine })
    }
}

#[async_trait]
impl InferencePort for OpenAiInferenceAdapter {
    #[instrument(skip(self, system_prompt, user_prompt), fields(prompt_len = user_prompt.len()))]
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<InferenceResult, ApplicationError> {
        let start = Instant::now();

        let request = InferenceRequest::with_system(system_prompt, user_prompt);
        let response = self
            .engine
            .generate(request)
            .await
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;

        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            model = %response.model,
            tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            latency_ms,
            "Inference completed"
        );

        Ok(InferenceResult {
            content: response.content,
            model: response.model,
            tokens_used: response.usage.map(|u| u.total_tokens),
            latency_ms,
        })
    }

    fn current_model(&self) -> &str {
        self.engine.default_model()
    }
}
