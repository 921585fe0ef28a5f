//! AI Core - review report generation
//!
//! Provides the inference port plus an adapter for OpenAI-compatible
//! chat-completion APIs. The service is an opaque text-in/text-out
//! collaborator; its responses are untrusted free text.

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use openai::OpenAiChatEngine;
pub use ports::{
    InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage,
};
