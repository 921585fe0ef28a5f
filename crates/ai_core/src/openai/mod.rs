//! OpenAI-compatible chat-completions adapter

mod client;

pub use client::OpenAiChatEngine;
