// src/providers/mod.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::Result;

pub mod openrouter;

/// One message in a chat-completions exchange.
#[derive(Serialize, Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Per-call knobs for a completion request.
#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    /// Passed through as `reasoning_effort` when set.
    pub reasoning_effort: Option<String>,
    /// Ask the provider for a `json_object` response format.
    pub json_object: bool,
}

/// A common trait for text-generation providers.
///
/// Object-safe (via `async_trait`) so handlers can hold a `dyn` provider and
/// tests can inject a stub.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends `messages` to `model` and returns the raw response text together
    /// with the call latency in milliseconds.
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<(String, u64)>;
}
