// src/providers/openrouter.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::ProviderConfig;
use crate::errors::{Result, VerifyError};
use crate::providers::{ChatMessage, CompletionOptions, CompletionProvider};

/// A provider for any OpenAI-compatible chat-completions endpoint
/// (OpenRouter by default).
pub struct OpenRouterProvider {
    client: Client,
    config: ProviderConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

impl OpenRouterProvider {
    /// Creates a new `OpenRouterProvider`.
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<(String, u64)> {
        let url = format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        );

        log::debug!("Calling provider: {} with model: {}", url, model);

        let body = ChatRequest {
            model,
            messages,
            reasoning_effort: options.reasoning_effort.as_deref(),
            response_format: options
                .json_object
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::debug!("Provider response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(VerifyError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let chat_resp: ChatResponse = resp.json().await?;

        let output = chat_resp
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| {
                VerifyError::UnexpectedResponse("No choices in response".to_string())
            })?;

        if output.trim().is_empty() {
            return Err(VerifyError::EmptyResponse);
        }

        Ok((output, latency_ms))
    }
}
