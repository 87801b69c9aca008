// src/config.rs
use std::path::PathBuf;

use crate::errors::{Result, VerifyError};
use crate::rubric::EffortLevel;

/// Configuration for the chat-completions provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_base: String,
    pub api_key: String,
    pub default_model: String,
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    /// Effort variant of the grading template (minimal by default; the
    /// minimal variant suppresses the model-reported score).
    pub effort: EffortLevel,
    /// Optional per-call timeout for outbound provider requests.
    pub provider_timeout_ms: Option<u64>,
    /// When set, consistency-test results are also written here as JSON.
    pub results_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `OPEN_AI_KEY` is required; everything else has a default or is
    /// optional.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPEN_AI_KEY").map_err(|_| {
            VerifyError::Config(
                "No provider configured. Please set OPEN_AI_KEY.".to_string(),
            )
        })?;

        let api_base = std::env::var("OPENROUTER_API_BASE")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string());

        let default_model = std::env::var("DEFAULT_MODEL")
            .unwrap_or_else(|_| "qwen/qwen2.5-vl-32b-instruct:free".to_string());

        let effort = match std::env::var("EFFORT_LEVEL") {
            Ok(value) => parse_effort(&value)?,
            Err(_) => EffortLevel::Minimal,
        };

        let provider_timeout_ms = match std::env::var("PROVIDER_TIMEOUT_MS") {
            Ok(value) => Some(value.parse::<u64>().map_err(|_| {
                VerifyError::Config(format!(
                    "PROVIDER_TIMEOUT_MS must be an integer, got '{}'",
                    value
                ))
            })?),
            Err(_) => None,
        };

        let results_dir = std::env::var("RESULTS_DIR").ok().map(PathBuf::from);

        Ok(AppConfig {
            provider: ProviderConfig {
                api_base,
                api_key,
                default_model,
            },
            effort,
            provider_timeout_ms,
            results_dir,
        })
    }
}

fn parse_effort(value: &str) -> Result<EffortLevel> {
    match value.trim().to_lowercase().as_str() {
        "minimal" => Ok(EffortLevel::Minimal),
        "high" => Ok(EffortLevel::High),
        other => Err(VerifyError::Config(format!(
            "EFFORT_LEVEL must be 'minimal' or 'high', got '{}'",
            other
        ))),
    }
}
