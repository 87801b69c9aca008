// src/runner.rs
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{Result, VerifyError};
use crate::models::Evaluation;
use crate::providers::{CompletionOptions, CompletionProvider};
use crate::rubric;
use crate::scoring;

/// Outcome of one evaluator call within a consistency test.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EvaluationResult {
    /// Sum of the "earned/possible" fraction numerators in the reasoning,
    /// computed locally.
    pub score: u32,
    pub reasoning: String,
    pub suggestions: String,
    /// Wall-clock duration of the provider call in milliseconds.
    pub response_time: u64,
}

/// Aggregated outcome of one consistency-test run.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TestResults {
    pub run_id: String,
    pub model: String,
    pub prompt: String,
    pub results: Vec<EvaluationResult>,
    pub avg_response_time: u64,
    pub avg_score: f64,
    pub score_std_dev: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub score_variance: f64,
    pub created_at: String,
}

/// Cooperative cancellation signal for a consistency test. Cancelling aborts
/// the remaining iterations; results collected so far are still aggregated.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub const DEFAULT_ITERATIONS: u32 = 10;
pub const MAX_ITERATIONS: u32 = 50;

/// Issues a single evaluator call and returns the provider's raw response
/// text. The response is expected to be the two-field JSON contract but is
/// deliberately not schema-validated here.
pub async fn run_verification(
    provider: &dyn CompletionProvider,
    config: &AppConfig,
    model: &str,
    prompt: &str,
) -> Result<String> {
    let messages = rubric::build_messages(prompt, config.effort);
    let options = CompletionOptions {
        reasoning_effort: Some(config.effort.reasoning_effort().to_string()),
        json_object: true,
    };

    let (output, latency_ms) =
        timed_call(provider, config, model, &messages, &options).await?;

    log::info!("Verification call to {} completed in {}ms", model, latency_ms);

    Ok(output)
}

/// Runs `iterations` evaluator calls sequentially (never concurrently, so
/// per-call timings stay independent and comparable) and aggregates score
/// and latency statistics.
///
/// `iterations` is clamped to [1, 50]. Calls that come back with an empty
/// body are skipped; if every call is skipped the run fails with
/// `EmptyResultSet` rather than producing NaN aggregates. The token is
/// checked before each iteration so a caller can abort the remainder.
pub async fn run_consistency_test(
    provider: &dyn CompletionProvider,
    config: &AppConfig,
    model: &str,
    prompt: &str,
    iterations: u32,
    cancel: &CancelToken,
) -> Result<TestResults> {
    let iterations = iterations.clamp(1, MAX_ITERATIONS);
    let messages = rubric::build_messages(prompt, config.effort);
    let options = CompletionOptions {
        reasoning_effort: Some(config.effort.reasoning_effort().to_string()),
        json_object: true,
    };

    let run_start = Instant::now();
    let mut results: Vec<EvaluationResult> = Vec::with_capacity(iterations as usize);

    for iteration in 1..=iterations {
        if cancel.is_cancelled() {
            log::warn!(
                "Consistency test cancelled after {} of {} iterations",
                iteration - 1,
                iterations
            );
            break;
        }

        let (body, response_time) =
            match timed_call(provider, config, model, &messages, &options).await {
                Ok(ok) => ok,
                Err(VerifyError::EmptyResponse) => {
                    log::warn!(
                        "Iteration {}/{} returned an empty body, skipping",
                        iteration,
                        iterations
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

        let evaluation: Evaluation = serde_json::from_str(&body)?;
        let score = scoring::extract_score(&evaluation.reasoning);

        log::info!(
            "Iteration {}/{}: score {} in {}ms",
            iteration,
            iterations,
            score,
            response_time
        );

        results.push(EvaluationResult {
            score,
            reasoning: evaluation.reasoning,
            suggestions: evaluation.suggestions,
            response_time,
        });
    }

    let scores: Vec<u32> = results.iter().map(|r| r.score).collect();
    let stats = scoring::summarize(&scores).ok_or_else(|| VerifyError::EmptyResultSet {
        model: model.to_string(),
    })?;

    let avg_response_time = (results
        .iter()
        .map(|r| r.response_time as f64)
        .sum::<f64>()
        / results.len() as f64)
        .round() as u64;

    log::info!(
        "Consistency test for {} finished: {} results in {}ms total",
        model,
        results.len(),
        run_start.elapsed().as_millis()
    );

    Ok(TestResults {
        run_id: Uuid::new_v4().to_string(),
        model: model.to_string(),
        prompt: prompt.to_string(),
        results,
        avg_response_time,
        avg_score: stats.avg_score,
        score_std_dev: stats.score_std_dev,
        min_score: stats.min_score,
        max_score: stats.max_score,
        score_variance: stats.score_variance,
        created_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// One provider call with wall-clock timing and the configured per-call
/// timeout applied.
async fn timed_call(
    provider: &dyn CompletionProvider,
    config: &AppConfig,
    model: &str,
    messages: &[crate::providers::ChatMessage],
    options: &CompletionOptions,
) -> Result<(String, u64)> {
    match config.provider_timeout_ms {
        Some(timeout_ms) => {
            let deadline = std::time::Duration::from_millis(timeout_ms);
            match tokio::time::timeout(deadline, provider.complete(model, messages, options))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(VerifyError::Timeout(timeout_ms)),
            }
        }
        None => provider.complete(model, messages, options).await,
    }
}
