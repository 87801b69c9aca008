// src/api/handlers/verify.rs
use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;
use serde_json::json;

use crate::api::AppState;
use crate::errors::VerifyError;
use crate::report;
use crate::runner::{self, CancelToken, DEFAULT_ITERATIONS};

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub prompt: String,
    /// Falls back to the configured default model when omitted.
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Deserialize)]
pub struct ConsistencyTestRequest {
    pub prompt: String,
    #[serde(default)]
    pub model: Option<String>,
    /// Clamped to [1, 50]; defaults to 10.
    #[serde(default)]
    pub iterations: Option<u32>,
}

/// POST /api/verify - Run a single evaluation and return the provider's raw
/// response text (expected to be the two-field JSON contract).
pub async fn verify(
    state: web::Data<AppState>,
    req: web::Json<VerifyRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    let model = req
        .model
        .unwrap_or_else(|| state.config.provider.default_model.clone());

    match runner::run_verification(state.provider.as_ref(), &state.config, &model, &req.prompt)
        .await
    {
        Ok(raw) => Ok(HttpResponse::Ok()
            .content_type("application/json")
            .body(raw)),
        Err(e) => Ok(error_response(e)),
    }
}

/// POST /api/verify/test - Run the same evaluation `iterations` times and
/// return per-call results plus score/latency statistics.
pub async fn run_consistency_test(
    state: web::Data<AppState>,
    req: web::Json<ConsistencyTestRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    let model = req
        .model
        .unwrap_or_else(|| state.config.provider.default_model.clone());
    let iterations = req.iterations.unwrap_or(DEFAULT_ITERATIONS);

    // Fresh token per request; actix does not surface client disconnects
    // here, so cancellation is exercised by embedding callers.
    let cancel = CancelToken::new();

    match runner::run_consistency_test(
        state.provider.as_ref(),
        &state.config,
        &model,
        &req.prompt,
        iterations,
        &cancel,
    )
    .await
    {
        Ok(results) => {
            if let Some(dir) = &state.config.results_dir {
                if let Err(e) = report::save_test_results(dir, &results) {
                    log::error!("Failed to save test results: {}", e);
                }
            }
            Ok(HttpResponse::Ok().json(results))
        }
        Err(e) => Ok(error_response(e)),
    }
}

fn error_response(e: VerifyError) -> HttpResponse {
    let body = json!({ "error": e.to_string() });
    match e {
        VerifyError::Config(_) => HttpResponse::BadRequest().json(body),
        VerifyError::EmptyResultSet { .. } => HttpResponse::BadGateway().json(body),
        VerifyError::Timeout(_) => HttpResponse::GatewayTimeout().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}
