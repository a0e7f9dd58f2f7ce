use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

use super::types::*;
use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

fn api_error(status: StatusCode, msg: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error: msg.into() }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Smoke-test endpoint for frontend wiring.
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Backend is running!".to_string(),
        endpoint: "/api/analyzeTransaction".to_string(),
        status: "ok".to_string(),
    })
}

/// Analyze a Cardano transaction for risk & compliance.
pub async fn analyze_transaction(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeTransactionRequest>,
) -> ApiResult<AnalyzeTransactionResponse> {
    let metadata = payload.metadata.unwrap_or(JsonValue::Null);

    let report = state
        .engine
        .analyze(&payload.tx_hash, &payload.wallet_address, &metadata)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, tx_hash = %payload.tx_hash, "Analysis failed");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error analyzing transaction: {}", e),
            )
        })?;

    Ok(Json(AnalyzeTransactionResponse::from_report(
        payload.tx_hash,
        report,
    )))
}
