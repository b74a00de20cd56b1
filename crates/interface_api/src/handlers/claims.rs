//! Claims handlers

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::info;

use domain_claims::Decision;

use crate::{error::ApiError, AppState};

/// Runs a claim through the triage pipeline
///
/// The body may be a JSON object or a JSON string of `key: value` lines.
/// Any valid JSON yields a decision; only unreadable bodies are rejected.
pub async fn process_claim(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Decision>, ApiError> {
    let input: Value = serde_json::from_slice(&body)?;
    let decision = state.pipeline.process(input);

    info!(
        decision = decision.decision.as_str(),
        fraud_score = %decision.fraud_score(),
        policy_matched = decision.policy_matched(),
        "Claim processed"
    );

    Ok(Json(decision))
}
