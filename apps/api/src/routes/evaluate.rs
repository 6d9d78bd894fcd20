use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::evaluation::EvaluationResponse;
use crate::models::questionnaire::EvaluationRequest;
use crate::pipeline;
use crate::state::AppState;

/// POST /api/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    info!(
        background = request.background.as_str(),
        target_role = %request.quiz_responses.target_role,
        "received profile evaluation request"
    );
    let response = pipeline::evaluate(&state, request).await?;
    Ok(Json(response))
}
