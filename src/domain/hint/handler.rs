use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::{
    dto::{HintRequest, HintResponse},
    prompt::HintPrompt,
};
use crate::state::AppState;
use crate::utils::{error::AppError, response::ErrorResponse};

/// AI hint handler.
///
/// One inbound request maps to exactly one outbound generation call. Shape
/// mismatches are turned into a 422 before the prompt is ever rendered.
#[utoipa::path(
    post,
    path = "/ai_hint",
    tag = "AI",
    request_body = HintRequest,
    responses(
        (status = 200, body = HintResponse),
        (status = 422, body = ErrorResponse),
        (status = 503, body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn ai_hint(
    State(state): State<AppState>,
    request: Result<Json<HintRequest>, JsonRejection>,
) -> Result<Json<HintResponse>, AppError> {
    let Json(request) = request.map_err(AppError::from)?;

    tracing::info!(
        question_length = request.user_message.len(),
        drawn_lines = request.lines.len(),
        "Hint request received"
    );

    let prompt = HintPrompt::render(&request);

    let reply = state.generator.generate(&prompt).await?;

    tracing::info!(reply_length = reply.len(), "Hint generated");

    Ok(Json(HintResponse { reply }))
}
