//! Handlers for the moderation queue and moderation actions.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use screenhound_core::error::CoreError;
use screenhound_core::listing::ListQuery;
use screenhound_core::submission::{ModerationAction, SubmissionKind};
use screenhound_core::types::DbId;
use screenhound_db::models::{DogPhoto, Submission, TriviaSubmission};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// `{ "photos": [...], "trivia": [...], "success": true }`
#[derive(Debug, Serialize)]
pub struct PendingResponse {
    pub photos: Vec<DogPhoto>,
    pub trivia: Vec<TriviaSubmission>,
    pub success: bool,
}

/// Request body for a moderation action.
#[derive(Debug, Deserialize)]
pub struct ModerationRequest {
    pub action: String,
}

/// GET /api/moderation/pending
///
/// Both queues oldest first, so moderators work through them in arrival order.
pub async fn list_pending(State(state): State<AppState>) -> AppResult<Json<PendingResponse>> {
    let photos = state.store.list_photos(ListQuery::pending()).await?;
    let trivia = state.store.list_trivia(ListQuery::pending()).await?;

    Ok(Json(PendingResponse {
        photos,
        trivia,
        success: true,
    }))
}

/// POST /api/moderation/{type}/{id}
///
/// `type` of `photo` targets photos, anything else targets trivia. The
/// action's target status is written without checking the current status,
/// so moderators can reverse an earlier decision.
pub async fn moderate(
    State(state): State<AppState>,
    AppPath((segment, id)): AppPath<(String, DbId)>,
    AppJson(input): AppJson<ModerationRequest>,
) -> AppResult<Json<DataResponse<Submission>>> {
    let action: ModerationAction = input.action.parse()?;
    let kind = SubmissionKind::from_moderation_segment(&segment);
    let status = action.target_status();

    let updated = state
        .store
        .set_status(kind, id, status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: kind.label(),
                id,
            })
        })?;

    tracing::info!(
        submission_id = id,
        kind = %kind,
        action = action.as_str(),
        status = %status,
        "Submission moderated"
    );

    Ok(Json(DataResponse::ok(updated)))
}
