//! Handlers for web-form submissions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use screenhound_core::submission::{NewSubmission, PhotoForm, TriviaForm};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/submit/photo
pub async fn submit_photo(
    State(state): State<AppState>,
    AppJson(form): AppJson<PhotoForm>,
) -> AppResult<impl IntoResponse> {
    let photo = form.into_new_photo()?;
    store_pending(&state, NewSubmission::DogPhoto(photo)).await
}

/// POST /api/submit/trivia
pub async fn submit_trivia(
    State(state): State<AppState>,
    AppJson(form): AppJson<TriviaForm>,
) -> AppResult<impl IntoResponse> {
    let trivia = form.into_new_trivia()?;
    store_pending(&state, NewSubmission::Trivia(trivia)).await
}

async fn store_pending(
    state: &AppState,
    submission: NewSubmission,
) -> AppResult<impl IntoResponse> {
    let created = state.store.create(&submission).await?;

    tracing::info!(
        submission_id = created.id(),
        kind = %created.kind(),
        phone_number = submission.phone_number(),
        "Web submission stored"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::ok(created))))
}
