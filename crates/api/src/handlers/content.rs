//! Handlers for the public display feed.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use screenhound_core::listing::{
    display_owner, ListQuery, APPROVED_PHOTO_LIMIT, APPROVED_TRIVIA_LIMIT,
};
use screenhound_db::models::{DogPhoto, TriviaSubmission};

use crate::error::AppResult;
use crate::extract::AppPath;
use crate::state::AppState;

/// One item shown on a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Dog {
        name: String,
        image: String,
        owner: String,
    },
    Trivia {
        fact: String,
    },
}

impl From<DogPhoto> for ContentItem {
    fn from(photo: DogPhoto) -> Self {
        let owner = display_owner(photo.owner_name.as_deref()).to_string();
        ContentItem::Dog {
            name: photo.dog_name,
            image: photo.image_url,
            owner,
        }
    }
}

impl From<TriviaSubmission> for ContentItem {
    fn from(trivia: TriviaSubmission) -> Self {
        ContentItem::Trivia {
            fact: trivia.trivia_text,
        }
    }
}

/// `{ "content": [...], "success": true }`
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub content: Vec<ContentItem>,
    pub success: bool,
}

/// GET /api/content
pub async fn list_content(State(state): State<AppState>) -> AppResult<Json<ContentResponse>> {
    approved_feed(&state, None).await
}

/// GET /api/content/{location_id}
///
/// The location is accepted for forward compatibility but does not filter.
pub async fn list_content_for_location(
    State(state): State<AppState>,
    AppPath(location_id): AppPath<String>,
) -> AppResult<Json<ContentResponse>> {
    approved_feed(&state, Some(&location_id)).await
}

/// Newest approved photos followed by newest approved trivia.
async fn approved_feed(
    state: &AppState,
    location_id: Option<&str>,
) -> AppResult<Json<ContentResponse>> {
    let photos = state
        .store
        .list_photos(ListQuery::approved_recent(APPROVED_PHOTO_LIMIT))
        .await?;
    let trivia = state
        .store
        .list_trivia(ListQuery::approved_recent(APPROVED_TRIVIA_LIMIT))
        .await?;

    tracing::debug!(
        location_id = ?location_id,
        photos = photos.len(),
        trivia = trivia.len(),
        "Serving content feed"
    );

    let content = photos
        .into_iter()
        .map(ContentItem::from)
        .chain(trivia.into_iter().map(ContentItem::from))
        .collect();

    Ok(Json(ContentResponse {
        content,
        success: true,
    }))
}
