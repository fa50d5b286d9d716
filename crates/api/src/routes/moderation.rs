use axum::routing::{get, post};
use axum::Router;

use crate::handlers::moderation;
use crate::state::AppState;

/// ```text
/// GET    /moderation/pending          list_pending
/// POST   /moderation/{type}/{id}      moderate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/moderation/pending", get(moderation::list_pending))
        .route("/moderation/{type}/{id}", post(moderation::moderate))
}
