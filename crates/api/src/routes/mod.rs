pub mod content;
pub mod health;
pub mod moderation;
pub mod submit;
pub mod webhook;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content                       approved feed (GET)
/// /content/{location_id}         approved feed, location accepted (GET)
///
/// /moderation/pending            pending photos + trivia (GET)
/// /moderation/{type}/{id}        approve or reject (POST)
///
/// /submit/photo                  web-form photo (POST)
/// /submit/trivia                 web-form trivia (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(content::router())
        .merge(moderation::router())
        .merge(submit::router())
}
