use axum::routing::post;
use axum::Router;

use crate::handlers::submit;
use crate::state::AppState;

/// ```text
/// POST   /submit/photo     submit_photo
/// POST   /submit/trivia    submit_trivia
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit/photo", post(submit::submit_photo))
        .route("/submit/trivia", post(submit::submit_trivia))
}
