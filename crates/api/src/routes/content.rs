use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// ```text
/// GET    /content                    list_content
/// GET    /content/                   list_content
/// GET    /content/{location_id}      list_content_for_location
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content", get(content::list_content))
        .route("/content/", get(content::list_content))
        .route(
            "/content/{location_id}",
            get(content::list_content_for_location),
        )
}
