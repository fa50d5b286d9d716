//! Provider webhook routes, mounted at the root.

use axum::routing::post;
use axum::Router;

use crate::handlers::webhook;
use crate::state::AppState;

/// ```text
/// POST   /webhook/twilio    receive_message
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/webhook/twilio", post(webhook::receive_message))
}
