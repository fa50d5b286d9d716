use std::sync::Arc;

use screenhound_db::SubmissionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the datastore handle is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The single datastore handle, built once at startup.
    pub store: Arc<dyn SubmissionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }
}
