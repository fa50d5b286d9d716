//! Shared response envelope types for API handlers.
//!
//! Successful JSON responses carry `"success": true` next to their payload.
//! Use [`DataResponse`] for single-record results instead of ad-hoc
//! `serde_json::json!` bodies.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::ok(updated)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
