use serde::Serialize;
use sqlx::FromRow;
use screenhound_core::types::{DbId, Timestamp};

/// A row from the `trivia_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TriviaSubmission {
    pub id: DbId,
    pub phone_number: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub submission_type: String,
    pub trivia_text: String,
    pub status: String,
    pub created_at: Timestamp,
}
