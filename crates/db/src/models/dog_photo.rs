use serde::Serialize;
use sqlx::FromRow;
use screenhound_core::types::{DbId, Timestamp};

/// A row from the `dog_photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DogPhoto {
    pub id: DbId,
    pub phone_number: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub submission_type: String,
    pub dog_name: String,
    pub image_url: String,
    pub media_type: String,
    pub owner_name: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}
