//! Repository for the `dog_photos` table.

use sqlx::PgPool;
use screenhound_core::listing::ListQuery;
use screenhound_core::submission::{NewDogPhoto, SubmissionKind, SubmissionStatus};
use screenhound_core::types::DbId;

use crate::models::DogPhoto;

/// Column list for dog_photos queries.
const COLUMNS: &str = "id, phone_number, \"type\", dog_name, image_url, media_type, \
    owner_name, status, created_at";

/// Provides insert, listing, and status updates for dog photos.
pub struct DogPhotoRepo;

impl DogPhotoRepo {
    /// Insert a new photo with status `pending`, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewDogPhoto) -> Result<DogPhoto, sqlx::Error> {
        let query = format!(
            "INSERT INTO dog_photos
                (phone_number, \"type\", dog_name, image_url, media_type, owner_name, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DogPhoto>(&query)
            .bind(&input.phone_number)
            .bind(SubmissionKind::DogPhoto.as_str())
            .bind(&input.dog_name)
            .bind(&input.image_url)
            .bind(&input.media_type)
            .bind(&input.owner_name)
            .bind(SubmissionStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// List photos with the given status in the query's order.
    ///
    /// A `None` limit binds SQL `NULL`, which PostgreSQL treats as no limit.
    pub async fn list(pool: &PgPool, list: &ListQuery) -> Result<Vec<DogPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dog_photos
             WHERE status = $1
             ORDER BY {}
             LIMIT $2",
            list.order.sql()
        );
        sqlx::query_as::<_, DogPhoto>(&query)
            .bind(list.status.as_str())
            .bind(list.limit)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a photo's status. Returns `None` if no row has this ID.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: SubmissionStatus,
    ) -> Result<Option<DogPhoto>, sqlx::Error> {
        let query = format!(
            "UPDATE dog_photos SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DogPhoto>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
