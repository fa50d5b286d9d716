//! Repository for the `trivia_submissions` table.

use sqlx::PgPool;
use screenhound_core::listing::ListQuery;
use screenhound_core::submission::{NewTrivia, SubmissionKind, SubmissionStatus};
use screenhound_core::types::DbId;

use crate::models::TriviaSubmission;

/// Column list for trivia_submissions queries.
const COLUMNS: &str = "id, phone_number, \"type\", trivia_text, status, created_at";

/// Provides insert, listing, and status updates for trivia facts.
pub struct TriviaRepo;

impl TriviaRepo {
    /// Insert a new trivia fact with status `pending`, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTrivia) -> Result<TriviaSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO trivia_submissions (phone_number, \"type\", trivia_text, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TriviaSubmission>(&query)
            .bind(&input.phone_number)
            .bind(SubmissionKind::Trivia.as_str())
            .bind(&input.trivia_text)
            .bind(SubmissionStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// List trivia with the given status in the query's order.
    pub async fn list(
        pool: &PgPool,
        list: &ListQuery,
    ) -> Result<Vec<TriviaSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trivia_submissions
             WHERE status = $1
             ORDER BY {}
             LIMIT $2",
            list.order.sql()
        );
        sqlx::query_as::<_, TriviaSubmission>(&query)
            .bind(list.status.as_str())
            .bind(list.limit)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a trivia item's status. Returns `None` if no row has this ID.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: SubmissionStatus,
    ) -> Result<Option<TriviaSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE trivia_submissions SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TriviaSubmission>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
