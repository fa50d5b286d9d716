//! Datastore port used by the HTTP layer.
//!
//! Handlers depend on [`SubmissionStore`] rather than on a pool directly, so
//! the single datastore handle is built once at startup and injected.

use async_trait::async_trait;
use screenhound_core::listing::ListQuery;
use screenhound_core::submission::{NewSubmission, SubmissionKind, SubmissionStatus};
use screenhound_core::types::DbId;

use crate::models::{DogPhoto, Submission, TriviaSubmission};
use crate::repositories::{DogPhotoRepo, TriviaRepo};
use crate::DbPool;

/// Table-scoped insert, filtered listing, and status update for submissions.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert a new submission with status `pending`.
    async fn create(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error>;

    async fn list_photos(&self, query: ListQuery) -> Result<Vec<DogPhoto>, sqlx::Error>;

    async fn list_trivia(&self, query: ListQuery) -> Result<Vec<TriviaSubmission>, sqlx::Error>;

    /// Overwrite the status of one submission, regardless of its current
    /// status. Returns `None` when the ID does not exist for that kind.
    async fn set_status(
        &self,
        kind: SubmissionKind,
        id: DbId,
        status: SubmissionStatus,
    ) -> Result<Option<Submission>, sqlx::Error>;
}

/// [`SubmissionStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: DbPool,
}

impl PgSubmissionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn create(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error> {
        let created: Submission = match submission {
            NewSubmission::DogPhoto(photo) => DogPhotoRepo::create(&self.pool, photo).await?.into(),
            NewSubmission::Trivia(trivia) => TriviaRepo::create(&self.pool, trivia).await?.into(),
        };
        tracing::debug!(
            submission_id = created.id(),
            kind = %created.kind(),
            "Submission row inserted"
        );
        Ok(created)
    }

    async fn list_photos(&self, query: ListQuery) -> Result<Vec<DogPhoto>, sqlx::Error> {
        DogPhotoRepo::list(&self.pool, &query).await
    }

    async fn list_trivia(&self, query: ListQuery) -> Result<Vec<TriviaSubmission>, sqlx::Error> {
        TriviaRepo::list(&self.pool, &query).await
    }

    async fn set_status(
        &self,
        kind: SubmissionKind,
        id: DbId,
        status: SubmissionStatus,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let updated = match kind {
            SubmissionKind::DogPhoto => DogPhotoRepo::set_status(&self.pool, id, status)
                .await?
                .map(Submission::from),
            SubmissionKind::Trivia => TriviaRepo::set_status(&self.pool, id, status)
                .await?
                .map(Submission::from),
        };
        Ok(updated)
    }
}
