//! Shared helpers for API integration tests.
//!
//! The app is built with the production router over an in-memory
//! [`SubmissionStore`], so these tests run without PostgreSQL.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use screenhound_api::config::ServerConfig;
use screenhound_api::router::build_app_router;
use screenhound_api::state::AppState;
use screenhound_core::listing::{ListQuery, SortOrder};
use screenhound_core::submission::{
    NewDogPhoto, NewSubmission, NewTrivia, SubmissionKind, SubmissionStatus,
};
use screenhound_core::types::DbId;
use screenhound_db::models::{DogPhoto, Submission, TriviaSubmission};
use screenhound_db::SubmissionStore;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    next_id: DbId,
    photos: Vec<DogPhoto>,
    trivia: Vec<TriviaSubmission>,
}

/// [`SubmissionStore`] over two in-memory tables.
///
/// Each insert gets the next ID and a timestamp one second after the
/// previous insert, so ordering by `created_at` matches insertion order.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent call fail with a pool timeout.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn photos(&self) -> Vec<DogPhoto> {
        self.tables.lock().unwrap().photos.clone()
    }

    pub fn trivia(&self) -> Vec<TriviaSubmission> {
        self.tables.lock().unwrap().trivia.clone()
    }

    /// Insert a row directly with the given status.
    pub fn seed(&self, submission: NewSubmission, status: SubmissionStatus) -> DbId {
        let mut tables = self.tables.lock().unwrap();
        let row = insert(&mut tables, &submission);
        set_row_status(&mut tables, row.kind(), row.id(), status);
        row.id()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

fn insert(tables: &mut Tables, submission: &NewSubmission) -> Submission {
    tables.next_id += 1;
    let id = tables.next_id;
    let created_at = epoch() + Duration::seconds(id);
    let status = SubmissionStatus::Pending.as_str().to_string();
    let submission_type = submission.kind().as_str().to_string();

    match submission {
        NewSubmission::DogPhoto(p) => {
            let row = DogPhoto {
                id,
                phone_number: p.phone_number.clone(),
                submission_type,
                dog_name: p.dog_name.clone(),
                image_url: p.image_url.clone(),
                media_type: p.media_type.clone(),
                owner_name: p.owner_name.clone(),
                status,
                created_at,
            };
            tables.photos.push(row.clone());
            row.into()
        }
        NewSubmission::Trivia(t) => {
            let row = TriviaSubmission {
                id,
                phone_number: t.phone_number.clone(),
                submission_type,
                trivia_text: t.trivia_text.clone(),
                status,
                created_at,
            };
            tables.trivia.push(row.clone());
            row.into()
        }
    }
}

fn set_row_status(
    tables: &mut Tables,
    kind: SubmissionKind,
    id: DbId,
    status: SubmissionStatus,
) -> Option<Submission> {
    match kind {
        SubmissionKind::DogPhoto => tables.photos.iter_mut().find(|p| p.id == id).map(|p| {
            p.status = status.as_str().to_string();
            Submission::from(p.clone())
        }),
        SubmissionKind::Trivia => tables.trivia.iter_mut().find(|t| t.id == id).map(|t| {
            t.status = status.as_str().to_string();
            Submission::from(t.clone())
        }),
    }
}

fn apply_query<T: Clone>(
    rows: &[T],
    query: &ListQuery,
    status_of: impl Fn(&T) -> &str,
    key_of: impl Fn(&T) -> (DateTime<Utc>, DbId),
) -> Vec<T> {
    let mut matched: Vec<T> = rows
        .iter()
        .filter(|r| status_of(r) == query.status.as_str())
        .cloned()
        .collect();
    matched.sort_by_key(|r| key_of(r));
    if query.order == SortOrder::NewestFirst {
        matched.reverse();
    }
    if let Some(limit) = query.limit {
        matched.truncate(usize::try_from(limit).unwrap_or(0));
    }
    matched
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn create(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        Ok(insert(&mut tables, submission))
    }

    async fn list_photos(&self, query: ListQuery) -> Result<Vec<DogPhoto>, sqlx::Error> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(apply_query(
            &tables.photos,
            &query,
            |p| &p.status,
            |p| (p.created_at, p.id),
        ))
    }

    async fn list_trivia(&self, query: ListQuery) -> Result<Vec<TriviaSubmission>, sqlx::Error> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(apply_query(
            &tables.trivia,
            &query,
            |t| &t.status,
            |t| (t.created_at, t.id),
        ))
    }

    async fn set_status(
        &self,
        kind: SubmissionKind,
        id: DbId,
        status: SubmissionStatus,
    ) -> Result<Option<Submission>, sqlx::Error> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        Ok(set_row_status(&mut tables, kind, id, status))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn photo(dog_name: &str, owner_name: Option<&str>) -> NewSubmission {
    NewSubmission::DogPhoto(NewDogPhoto {
        phone_number: "+15550001111".into(),
        dog_name: dog_name.into(),
        image_url: format!("https://media.example.com/{dog_name}.jpg"),
        media_type: "image/jpeg".into(),
        owner_name: owner_name.map(str::to_string),
    })
}

pub fn trivia(text: &str) -> NewSubmission {
    NewSubmission::Trivia(NewTrivia {
        phone_number: "+15550002222".into(),
        trivia_text: text.into(),
    })
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body built from pairs.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
