//! HTTP-level tests for web-form submissions.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, post_json, MemoryStore};
use tower::ServiceExt;
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: Photo submission with only an image URL gets defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn photo_submission_applies_defaults() {
    let store = MemoryStore::new();

    let response = post_json(
        build_test_app(store.clone()),
        "/api/submit/photo",
        json!({ "image_url": "https://cdn.example.com/dog.jpg" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["type"], "dog_photo");
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["dog_name"], "Anonymous Pup");
    assert_eq!(json["data"]["phone_number"], "web-submission");
    assert_eq!(json["data"]["media_type"], "image/jpeg");
    assert!(json["data"]["owner_name"].is_null());

    assert_eq!(store.photos().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Provided photo fields are stored as given
// ---------------------------------------------------------------------------

#[tokio::test]
async fn photo_submission_keeps_fields() {
    let store = MemoryStore::new();

    let response = post_json(
        build_test_app(store.clone()),
        "/api/submit/photo",
        json!({
            "dog_name": "Mochi",
            "image_url": "https://cdn.example.com/mochi.png",
            "media_type": "image/png",
            "owner_name": "Lee",
            "phone_number": "+15550009999"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let photo = &store.photos()[0];
    assert_eq!(photo.dog_name, "Mochi");
    assert_eq!(photo.media_type, "image/png");
    assert_eq!(photo.owner_name.as_deref(), Some("Lee"));
    assert_eq!(photo.phone_number, "+15550009999");
}

// ---------------------------------------------------------------------------
// Test: Missing image URL is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn photo_submission_requires_image_url() {
    let store = MemoryStore::new();

    let response = post_json(
        build_test_app(store.clone()),
        "/api/submit/photo",
        json!({ "dog_name": "Mochi" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(store.photos().is_empty());
}

// ---------------------------------------------------------------------------
// Test: Trivia submission is stored pending
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trivia_submission_is_stored() {
    let store = MemoryStore::new();

    let response = post_json(
        build_test_app(store.clone()),
        "/api/submit/trivia",
        json!({ "trivia_text": "Greyhounds can reach 45 mph." }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["type"], "trivia");
    assert_eq!(json["data"]["trivia_text"], "Greyhounds can reach 45 mph.");
    assert_eq!(json["data"]["phone_number"], "web-submission");
    assert_eq!(store.trivia().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Blank trivia text is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trivia_submission_requires_text() {
    let response = post_json(
        build_test_app(MemoryStore::new()),
        "/api/submit/trivia",
        json!({ "trivia_text": "   " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: Malformed JSON produces the JSON error envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_json_error() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/submit/trivia")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = build_test_app(MemoryStore::new())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "INVALID_REQUEST");
}
