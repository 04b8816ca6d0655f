//! API integration tests
//!
//! Drives complete HTTP request/response cycles through the assembled
//! router, backed by the in-memory store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

use rolodex::server::build_router;
use rolodex::store::MemoryStore;

/// Helper to create the test app router
fn create_test_app() -> Router {
    build_router(Arc::new(MemoryStore::new()))
}

/// Send a request and return status plus parsed JSON body (None when empty).
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };
    (status, json)
}

fn benny() -> Value {
    json!({
        "firstName": "Benny",
        "lastName": "Jay",
        "email": "benny@example.com"
    })
}

/// An id that parses but matches nothing.
const ABSENT_ID: &str = "65a114efb7d2a33b5c8f0e21";

#[tokio::test]
async fn test_list_is_empty_initially() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/contacts", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap(), json!([]));
}

#[tokio::test]
async fn test_create_returns_201_with_id_and_submitted_fields() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::POST, "/contacts", Some(benny())).await;

    assert_eq!(status, StatusCode::CREATED);
    let body = body.unwrap();
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["firstName"], "Benny");
    assert_eq!(body["lastName"], "Jay");
    assert_eq!(body["email"], "benny@example.com");
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = create_test_app();
    let (_, created) = send(&app, Method::POST, "/contacts", Some(benny())).await;
    let created = created.unwrap();
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = send(&app, Method::GET, &format!("/contacts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched.unwrap(), created);
}

#[tokio::test]
async fn test_list_includes_exactly_the_created_record() {
    let app = create_test_app();
    let (_, created) = send(&app, Method::POST, "/contacts", Some(benny())).await;

    let (status, listed) = send(&app, Method::GET, "/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.unwrap(), json!([created.unwrap()]));
}

#[tokio::test]
async fn test_create_with_all_fields() {
    let app = create_test_app();
    let payload = json!({
        "firstName": "Benny",
        "lastName": "Jay",
        "email": "benny@example.com",
        "favoriteColor": "Blue",
        "birthday": "1995-05-15"
    });

    let (status, body) = send(&app, Method::POST, "/contacts", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let body = body.unwrap();
    assert_eq!(body["favoriteColor"], "Blue");
    assert_eq!(body["birthday"], "1995-05-15");
}

#[tokio::test]
async fn test_create_ignores_unknown_fields() {
    let app = create_test_app();
    let mut payload = benny();
    payload["nickname"] = json!("B");

    let (status, body) = send(&app, Method::POST, "/contacts", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.unwrap().get("nickname").is_none());
}

#[tokio::test]
async fn test_create_empty_body_lists_every_violated_rule() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::POST, "/contacts", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.unwrap(),
        json!({
            "errors": [
                "First name is required",
                "Last name is required",
                "Email is required",
            ]
        })
    );
}

#[tokio::test]
async fn test_create_invalid_email() {
    let app = create_test_app();
    let mut payload = benny();
    payload["email"] = json!("benny-at-example");

    let (status, body) = send(&app, Method::POST, "/contacts", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.unwrap(),
        json!({ "errors": ["Please provide a valid email address"] })
    );
}

#[tokio::test]
async fn test_create_short_names() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({
            "firstName": "B",
            "lastName": "J",
            "email": "benny@example.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.unwrap(),
        json!({
            "errors": [
                "First name must be at least 2 characters",
                "Last name must be at least 2 characters",
            ]
        })
    );
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, &format!("/contacts/{ABSENT_ID}"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.unwrap(), json!({ "message": "Contact not found" }));
}

#[tokio::test]
async fn test_get_malformed_id_is_404() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/contacts/not-a-real-id", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.unwrap(), json!({ "message": "Contact not found" }));
}

#[tokio::test]
async fn test_update_only_favorite_color_keeps_other_fields() {
    let app = create_test_app();
    let (_, created) = send(&app, Method::POST, "/contacts", Some(benny())).await;
    let id = created.unwrap()["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/contacts/{id}"),
        Some(json!({ "favoriteColor": "Green" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = updated.unwrap();
    assert_eq!(updated["favoriteColor"], "Green");
    assert_eq!(updated["firstName"], "Benny");
    assert_eq!(updated["lastName"], "Jay");
    assert_eq!(updated["email"], "benny@example.com");

    // The stored record reflects the change.
    let (_, fetched) = send(&app, Method::GET, &format!("/contacts/{id}"), None).await;
    assert_eq!(fetched.unwrap(), updated);
}

#[tokio::test]
async fn test_update_revalidates_merged_document() {
    let app = create_test_app();
    let (_, created) = send(&app, Method::POST, "/contacts", Some(benny())).await;
    let id = created.unwrap()["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/contacts/{id}"),
        Some(json!({ "email": "broken" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.unwrap(),
        json!({ "errors": ["Please provide a valid email address"] })
    );
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/contacts/{ABSENT_ID}"),
        Some(json!({ "favoriteColor": "Green" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.unwrap(), json!({ "message": "Contact not found" }));
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let app = create_test_app();
    let (_, created) = send(&app, Method::POST, "/contacts", Some(benny())).await;
    let id = created.unwrap()["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::DELETE, &format!("/contacts/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());

    let (status, body) = send(&app, Method::DELETE, &format!("/contacts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.unwrap(), json!({ "message": "Contact not found" }));
}

#[tokio::test]
async fn test_responses_carry_the_cors_allow_header() {
    let app = create_test_app();

    for (method, uri) in [
        (Method::GET, "/contacts"),
        (Method::GET, "/contacts/not-a-real-id"),
        (Method::GET, "/health"),
    ] {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*"),
            "missing allow-origin header on {method} {uri}"
        );
    }
}

#[tokio::test]
async fn test_api_docs_describe_the_five_operations() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/api-docs", None).await;

    assert_eq!(status, StatusCode::OK);
    let document = body.unwrap();
    assert_eq!(document["info"]["title"], "Contacts API");

    let paths = document["paths"].as_object().unwrap();
    assert!(paths["/contacts"].get("get").is_some());
    assert!(paths["/contacts"].get("post").is_some());
    assert!(paths["/contacts/{id}"].get("get").is_some());
    assert!(paths["/contacts/{id}"].get("put").is_some());
    assert!(paths["/contacts/{id}"].get("delete").is_some());

    let schema = &document["components"]["schemas"]["Contact"];
    assert_eq!(schema["properties"]["firstName"]["example"], "Benny");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["status"], "ok");
}
