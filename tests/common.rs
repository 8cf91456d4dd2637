//! Common test utilities for Quotebook integration tests
//!
//! Shared application setup and helpers that create authors, tags and quotes
//! through the API.

#![allow(dead_code)]

use quotebook::{
    create_app,
    db::init_pool,
    dto::QuoteView,
    models::{Author, Tag},
};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::Service;

/// Creates a test application backed by its own in-memory SQLite database
///
/// The database is a named shared-cache memory database so every pooled
/// connection sees the same data, while each call gets a fresh database.
///
/// ### Returns
///
/// An Axum Router configured with all routes
pub fn create_test_app() -> Router {
    let database_url = format!("file:it_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = Arc::new(init_pool(&database_url).unwrap());

    let conn = &mut pool.get().unwrap();
    quotebook::run_migrations(conn).unwrap();

    create_app(pool)
}

/// Sends a request and returns the status with the parsed JSON body
///
/// Bodies that are not JSON come back as `Value::Null`.
pub async fn send(app: &mut Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

/// Sends a GET request
pub async fn get(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).method("GET").body(Body::empty()).unwrap();
    send(app, request).await
}

/// Sends a POST request with a JSON body
pub async fn post_json(app: &mut Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Sends a DELETE request
pub async fn delete(app: &mut Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).method("DELETE").body(Body::empty()).unwrap();
    send(app, request).await
}

/// Creates a tag via the API
pub async fn create_tag(app: &mut Router, name: &str) -> Tag {
    let (status, body) = post_json(app, "/add_tag/", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::OK, "creating tag {:?}: {}", name, body);
    serde_json::from_value(body).unwrap()
}

/// Creates an author via the API with placeholder biography fields
pub async fn create_author(app: &mut Router, fullname: &str) -> Author {
    let (status, body) = post_json(
        app,
        "/add_author/",
        json!({
            "fullname": fullname,
            "born_location": "Somewhere",
            "description": format!("About {}", fullname)
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "creating author {:?}: {}", fullname, body);
    serde_json::from_value(body).unwrap()
}

/// Creates a quote via the API, creating its tags by name first
pub async fn create_quote(app: &mut Router, author: &Author, quote: &str, tag_names: &[&str]) -> QuoteView {
    let mut tag_ids = Vec::new();
    for name in tag_names {
        tag_ids.push(create_tag(app, name).await.get_id());
    }

    let (status, body) = post_json(
        app,
        "/add_quote/",
        json!({
            "quote": quote,
            "author_id": author.get_id(),
            "tags": tag_ids
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "creating quote {:?}: {}", quote, body);
    serde_json::from_value(body).unwrap()
}

/// Seeds Mark Twain with "A Twain quote" tagged {wit, life} and Oscar Wilde
/// with "A Wilde quote" tagged {wit}
pub async fn seed_sample(app: &mut Router) -> (Author, Author) {
    let twain = create_author(app, "Mark Twain").await;
    let wilde = create_author(app, "Oscar Wilde").await;
    create_quote(app, &twain, "A Twain quote", &["wit", "life"]).await;
    create_quote(app, &wilde, "A Wilde quote", &["wit"]).await;
    (twain, wilde)
}

/// Extracts the quote texts of a listing body
pub fn quote_texts(body: &Value) -> Vec<String> {
    body["quotes"]["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["quote"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
