//! Integration tests for the quote listings and the tag ranking

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

/// Tests that the index lists every quote in insertion order
///
/// This test verifies:
/// 1. Both seeded quotes are listed, oldest first
/// 2. Each quote carries its author name and sorted tag names
/// 3. The tag ranking puts the most used tag first
#[tokio::test]
async fn test_index_lists_all_quotes() {
    let mut app = create_test_app();
    seed_sample(&mut app).await;

    let (status, body) = get(&mut app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote_texts(&body), vec!["A Twain quote", "A Wilde quote"]);
    assert_eq!(body["quotes"]["items"][0]["author"], "Mark Twain");
    assert_eq!(body["quotes"]["items"][0]["tags"], json!(["life", "wit"]));
    assert_eq!(body["top_tags"][0], json!({ "id": 1, "name": "wit", "quote_count": 2 }));
    assert_eq!(body["top_tags"][1]["name"], "life");
    assert_eq!(body["top_tags"][1]["quote_count"], 1);
}

/// Tests the navigation metadata across pages of ten
#[tokio::test]
async fn test_index_pagination() {
    let mut app = create_test_app();
    let author = create_author(&mut app, "Mark Twain").await;
    for i in 1..=23 {
        create_quote(&mut app, &author, &format!("Quote {}", i), &[]).await;
    }

    let (_, first) = get(&mut app, "/1").await;
    assert_eq!(first["quotes"]["items"].as_array().unwrap().len(), 10);
    assert_eq!(first["quotes"]["total_pages"], 3);
    assert_eq!(first["quotes"]["total_items"], 23);
    assert_eq!(first["quotes"]["has_prev"], false);
    assert_eq!(first["quotes"]["has_next"], true);

    let (_, last) = get(&mut app, "/3").await;
    assert_eq!(quote_texts(&last), vec!["Quote 21", "Quote 22", "Quote 23"]);
    assert_eq!(last["quotes"]["has_prev"], true);
    assert_eq!(last["quotes"]["has_next"], false);
}

/// Tests that out-of-range pages are clamped instead of rejected
#[tokio::test]
async fn test_out_of_range_pages_are_clamped() {
    let mut app = create_test_app();
    let author = create_author(&mut app, "Mark Twain").await;
    for i in 1..=12 {
        create_quote(&mut app, &author, &format!("Quote {}", i), &[]).await;
    }

    let (status, body) = get(&mut app, "/99").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quotes"]["page_number"], 2);
    assert_eq!(quote_texts(&body), vec!["Quote 11", "Quote 12"]);

    let (status, body) = get(&mut app, "/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quotes"]["page_number"], 1);
}

/// Tests that a non-numeric page segment is rejected with a JSON error body
#[tokio::test]
async fn test_non_numeric_page_is_rejected() {
    let mut app = create_test_app();

    let (status, body) = get(&mut app, "/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()), "unexpected body: {}", body);

    let (status, body) = get(&mut app, "/tag/wit/two").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Tests the listing of quotes by tag
#[tokio::test]
async fn test_tag_listing() {
    let mut app = create_test_app();
    seed_sample(&mut app).await;

    let (status, body) = get(&mut app, "/tag/wit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag_name"], "wit");
    assert_eq!(quote_texts(&body), vec!["A Twain quote", "A Wilde quote"]);

    let (status, body) = get(&mut app, "/tag/life/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote_texts(&body), vec!["A Twain quote"]);
    assert_eq!(body["top_tags"][0]["name"], "wit");
}

/// Tests that an unknown tag is a 404 with an error message
#[tokio::test]
async fn test_unknown_tag_is_not_found() {
    let mut app = create_test_app();
    seed_sample(&mut app).await;

    let (status, body) = get(&mut app, "/tag/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nonexistent"));
}

/// Tests that an existing tag without quotes gives an empty listing
#[tokio::test]
async fn test_unused_tag_gives_empty_listing() {
    let mut app = create_test_app();
    seed_sample(&mut app).await;
    create_tag(&mut app, "unused").await;

    let (status, body) = get(&mut app, "/tag/unused").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quotes"]["total_items"], 0);
    assert_eq!(body["quotes"]["total_pages"], 0);
}

/// Tests the tag list, the ranking endpoint, and tag reuse
///
/// This test verifies:
/// 1. Creating a tag with an existing name returns the existing tag
/// 2. Unused tags appear in the ranking with a zero count
/// 3. Names outside the allowed length are rejected
#[tokio::test]
async fn test_tag_endpoints() {
    let mut app = create_test_app();
    seed_sample(&mut app).await;

    let reused = create_tag(&mut app, "wit").await;
    assert_eq!(reused.get_id(), 1);
    create_tag(&mut app, "unused").await;

    let (status, tags) = get(&mut app, "/tags").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tags.as_array().unwrap().len(), 3);

    let (status, ranking) = get(&mut app, "/top_tags").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = ranking
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["wit", "life", "unused"]);
    assert_eq!(ranking[2]["quote_count"], 0);

    let (status, _) = post_json(&mut app, "/add_tag/", json!({ "name": "ab" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests quote creation validation through the API
#[tokio::test]
async fn test_create_quote_validation() {
    let mut app = create_test_app();
    let author = create_author(&mut app, "Mark Twain").await;

    let (status, _) = post_json(
        &mut app,
        "/add_quote/",
        json!({ "quote": "   ", "author_id": author.get_id() }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&mut app, "/add_quote/", json!({ "quote": "Orphan", "author_id": 999 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&mut app, "/").await;
    assert_eq!(body["quotes"]["total_items"], 0);
}
