use crate::db::{self, DbPool};
use crate::errors::ApiError;
use crate::models::{Author, NewAuthor, Quote, Tag};
use crate::repo;
use crate::run_migrations;
use axum::extract::Path;
use axum::Json;
use axum_extra::extract::WithRejection;
use proptest::prelude::*;
use std::marker::PhantomData;
use std::sync::Arc;

/// Sets up a test database with migrations applied
///
/// This function:
/// 1. Creates a uniquely named shared-cache in-memory SQLite database
/// 2. Runs all migrations to set up the schema
///
/// Plain ":memory:" would give every pooled connection its own empty
/// database. The shared-cache URI makes all connections of this pool see the
/// same database while keeping tests isolated from each other.
///
/// ### Returns
///
/// An Arc-wrapped database connection pool connected to the in-memory database
pub fn setup_test_db() -> Arc<DbPool> {
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = db::init_pool(&database_url).expect("Failed to create pool");

    let mut conn = pool.get().expect("Failed to get connection");
    run_migrations(&mut conn).expect("Failed to run migrations");
    drop(conn);

    Arc::new(pool)
}

/// Wraps a value the way the router hands a path parameter to a handler
pub fn path<T>(value: T) -> WithRejection<Path<T>, ApiError> {
    WithRejection(Path(value), PhantomData)
}

/// Wraps a value the way the router hands a JSON body to a handler
pub fn json<T>(value: T) -> WithRejection<Json<T>, ApiError> {
    WithRejection(Json(value), PhantomData)
}

/// Creates an author with placeholder biography fields
pub fn create_test_author(pool: &DbPool, fullname: &str) -> Author {
    repo::create_author(
        pool,
        &NewAuthor::new(
            fullname.to_string(),
            None,
            "Somewhere".to_string(),
            format!("About {}", fullname),
        ),
    )
    .unwrap()
}

/// Creates a quote with the named tags, creating the tags on demand
pub fn create_test_quote(pool: &DbPool, author: &Author, body: &str, tag_names: &[&str]) -> Quote {
    let tag_ids: Vec<i32> = tag_names
        .iter()
        .map(|name| repo::get_or_create_tag(pool, name).unwrap().0.get_id())
        .collect();
    repo::create_quote(pool, body, author.get_id(), &tag_ids).unwrap()
}

/// The two-author store used throughout the tests
pub struct SampleStore {
    pub twain: Author,
    pub wilde: Author,
    /// "A" by Mark Twain, tagged {wit, life}
    pub quote_a: Quote,
    /// "B" by Oscar Wilde, tagged {wit}
    pub quote_b: Quote,
}

/// Seeds Mark Twain with quote "A" tagged {wit, life} and Oscar Wilde with
/// quote "B" tagged {wit}
pub fn seed_sample_store(pool: &DbPool) -> SampleStore {
    let twain = create_test_author(pool, "Mark Twain");
    let wilde = create_test_author(pool, "Oscar Wilde");
    let quote_a = create_test_quote(pool, &twain, "A", &["wit", "life"]);
    let quote_b = create_test_quote(pool, &wilde, "B", &["wit"]);

    SampleStore { twain, wilde, quote_a, quote_b }
}

/// Looks up a tag that the test expects to exist
pub fn tag_named(pool: &DbPool, name: &str) -> Tag {
    repo::get_tag_by_name(pool, name).unwrap().unwrap()
}

/// Generates short lowercase tag names, with repeats likely across draws
pub fn arb_tag_name() -> impl Strategy<Value = String> {
    "[a-e]{1,3}"
}

/// Generates a quote layout: for each quote, the list of tag names it carries
pub fn arb_tagging() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(arb_tag_name(), 0..4), 0..25)
}

/// Generates strings with whitespace, control characters and unicode mixed in
pub fn arb_messy_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "\\s+",
        "\\PC*",
        "[\\x00-\\x1f]{1,5}",
    ]
}
