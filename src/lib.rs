//! Quotebook: a catalogue of quotes and their authors
//!
//! This library provides the core of the quote catalogue: the data models,
//! database access, the query composer that builds tag, author and search
//! listings, pagination, and a JSON web API.
//!
//! ### Modules
//!
//! - `db`: Database connection management
//! - `models`: Data structures representing authors, tags and quotes
//! - `repo`: Repository layer for database operations
//! - `store`: The store abstraction the composer runs against
//! - `composer`: Listings, search and the tag ranking
//! - `pagination`: Fixed-size pages with navigation metadata
//! - `import`: Loading authors and quotes from JSON exports
//!
//! ### Web API
//!
//! - `GET /`, `GET /{page}`: All quotes
//! - `GET /tag/{tag_name}`, `GET /tag/{tag_name}/{page}`: Quotes carrying a tag
//! - `GET /author/{fullname}`, `DELETE /author/{fullname}`: Author detail and removal
//! - `GET|POST /search_data/{data}`, `GET|POST /search_data/{data}/{page}`: Search
//! - `POST /add_tag/`, `POST /add_author/`, `POST /add_quote/`: Creation
//! - `GET /tags`, `GET /authors`, `GET /top_tags`: Lists and the tag ranking

/// Query composition over the store
pub mod composer;

/// Configuration management module
pub mod config;

/// Database connection module
pub mod db;

/// Data transfer objects for the API
pub mod dto;

/// Error types
pub mod errors;

/// Request handlers for the API
pub mod handlers;

/// JSON import of authors and quotes
pub mod import;

/// Tracing subscriber setup
pub mod logging;

/// Data models module
pub mod models;

/// Page slicing of listings
pub mod pagination;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

/// Store abstraction used by the composer
pub mod store;

#[cfg(test)]
pub mod test_utils;

use axum::{
    routing::{get, post},
    Router,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;

use crate::handlers::*;

/// Migrations compiled into the binary
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Creates the application router with all routes configured
///
/// ### Arguments
///
/// * `pool` - The database connection pool shared by all handlers
///
/// ### Returns
///
/// A configured Axum router
pub fn create_app(pool: Arc<db::DbPool>) -> Router {
    Router::new()
        // Listing of all quotes
        .route("/", get(list_quotes_handler))
        .route("/{page}", get(list_quotes_page_handler))
        // Listing by tag
        .route("/tag/{tag_name}", get(quotes_by_tag_handler))
        .route("/tag/{tag_name}/{page}", get(quotes_by_tag_page_handler))
        // Author detail and removal
        .route("/author/{fullname}", get(get_author_handler).delete(delete_author_handler))
        // Search, with the optional inline search box
        .route("/search_data/{data}", get(search_handler).post(search_handler))
        .route("/search_data/{data}/{page}", get(search_page_handler).post(search_page_handler))
        // Creation
        .route("/add_tag/", post(create_tag_handler))
        .route("/add_author/", post(create_author_handler))
        .route("/add_quote/", post(create_quote_handler))
        // Lists and ranking
        .route("/tags", get(list_tags_handler))
        .route("/authors", get(list_authors_handler))
        .route("/top_tags", get(top_tags_handler))
        .with_state(pool)
}

/// Runs all pending migrations on the given connection
pub fn run_migrations(conn: &mut diesel::SqliteConnection) -> anyhow::Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    tracing::debug!("Applied {} migrations", applied.len());
    Ok(())
}
