use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::composer;
use crate::db::DbPool;
use crate::dto::{AuthorDetail, CreateAuthorDto, DeletedAuthorDto};
use crate::errors::ApiError;
use crate::models::Author;
use crate::repo;

/// Handler for the author detail page
///
/// This function handles GET requests to `/author/{fullname}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `fullname` - The exact full name of the author
///
/// ### Returns
///
/// The author with their quotes, or 404 if no author has that name
#[instrument(skip(pool))]
pub async fn get_author_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Path(fullname), _): WithRejection<Path<String>, ApiError>,
) -> Result<Json<AuthorDetail>, ApiError> {
    let detail = composer::author_detail(pool.as_ref(), &fullname)?;

    debug!("Author has {} quotes", detail.quotes.len());
    Ok(Json(detail))
}

/// Handler for deleting an author and all of their quotes
///
/// This function handles DELETE requests to `/author/{fullname}`.
#[instrument(skip(pool))]
pub async fn delete_author_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Path(fullname), _): WithRejection<Path<String>, ApiError>,
) -> Result<Json<DeletedAuthorDto>, ApiError> {
    let author = composer::author_by_name(pool.as_ref(), &fullname)?;

    // Another request may have removed the author since the lookup
    let deleted_quotes = repo::delete_author(&pool, author.get_id())?
        .ok_or_else(|| ApiError::NotFound(format!("Author '{}' not found", fullname)))?;

    info!("Deleted author {:?} and {} quotes", fullname, deleted_quotes);
    Ok(Json(DeletedAuthorDto { fullname, deleted_quotes }))
}

/// Handler for creating a new author
///
/// This function handles POST requests to `/add_author/`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `payload` - The author's name, birth date and place, and description
///
/// ### Returns
///
/// The newly created author as JSON, or 409 if the name is taken
#[instrument(skip(pool, payload), fields(fullname = %payload.fullname))]
pub async fn create_author_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateAuthorDto>, ApiError>,
) -> Result<Json<Author>, ApiError> {
    info!("Creating new author");

    let new_author = payload.clean()?;
    let conflict = || ApiError::Conflict(format!("Author '{}' already exists", new_author.fullname));

    if repo::get_author_by_name(&pool, &new_author.fullname)?.is_some() {
        debug!("Author name already taken");
        return Err(conflict());
    }

    match repo::create_author(&pool, &new_author) {
        Ok(author) => {
            info!("Successfully created author with id: {}", author.get_id());
            Ok(Json(author))
        }
        // Lost a race with another insert of the same name
        Err(e) if format!("{:#}", e).contains("UNIQUE constraint failed") => Err(conflict()),
        Err(e) => Err(ApiError::Database(e)),
    }
}

/// Handler for listing all authors
///
/// This function handles GET requests to `/authors`.
#[instrument(skip(pool))]
pub async fn list_authors_handler(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<Author>>, ApiError> {
    let authors = repo::list_authors(&pool)?;

    info!("Retrieved {} authors", authors.len());
    Ok(Json(authors))
}
