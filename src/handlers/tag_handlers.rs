use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::composer;
use crate::db::DbPool;
use crate::dto::{CreateTagDto, TagListing};
use crate::errors::ApiError;
use crate::models::{Tag, TagCount};
use crate::repo;

/// Handler for the first page of quotes carrying a tag
///
/// This function handles GET requests to `/tag/{tag_name}`.
#[instrument(skip(pool))]
pub async fn quotes_by_tag_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Path(tag_name), _): WithRejection<Path<String>, ApiError>,
) -> Result<Json<TagListing>, ApiError> {
    let listing = composer::list_by_tag(pool.as_ref(), &tag_name, 1)?;
    Ok(Json(listing))
}

/// Handler for one page of quotes carrying a tag
///
/// This function handles GET requests to `/tag/{tag_name}/{page}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `params` - The exact tag name and the requested page
///
/// ### Returns
///
/// The page of quotes, or 404 if no tag has that name
#[instrument(skip(pool))]
pub async fn quotes_by_tag_page_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Path((tag_name, page)), _): WithRejection<Path<(String, i64)>, ApiError>,
) -> Result<Json<TagListing>, ApiError> {
    debug!("Listing quotes by tag");

    let listing = composer::list_by_tag(pool.as_ref(), &tag_name, page)?;

    info!("Tag {:?} has {} quotes", tag_name, listing.listing.quotes.total_items);
    Ok(Json(listing))
}

/// Handler for creating a new tag
///
/// This function handles POST requests to `/add_tag/`. A tag that already
/// has the requested name is returned instead of a duplicate.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `payload` - The request payload containing the tag name
///
/// ### Returns
///
/// The existing or newly created tag as JSON
#[instrument(skip(pool), fields(name = %payload.name))]
pub async fn create_tag_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateTagDto>, ApiError>,
) -> Result<Json<Tag>, ApiError> {
    info!("Creating new tag");

    let name = payload.clean()?;
    let (tag, created) = repo::get_or_create_tag(&pool, &name)?;

    if created {
        info!("Successfully created tag with id: {}", tag.get_id());
    } else {
        debug!("Reusing tag with id: {}", tag.get_id());
    }
    Ok(Json(tag))
}

/// Handler for listing all tags
///
/// This function handles GET requests to `/tags`.
#[instrument(skip(pool))]
pub async fn list_tags_handler(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<Tag>>, ApiError> {
    debug!("Listing all tags");

    let tags = repo::list_tags(&pool)?;

    info!("Retrieved {} tags", tags.len());
    Ok(Json(tags))
}

/// Handler for the tag ranking
///
/// This function handles GET requests to `/top_tags`.
#[instrument(skip(pool))]
pub async fn top_tags_handler(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<TagCount>>, ApiError> {
    let ranking = composer::top_tags(pool.as_ref())?;
    Ok(Json(ranking))
}
