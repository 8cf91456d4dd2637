use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::composer;
use crate::db::DbPool;
use crate::dto::{CreateQuoteDto, QuoteListing, QuoteView};
use crate::errors::ApiError;
use crate::repo;

/// Handler for the first page of all quotes
///
/// This function handles GET requests to `/`.
#[instrument(skip(pool))]
pub async fn list_quotes_handler(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<QuoteListing>, ApiError> {
    let listing = composer::list_all(pool.as_ref(), 1)?;
    Ok(Json(listing))
}

/// Handler for one page of all quotes
///
/// This function handles GET requests to `/{page}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `page` - The requested page, clamped into the valid range
///
/// ### Returns
///
/// The page of quotes together with the top tags
#[instrument(skip(pool))]
pub async fn list_quotes_page_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Path(page), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<QuoteListing>, ApiError> {
    debug!("Listing quotes");

    let listing = composer::list_all(pool.as_ref(), page)?;

    info!(
        "Returning page {} of {} ({} quotes)",
        listing.quotes.page_number, listing.quotes.total_pages, listing.quotes.total_items
    );
    Ok(Json(listing))
}

/// Handler for creating a new quote
///
/// This function handles POST requests to `/add_quote/`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `payload` - The quote text, the author ID and the IDs of the tags to attach
///
/// ### Returns
///
/// The created quote with its author name and tags
#[instrument(skip(pool, payload), fields(author_id = payload.author_id))]
pub async fn create_quote_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateQuoteDto>, ApiError>,
) -> Result<Json<QuoteView>, ApiError> {
    info!("Creating new quote");

    let body = payload.clean()?;

    if repo::get_author(&pool, payload.author_id)?.is_none() {
        return Err(ApiError::NotFound(format!("Author {} not found", payload.author_id)));
    }

    let quote = repo::create_quote(&pool, &body, payload.author_id, &payload.tags)?;
    let view = composer::present(pool.as_ref(), quote)?;

    info!("Successfully created quote with id: {}", view.id);
    Ok(Json(view))
}
