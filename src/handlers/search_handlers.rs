use axum::{
    extract::{rejection::FormRejection, Form, Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;
use tracing::{instrument, debug, info};

use crate::composer;
use crate::db::DbPool;
use crate::dto::{SearchFormDto, SearchListing};
use crate::errors::ApiError;

/// Reads the optional search box, treating a missing or unreadable form as empty
fn search_input(form: Result<Form<SearchFormDto>, FormRejection>) -> Option<String> {
    match form {
        Ok(Form(form)) => form.search_input,
        Err(rejection) => {
            debug!("Ignoring search form: {}", rejection);
            None
        }
    }
}

/// Handler for the first page of search results
///
/// This function handles GET and POST requests to `/search_data/{data}`.
/// The form field `search_input`, read from the query string on GET and
/// from the body on POST, replaces `data` when it is not empty.
#[instrument(skip(pool, form))]
pub async fn search_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Path(data), _): WithRejection<Path<String>, ApiError>,
    form: Result<Form<SearchFormDto>, FormRejection>,
) -> Result<Json<SearchListing>, ApiError> {
    let input = search_input(form);
    let listing = composer::search(pool.as_ref(), &data, 1, input.as_deref())?;

    info!("Search {:?} matched {} quotes", listing.data, listing.listing.quotes.total_items);
    Ok(Json(listing))
}

/// Handler for one page of search results
///
/// This function handles GET and POST requests to `/search_data/{data}/{page}`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `params` - The search term and the requested page
/// * `form` - The inline search box, only honoured on page 1
///
/// ### Returns
///
/// The page of matching quotes and the term that was applied
#[instrument(skip(pool, form))]
pub async fn search_page_handler(
    State(pool): State<Arc<DbPool>>,
    WithRejection(Path((data, page)), _): WithRejection<Path<(String, i64)>, ApiError>,
    form: Result<Form<SearchFormDto>, FormRejection>,
) -> Result<Json<SearchListing>, ApiError> {
    let input = search_input(form);
    let listing = composer::search(pool.as_ref(), &data, page, input.as_deref())?;

    info!(
        "Search {:?} page {} of {}",
        listing.data, listing.listing.quotes.page_number, listing.listing.quotes.total_pages
    );
    Ok(Json(listing))
}
