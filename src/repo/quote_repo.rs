use crate::db::DbPool;
use crate::models::{NewQuote, Quote, QuoteTag};
use crate::schema::{quote_tags, quotes, tags};
use anyhow::Result;
use diesel::prelude::*;
use tracing::{debug, info, instrument};

/// Creates a new quote and attaches its tags
///
/// Tag IDs that do not exist are ignored and repeated IDs collapse into one
/// link. The quote and its links are written in a single transaction.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `body` - The quoted text
/// * `author_id` - The ID of the owning author
/// * `tag_ids` - IDs of the tags to attach
///
/// ### Returns
///
/// A Result containing the stored Quote
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The author does not exist (foreign key violation)
/// - Any database operation fails
#[instrument(skip(pool, body))]
pub fn create_quote(pool: &DbPool, body: &str, author_id: i32, tag_ids: &[i32]) -> Result<Quote> {
    let conn = &mut pool.get()?;

    let quote = conn.transaction::<_, anyhow::Error, _>(|conn| {
        let quote = diesel::insert_into(quotes::table)
            .values(&NewQuote { body: body.to_string(), author_id })
            .returning(Quote::as_returning())
            .get_result(conn)?;

        // Only link tags that exist
        let existing: Vec<i32> = tags::table
            .filter(tags::id.eq_any(tag_ids))
            .select(tags::id)
            .load(conn)?;

        let links: Vec<QuoteTag> = existing
            .into_iter()
            .map(|tag_id| QuoteTag { quote_id: quote.get_id(), tag_id })
            .collect();

        if !links.is_empty() {
            diesel::insert_or_ignore_into(quote_tags::table)
                .values(&links)
                .execute(conn)?;
        }

        debug!("Linked {} tags to quote {}", links.len(), quote.get_id());
        Ok(quote)
    })?;

    info!("Created quote with id: {}", quote.get_id());
    Ok(quote)
}

/// Retrieves a quote by ID
#[instrument(skip(pool))]
pub fn get_quote(pool: &DbPool, quote_id: i32) -> Result<Option<Quote>> {
    let conn = &mut pool.get()?;

    let result = quotes::table
        .find(quote_id)
        .select(Quote::as_select())
        .first(conn)
        .optional()?;

    Ok(result)
}

/// Lists all quotes in insertion order
#[instrument(skip(pool))]
pub fn list_quotes(pool: &DbPool) -> Result<Vec<Quote>> {
    let conn = &mut pool.get()?;

    let result = quotes::table
        .order_by(quotes::id.asc())
        .select(Quote::as_select())
        .load(conn)?;

    info!("Retrieved {} quotes", result.len());
    Ok(result)
}

/// Lists the quotes carrying a tag, in insertion order
#[instrument(skip(pool))]
pub fn list_quotes_with_tag(pool: &DbPool, tag_id: i32) -> Result<Vec<Quote>> {
    let conn = &mut pool.get()?;

    let result = quotes::table
        .inner_join(quote_tags::table)
        .filter(quote_tags::tag_id.eq(tag_id))
        .order_by(quotes::id.asc())
        .select(Quote::as_select())
        .load(conn)?;

    debug!("Retrieved {} quotes with tag {}", result.len(), tag_id);
    Ok(result)
}

/// Lists the quotes of an author, in insertion order
#[instrument(skip(pool))]
pub fn list_quotes_by_author(pool: &DbPool, author_id: i32) -> Result<Vec<Quote>> {
    let conn = &mut pool.get()?;

    let result = quotes::table
        .filter(quotes::author_id.eq(author_id))
        .order_by(quotes::id.asc())
        .select(Quote::as_select())
        .load(conn)?;

    debug!("Retrieved {} quotes by author {}", result.len(), author_id);
    Ok(result)
}
