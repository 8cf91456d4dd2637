use crate::db::DbPool;
use crate::models::{Author, NewAuthor};
use crate::schema::{authors, quotes};
use anyhow::Result;
use diesel::prelude::*;
use tracing::{debug, info, instrument};

/// Creates a new author in the database
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `new_author` - The author to insert
///
/// ### Returns
///
/// A Result containing the stored Author, with its assigned ID
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - An author with the same full name already exists
/// - The database insert operation fails
#[instrument(skip(pool, new_author), fields(fullname = %new_author.fullname))]
pub fn create_author(pool: &DbPool, new_author: &NewAuthor) -> Result<Author> {
    let conn = &mut pool.get()?;

    let author = diesel::insert_into(authors::table)
        .values(new_author)
        .returning(Author::as_returning())
        .get_result(conn)?;

    info!("Created author with id: {}", author.get_id());
    Ok(author)
}

/// Retrieves an author by ID
///
/// ### Returns
///
/// A Result containing an Option with the Author if found, or None if not found
#[instrument(skip(pool))]
pub fn get_author(pool: &DbPool, author_id: i32) -> Result<Option<Author>> {
    let conn = &mut pool.get()?;

    let result = authors::table
        .find(author_id)
        .select(Author::as_select())
        .first(conn)
        .optional()?;

    Ok(result)
}

/// Retrieves an author by exact full name
///
/// ### Returns
///
/// A Result containing an Option with the Author if found, or None if not found
#[instrument(skip(pool))]
pub fn get_author_by_name(pool: &DbPool, fullname: &str) -> Result<Option<Author>> {
    let conn = &mut pool.get()?;

    let result = authors::table
        .filter(authors::fullname.eq(fullname))
        .select(Author::as_select())
        .first(conn)
        .optional()?;

    if result.is_none() {
        debug!("Author not found");
    }

    Ok(result)
}

/// Lists all authors in insertion order
#[instrument(skip(pool))]
pub fn list_authors(pool: &DbPool) -> Result<Vec<Author>> {
    let conn = &mut pool.get()?;

    let result = authors::table
        .order_by(authors::id.asc())
        .select(Author::as_select())
        .load(conn)?;

    debug!("Retrieved {} authors", result.len());
    Ok(result)
}

/// Deletes an author together with all of its quotes
///
/// Quotes go through the `ON DELETE CASCADE` foreign key, and their tag links
/// follow them. Tags themselves are kept. The quotes are counted and the
/// author removed in one transaction, so the count matches what was deleted.
///
/// ### Returns
///
/// A Result containing the number of quotes removed, or None if no author
/// has this ID
#[instrument(skip(pool))]
pub fn delete_author(pool: &DbPool, author_id: i32) -> Result<Option<usize>> {
    let conn = &mut pool.get()?;

    let removed = conn.transaction::<_, anyhow::Error, _>(|conn| {
        let quote_count: i64 = quotes::table
            .filter(quotes::author_id.eq(author_id))
            .count()
            .get_result(conn)?;

        let deleted = diesel::delete(authors::table.find(author_id)).execute(conn)?;
        if deleted == 0 {
            return Ok(None);
        }
        Ok(Some(usize::try_from(quote_count)?))
    })?;

    match removed {
        Some(count) => info!("Deleted author with id: {} and {} quotes", author_id, count),
        None => debug!("No author with id: {}", author_id),
    }
    Ok(removed)
}
