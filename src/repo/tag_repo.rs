use crate::db::DbPool;
use crate::models::{NewTag, Tag, TagCount};
use crate::schema::{quote_tags, tags};
use anyhow::{Result, anyhow};
use diesel::dsl::count;
use diesel::prelude::*;
use tracing::{debug, info, instrument};

/// Creates a new tag in the database
///
/// No uniqueness check is made here; callers that must not duplicate a
/// name go through [`get_or_create_tag`].
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `name` - The name for the new tag
///
/// ### Returns
///
/// A Result containing the newly created Tag if successful
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database insert operation fails
#[instrument(skip(pool))]
pub fn create_tag(pool: &DbPool, name: &str) -> Result<Tag> {
    let conn = &mut pool.get()?;

    let tag = diesel::insert_into(tags::table)
        .values(&NewTag { name: name.to_string() })
        .returning(Tag::as_returning())
        .get_result(conn)?;

    debug!("Created tag with id: {}", tag.get_id());
    Ok(tag)
}

/// Retrieves a tag from the database by its ID
///
/// ### Errors
///
/// Returns an error if:
/// - Unable to get a connection from the pool
/// - The database query fails
/// - The tag does not exist
#[instrument(skip(pool))]
pub fn get_tag(pool: &DbPool, tag_id: i32) -> Result<Tag> {
    let conn = &mut pool.get()?;

    let result = tags::table
        .find(tag_id)
        .select(Tag::as_select())
        .first(conn)
        .map_err(|e| anyhow!("Failed to get tag: {}", e))?;

    Ok(result)
}

/// Looks a tag up by its exact name
///
/// Names are not unique in the store; when several tags share the name the
/// earliest one wins.
///
/// ### Returns
///
/// A Result containing the Tag if one has this name, or None
#[instrument(skip(pool))]
pub fn get_tag_by_name(pool: &DbPool, name: &str) -> Result<Option<Tag>> {
    let conn = &mut pool.get()?;

    let result = tags::table
        .filter(tags::name.eq(name))
        .order_by(tags::id.asc())
        .select(Tag::as_select())
        .first(conn)
        .optional()?;

    Ok(result)
}

/// Returns the tag with the given name, creating it if none exists
///
/// The lookup and the insert are not serialized against other writers, so
/// two concurrent calls with a new name can both insert.
///
/// ### Returns
///
/// A Result containing the tag and whether it was created by this call
#[instrument(skip(pool))]
pub fn get_or_create_tag(pool: &DbPool, name: &str) -> Result<(Tag, bool)> {
    if let Some(existing) = get_tag_by_name(pool, name)? {
        debug!("Tag already exists with id: {}", existing.get_id());
        return Ok((existing, false));
    }

    let tag = create_tag(pool, name)?;
    info!("Created tag {:?} with id: {}", name, tag.get_id());
    Ok((tag, true))
}

/// Lists all tags in insertion order
#[instrument(skip(pool))]
pub fn list_tags(pool: &DbPool) -> Result<Vec<Tag>> {
    let conn = &mut pool.get()?;

    let result = tags::table
        .order_by(tags::id.asc())
        .select(Tag::as_select())
        .load(conn)?;

    debug!("Retrieved {} tags", result.len());
    Ok(result)
}

/// Whether `name` starts with `prefix` under Unicode lowercase folding
pub fn has_prefix_ignoring_case(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Lists the tags whose name starts with `prefix`, ignoring case
///
/// Case folding covers all of Unicode, so Cyrillic and other non-ASCII
/// names match in either case. The prefix is compared literally.
#[instrument(skip(pool))]
pub fn list_tags_with_prefix(pool: &DbPool, prefix: &str) -> Result<Vec<Tag>> {
    let result: Vec<Tag> = list_tags(pool)?
        .into_iter()
        .filter(|tag| has_prefix_ignoring_case(&tag.get_name(), prefix))
        .collect();

    debug!("{} tags start with {:?}", result.len(), prefix);
    Ok(result)
}

/// Lists the tags attached to a quote, sorted by name
#[instrument(skip(pool))]
pub fn list_tags_for_quote(pool: &DbPool, quote_id: i32) -> Result<Vec<Tag>> {
    let conn = &mut pool.get()?;

    let result = tags::table
        .inner_join(quote_tags::table)
        .filter(quote_tags::quote_id.eq(quote_id))
        .order_by((tags::name.asc(), tags::id.asc()))
        .select(Tag::as_select())
        .load(conn)?;

    Ok(result)
}

/// Ranks tags by the number of quotes attached to them
///
/// Unused tags take part with a count of zero. Equal counts are ordered by
/// name, then by ID.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `limit` - The maximum number of tags to return
///
/// ### Returns
///
/// A Result containing at most `limit` tags with their quote counts,
/// highest count first
#[instrument(skip(pool))]
pub fn list_top_tags(pool: &DbPool, limit: i64) -> Result<Vec<TagCount>> {
    let conn = &mut pool.get()?;

    let result = tags::table
        .left_join(quote_tags::table)
        .group_by((tags::id, tags::name))
        .select((tags::id, tags::name, count(quote_tags::quote_id.nullable())))
        .order_by((
            count(quote_tags::quote_id.nullable()).desc(),
            tags::name.asc(),
            tags::id.asc(),
        ))
        .limit(limit)
        .load::<TagCount>(conn)?;

    debug!("Ranked {} tags", result.len());
    Ok(result)
}

#[cfg(test)]
mod tests;
