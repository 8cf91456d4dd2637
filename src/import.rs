//! Import of authors and quotes from JSON exports
//!
//! `authors.json` holds an array of
//! `{ "fullname", "born_date", "born_location", "description" }` records
//! with dates like `"March 14, 1879"`. `quotes.json` holds an array of
//! `{ "quote", "author", "tags": [...] }` records that refer to authors by
//! full name.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::db::DbPool;
use crate::models::NewAuthor;
use crate::repo;
use crate::store::QuoteStore;

/// Format of `born_date` in the author export
pub const BORN_DATE_FORMAT: &str = "%B %d, %Y";

/// One record of `authors.json`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub born_date: Option<String>,
    #[serde(default)]
    pub born_location: String,
    #[serde(default)]
    pub description: String,
}

/// One record of `quotes.json`
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Counts of what an import run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub authors_created: usize,
    /// Records with no full name, or whose author already exists
    pub authors_skipped: usize,
    pub quotes_created: usize,
    /// Records with no author
    pub quotes_skipped: usize,
    pub tags_created: usize,
}

/// Parses an export date such as `"March 14, 1879"`
///
/// An empty or missing value yields `None`, which later defaults to the
/// import time.
pub fn parse_born_date(value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, BORN_DATE_FORMAT)
            .map(Some)
            .with_context(|| format!("Invalid born_date {:?}", text)),
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Loads authors and then quotes into the store
///
/// Authors that already exist are left untouched, so a run can be repeated
/// after adding new records. Tags are resolved by name and created on first
/// use.
///
/// ### Arguments
///
/// * `pool` - A reference to the database connection pool
/// * `authors_path` - Path to the authors export
/// * `quotes_path` - Path to the quotes export
///
/// ### Returns
///
/// A summary of the records created and skipped
///
/// ### Errors
///
/// Returns an error if:
/// - Either file cannot be read or parsed
/// - An author has a malformed `born_date`
/// - A quote names an author that does not exist
/// - Any database operation fails
///
/// Records written before the failing one are kept.
#[instrument(skip(pool))]
pub fn import_from_json(pool: &DbPool, authors_path: &Path, quotes_path: &Path) -> Result<ImportSummary> {
    let authors: Vec<AuthorRecord> = read_json(authors_path)?;
    let quotes: Vec<QuoteRecord> = read_json(quotes_path)?;
    info!("Importing {} authors and {} quotes", authors.len(), quotes.len());

    let mut summary = ImportSummary::default();
    let tags_before = repo::list_tags(pool)?.len();

    for record in authors {
        let fullname = record.fullname.trim();
        if fullname.is_empty() {
            summary.authors_skipped += 1;
            continue;
        }
        if pool.find_author_by_name(fullname)?.is_some() {
            debug!("Author {:?} already exists", fullname);
            summary.authors_skipped += 1;
            continue;
        }

        let born_date = parse_born_date(record.born_date.as_deref())
            .with_context(|| format!("Author {:?}", fullname))?
            .map(|date| date.and_time(NaiveTime::MIN).and_utc());

        repo::create_author(
            pool,
            &NewAuthor::new(fullname.to_string(), born_date, record.born_location, record.description),
        )?;
        summary.authors_created += 1;
    }

    for record in quotes {
        let author_name = record.author.trim();
        if author_name.is_empty() {
            warn!("Skipping quote without an author");
            summary.quotes_skipped += 1;
            continue;
        }

        let author = pool
            .find_author_by_name(author_name)?
            .ok_or_else(|| anyhow!("Quote refers to unknown author {:?}", author_name))?;

        let tag_ids = record
            .tags
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| pool.create_or_get_tag(name).map(|tag| tag.get_id()))
            .collect::<Result<Vec<_>>>()?;

        repo::create_quote(pool, &record.quote, author.get_id(), &tag_ids)?;
        summary.quotes_created += 1;
    }

    summary.tags_created = repo::list_tags(pool)?.len() - tags_before;

    info!("Import finished: {:?}", summary);
    Ok(summary)
}
