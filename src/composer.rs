//! Query composition over a [`QuoteStore`]
//!
//! Builds the result sets behind every listing: all quotes, quotes by tag,
//! author detail and free-text search. Results are handed to the paginator
//! and only the quotes on the requested page are hydrated into
//! [`QuoteView`]s.

use std::collections::BTreeMap;

use fancy_regex::Regex;
use tracing::{debug, instrument};

use crate::dto::{AuthorDetail, QuoteListing, QuoteView, SearchListing, TagListing};
use crate::errors::QueryError;
use crate::models::{Author, Quote, TagCount};
use crate::pagination::Page;
use crate::store::QuoteStore;

/// Number of tags in the ranking shown next to every listing
pub const TOP_TAGS_LIMIT: i64 = 10;

/// All quotes in insertion order
pub fn all_quotes<S: QuoteStore + ?Sized>(store: &S) -> Result<Vec<Quote>, QueryError> {
    Ok(store.all_quotes()?)
}

/// All quotes carrying the tag named `tag_name`
///
/// ### Errors
///
/// Returns `QueryError::NotFound` if no tag has exactly that name.
pub fn quotes_by_tag<S: QuoteStore + ?Sized>(
    store: &S,
    tag_name: &str,
) -> Result<Vec<Quote>, QueryError> {
    let tag = store
        .find_tag_by_name(tag_name)?
        .ok_or_else(|| QueryError::NotFound(format!("Tag '{}' not found", tag_name)))?;

    Ok(store.quotes_with_tag(&tag)?)
}

/// Looks an author up by exact full name
///
/// ### Errors
///
/// Returns `QueryError::NotFound` if no author has exactly that name.
pub fn author_by_name<S: QuoteStore + ?Sized>(
    store: &S,
    fullname: &str,
) -> Result<Author, QueryError> {
    store
        .find_author_by_name(fullname)?
        .ok_or_else(|| QueryError::NotFound(format!("Author '{}' not found", fullname)))
}

/// Author record plus the author's quotes
pub fn author_detail<S: QuoteStore + ?Sized>(
    store: &S,
    fullname: &str,
) -> Result<AuthorDetail, QueryError> {
    let author = author_by_name(store, fullname)?;
    let quotes = store
        .quotes_with_author(&author)?
        .into_iter()
        .map(|quote| present(store, quote))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AuthorDetail { author, quotes })
}

/// Quotes matching a free-text query
///
/// The result is the union of the quotes carrying a tag whose name starts
/// with `query` (ignoring case) and the quotes whose author's full name
/// matches `query` as a case-insensitive regular expression. Each quote
/// appears once and the result is ordered by ID.
///
/// ### Errors
///
/// Returns `QueryError::Validation` if `query` is not a valid regular
/// expression.
#[instrument(skip(store))]
pub fn search_quotes<S: QuoteStore + ?Sized>(
    store: &S,
    query: &str,
) -> Result<Vec<Quote>, QueryError> {
    let pattern = Regex::new(&format!("(?i){}", query))
        .map_err(|e| QueryError::Validation(format!("Invalid search pattern: {}", e)))?;

    let mut found: BTreeMap<i32, Quote> = BTreeMap::new();

    for tag in store.tags_with_prefix(query)? {
        for quote in store.quotes_with_tag(&tag)? {
            found.insert(quote.get_id(), quote);
        }
    }

    for author in store.all_authors()? {
        let is_match = pattern
            .is_match(&author.get_fullname())
            .map_err(|e| QueryError::Validation(format!("Invalid search pattern: {}", e)))?;
        if is_match {
            for quote in store.quotes_with_author(&author)? {
                found.insert(quote.get_id(), quote);
            }
        }
    }

    debug!("Search matched {} quotes", found.len());
    Ok(found.into_values().collect())
}

/// Picks the search term a request actually applies
///
/// A non-empty search box value replaces the path term, but only on the
/// first page so that follow-up pages keep the term they were linked with.
pub fn resolve_search_term(data: &str, page: i64, search_input: Option<&str>) -> String {
    match search_input.map(str::trim) {
        Some(input) if page == 1 && !input.is_empty() => input.to_string(),
        _ => data.to_string(),
    }
}

/// The most used tags, see [`TOP_TAGS_LIMIT`]
pub fn top_tags<S: QuoteStore + ?Sized>(store: &S) -> Result<Vec<TagCount>, QueryError> {
    Ok(store.tags_with_counts_descending(TOP_TAGS_LIMIT)?)
}

/// Hydrates a quote with its author name and sorted tag names
pub fn present<S: QuoteStore + ?Sized>(store: &S, quote: Quote) -> Result<QuoteView, QueryError> {
    let author = store.get_author(quote.get_author_id())?.ok_or_else(|| {
        QueryError::Store(anyhow::anyhow!(
            "Quote {} references missing author {}",
            quote.get_id(),
            quote.get_author_id()
        ))
    })?;
    let tags = store
        .tags_for_quote(&quote)?
        .into_iter()
        .map(|tag| tag.get_name())
        .collect();

    Ok(QuoteView {
        id: quote.get_id(),
        quote: quote.get_body(),
        author: author.get_fullname(),
        tags,
    })
}

/// Paginates `quotes` and attaches the tag ranking
pub fn build_listing<S: QuoteStore + ?Sized>(
    store: &S,
    quotes: Vec<Quote>,
    page: i64,
) -> Result<QuoteListing, QueryError> {
    let quotes = Page::paginate(quotes, page).try_map(|quote| present(store, quote))?;
    let top_tags = top_tags(store)?;

    Ok(QuoteListing { quotes, top_tags })
}

/// Listing of every quote
#[instrument(skip(store))]
pub fn list_all<S: QuoteStore + ?Sized>(store: &S, page: i64) -> Result<QuoteListing, QueryError> {
    let quotes = all_quotes(store)?;
    build_listing(store, quotes, page)
}

/// Listing of the quotes carrying one tag
#[instrument(skip(store))]
pub fn list_by_tag<S: QuoteStore + ?Sized>(
    store: &S,
    tag_name: &str,
    page: i64,
) -> Result<TagListing, QueryError> {
    let quotes = quotes_by_tag(store, tag_name)?;
    Ok(TagListing {
        tag_name: tag_name.to_string(),
        listing: build_listing(store, quotes, page)?,
    })
}

/// Listing of search results
///
/// ### Arguments
///
/// * `store` - The store to search
/// * `data` - The search term carried in the path
/// * `page` - The requested 1-indexed page
/// * `search_input` - The inline search box value, if one was submitted
///
/// ### Returns
///
/// The page of results together with the term that was applied
#[instrument(skip(store))]
pub fn search<S: QuoteStore + ?Sized>(
    store: &S,
    data: &str,
    page: i64,
    search_input: Option<&str>,
) -> Result<SearchListing, QueryError> {
    let term = resolve_search_term(data, page, search_input);
    let quotes = search_quotes(store, &term)?;
    let listing = build_listing(store, quotes, page)?;

    Ok(SearchListing { data: term, listing })
}
