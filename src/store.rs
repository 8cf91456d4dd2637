//! Entity store abstraction consumed by the query composer
//!
//! The composer never reaches for a global connection; it is handed a
//! `QuoteStore` by reference. The diesel pool is the production
//! implementation.

use crate::db::DbPool;
use crate::models::{Author, Quote, Tag, TagCount};
use crate::repo;
use anyhow::Result;

/// Read access (plus tag get-or-create) over authors, tags and quotes
pub trait QuoteStore {
    /// Looks an author up by exact full name
    fn find_author_by_name(&self, fullname: &str) -> Result<Option<Author>>;

    /// Looks a tag up by exact name
    fn find_tag_by_name(&self, name: &str) -> Result<Option<Tag>>;

    /// All quotes in insertion order
    fn all_quotes(&self) -> Result<Vec<Quote>>;

    /// Quotes carrying `tag`, in insertion order
    fn quotes_with_tag(&self, tag: &Tag) -> Result<Vec<Quote>>;

    /// Quotes written by `author`, in insertion order
    fn quotes_with_author(&self, author: &Author) -> Result<Vec<Quote>>;

    /// At most `limit` tags with their quote counts, highest count first
    fn tags_with_counts_descending(&self, limit: i64) -> Result<Vec<TagCount>>;

    /// Returns the tag named `name`, creating it first if needed
    fn create_or_get_tag(&self, name: &str) -> Result<Tag>;

    /// Tags whose name starts with `prefix`, ignoring case
    fn tags_with_prefix(&self, prefix: &str) -> Result<Vec<Tag>>;

    /// All authors in insertion order
    fn all_authors(&self) -> Result<Vec<Author>>;

    /// Looks an author up by ID
    fn get_author(&self, author_id: i32) -> Result<Option<Author>>;

    /// Tags attached to `quote`, sorted by name
    fn tags_for_quote(&self, quote: &Quote) -> Result<Vec<Tag>>;
}

impl QuoteStore for DbPool {
    fn find_author_by_name(&self, fullname: &str) -> Result<Option<Author>> {
        repo::get_author_by_name(self, fullname)
    }

    fn find_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        repo::get_tag_by_name(self, name)
    }

    fn all_quotes(&self) -> Result<Vec<Quote>> {
        repo::list_quotes(self)
    }

    fn quotes_with_tag(&self, tag: &Tag) -> Result<Vec<Quote>> {
        repo::list_quotes_with_tag(self, tag.get_id())
    }

    fn quotes_with_author(&self, author: &Author) -> Result<Vec<Quote>> {
        repo::list_quotes_by_author(self, author.get_id())
    }

    fn tags_with_counts_descending(&self, limit: i64) -> Result<Vec<TagCount>> {
        repo::list_top_tags(self, limit)
    }

    fn create_or_get_tag(&self, name: &str) -> Result<Tag> {
        repo::get_or_create_tag(self, name).map(|(tag, _)| tag)
    }

    fn tags_with_prefix(&self, prefix: &str) -> Result<Vec<Tag>> {
        repo::list_tags_with_prefix(self, prefix)
    }

    fn all_authors(&self) -> Result<Vec<Author>> {
        repo::list_authors(self)
    }

    fn get_author(&self, author_id: i32) -> Result<Option<Author>> {
        repo::get_author(self, author_id)
    }

    fn tags_for_quote(&self, quote: &Quote) -> Result<Vec<Tag>> {
        repo::list_tags_for_quote(self, quote.get_id())
    }
}
