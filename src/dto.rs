use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::{Author, NewAuthor, TagCount};
use crate::pagination::Page;

/// Bounds on the tag name accepted by the add-tag form
pub const TAG_NAME_MIN_CHARS: usize = 3;
pub const TAG_NAME_MAX_CHARS: usize = 25;

/// Bounds on author fields accepted by the add-author form
pub const AUTHOR_FULLNAME_MAX_CHARS: usize = 50;
pub const AUTHOR_BORN_LOCATION_MAX_CHARS: usize = 150;

/// Checks that a trimmed field is present and no longer than `max` characters
fn require_text(field: &str, value: &str, max: Option<usize>) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(ApiError::Validation(format!(
                "{} must be at most {} characters",
                field, max
            )));
        }
    }
    Ok(value.to_string())
}

/// Data transfer object for creating a new tag
///
/// This struct is used to deserialize JSON requests for creating tags.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateTagDto {
    /// The name of the tag
    pub name: String,
}

impl CreateTagDto {
    /// Validates the request and returns the trimmed tag name
    pub fn clean(&self) -> Result<String, ApiError> {
        let name = self.name.trim();
        let len = name.chars().count();
        if !(TAG_NAME_MIN_CHARS..=TAG_NAME_MAX_CHARS).contains(&len) {
            return Err(ApiError::Validation(format!(
                "Tag name must be between {} and {} characters",
                TAG_NAME_MIN_CHARS, TAG_NAME_MAX_CHARS
            )));
        }
        Ok(name.to_string())
    }
}

/// Data transfer object for creating a new author
///
/// This struct is used to deserialize JSON requests for creating authors.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateAuthorDto {
    /// The author's full name, unique across the store
    pub fullname: String,

    /// The birth date; the creation time is used when absent
    #[serde(default)]
    pub born_date: Option<NaiveDate>,

    /// Where the author was born
    pub born_location: String,

    /// Free-text biography
    pub description: String,
}

impl CreateAuthorDto {
    /// Validates the request and builds the author to insert
    pub fn clean(&self) -> Result<NewAuthor, ApiError> {
        let fullname = require_text("fullname", &self.fullname, Some(AUTHOR_FULLNAME_MAX_CHARS))?;
        let born_location = require_text(
            "born_location",
            &self.born_location,
            Some(AUTHOR_BORN_LOCATION_MAX_CHARS),
        )?;
        let description = require_text("description", &self.description, None)?;
        let born_date = self
            .born_date
            .map(|date| date.and_time(NaiveTime::MIN).and_utc());

        Ok(NewAuthor::new(fullname, born_date, born_location, description))
    }
}

/// Data transfer object for creating a new quote
///
/// This struct is used to deserialize JSON requests for creating quotes.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateQuoteDto {
    /// The quoted text
    pub quote: String,

    /// The ID of the author the quote belongs to
    pub author_id: i32,

    /// IDs of the tags to attach; unknown IDs are ignored
    #[serde(default)]
    pub tags: Vec<i32>,
}

impl CreateQuoteDto {
    /// Validates the request and returns the trimmed quote text
    pub fn clean(&self) -> Result<String, ApiError> {
        require_text("quote", &self.quote, None)
    }
}

/// Inline search box submitted alongside a search request
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SearchFormDto {
    /// The value typed into the search box
    pub search_input: Option<String>,
}

/// A quote as presented in listings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuoteView {
    pub id: i32,
    /// The quoted text
    pub quote: String,
    /// Full name of the author
    pub author: String,
    /// Tag names, sorted
    pub tags: Vec<String>,
}

/// A page of quotes plus the tag ranking shown next to it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuoteListing {
    pub quotes: Page<QuoteView>,
    pub top_tags: Vec<TagCount>,
}

/// Listing of the quotes carrying one tag
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagListing {
    pub tag_name: String,
    #[serde(flatten)]
    pub listing: QuoteListing,
}

/// Listing of search results
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchListing {
    /// The search term that was actually applied
    pub data: String,
    #[serde(flatten)]
    pub listing: QuoteListing,
}

/// An author together with the quotes attributed to them
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetail {
    pub author: Author,
    /// Quotes by this author, in insertion order
    pub quotes: Vec<QuoteView>,
}

/// Result of deleting an author
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeletedAuthorDto {
    pub fullname: String,
    /// Number of quotes removed along with the author
    pub deleted_quotes: usize,
}
