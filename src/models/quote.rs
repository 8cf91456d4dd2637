use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a quote attributed to an author
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Quote {
    /// Store-assigned identifier, increasing in insertion order
    id: i32,

    /// The quoted text
    body: String,

    /// The ID of the owning author
    author_id: i32,
}

impl Quote {
    /// Creates a quote with all fields specified
    pub fn new_with_fields(id: i32, body: String, author_id: i32) -> Self {
        Self { id, body, author_id }
    }

    /// Gets the quote's ID
    pub fn get_id(&self) -> i32 {
        self.id
    }

    /// Gets the quoted text
    pub fn get_body(&self) -> String {
        self.body.clone()
    }

    /// Gets the ID of the author this quote belongs to
    pub fn get_author_id(&self) -> i32 {
        self.author_id
    }
}

/// A quote that has not been written to the store yet
#[derive(Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::quotes)]
pub struct NewQuote {
    pub body: String,
    pub author_id: i32,
}

/// Link between a quote and one of its tags
///
/// The pair is the primary key, so a quote never carries the same tag twice.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::quote_tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteTag {
    pub quote_id: i32,
    pub tag_id: i32,
}
