use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents an author of quotes
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::authors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Author {
    /// Store-assigned identifier, increasing in insertion order
    id: i32,

    /// Full name of the author, unique across the store
    fullname: String,

    /// When the author was born
    born_date: NaiveDateTime,

    /// Where the author was born
    born_location: String,

    /// Free-text biography
    description: String,
}

impl Author {
    /// Creates an author with all fields specified
    ///
    /// Mostly useful for clients that rebuild an `Author` from an API response.
    pub fn new_with_fields(
        id: i32,
        fullname: String,
        born_date: DateTime<Utc>,
        born_location: String,
        description: String,
    ) -> Self {
        Self {
            id,
            fullname,
            born_date: born_date.naive_utc(),
            born_location,
            description,
        }
    }

    /// Gets the author's ID
    pub fn get_id(&self) -> i32 {
        self.id
    }

    /// Gets the author's full name
    pub fn get_fullname(&self) -> String {
        self.fullname.clone()
    }

    /// Gets the author's birth date as a DateTime<Utc>
    pub fn get_born_date(&self) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(self.born_date, Utc)
    }

    /// Gets the author's birth location
    pub fn get_born_location(&self) -> String {
        self.born_location.clone()
    }

    /// Gets the author's description
    pub fn get_description(&self) -> String {
        self.description.clone()
    }
}

/// An author that has not been written to the store yet
#[derive(Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::authors)]
pub struct NewAuthor {
    pub fullname: String,
    pub born_date: NaiveDateTime,
    pub born_location: String,
    pub description: String,
}

impl NewAuthor {
    /// Creates a new author record
    ///
    /// ### Arguments
    ///
    /// * `fullname` - The author's full name
    /// * `born_date` - The birth date, or `None` to default to the current time
    /// * `born_location` - Where the author was born
    /// * `description` - Free-text biography
    pub fn new(
        fullname: String,
        born_date: Option<DateTime<Utc>>,
        born_location: String,
        description: String,
    ) -> Self {
        Self {
            fullname,
            born_date: born_date.unwrap_or_else(Utc::now).naive_utc(),
            born_location,
            description,
        }
    }
}
