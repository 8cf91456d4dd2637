use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a tag in the system
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::tags)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Tag {
    /// Store-assigned identifier, increasing in insertion order
    id: i32,

    /// The name of the tag
    name: String,
}

impl Tag {
    /// Creates a tag with all fields specified
    ///
    /// ### Arguments
    ///
    /// * `id` - The identifier of the tag
    /// * `name` - The name of the tag
    pub fn new_with_fields(id: i32, name: String) -> Self {
        Self { id, name }
    }

    /// Gets the tag's ID
    pub fn get_id(&self) -> i32 {
        self.id
    }

    /// Gets the tag's name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }
}

/// A tag that has not been written to the store yet
#[derive(Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag {
    pub name: String,
}

/// A tag together with the number of quotes it is attached to
#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub id: i32,
    pub name: String,
    pub quote_count: i64,
}
