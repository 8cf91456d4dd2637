//! Data models module
//!
//! This module defines the core data structures used throughout the application.
//! It includes database models that map to database tables, as well as the
//! insertable forms used when creating new rows.

mod author;
pub use author::{Author, NewAuthor};

mod tag;
pub use tag::{NewTag, Tag, TagCount};

mod quote;
pub use quote::{NewQuote, Quote, QuoteTag};
