//! Repository module
//!
//! This module provides the data access layer for the application.
//! It contains functions for creating, retrieving and deleting authors,
//! tags and quotes, and for the tag ranking aggregate.
//!
//! The repository pattern abstracts away the details of database access
//! and provides a clean API for the rest of the application to use.

mod author_repo;
mod quote_repo;
mod tag_repo;

// Re-export all repository functions
pub use author_repo::*;
pub use quote_repo::*;
pub use tag_repo::*;
