//! Web API Handlers
//!
//! This module contains the handlers for the JSON API endpoints.
//! Each handler is responsible for processing a specific type of HTTP request,
//! extracting the necessary data, calling the query composer or the
//! repository, and returning a properly formatted response.

mod author_handlers;
mod quote_handlers;
mod search_handlers;
mod tag_handlers;

// Re-export all handlers
pub use author_handlers::*;
pub use quote_handlers::*;
pub use search_handlers::*;
pub use tag_handlers::*;
