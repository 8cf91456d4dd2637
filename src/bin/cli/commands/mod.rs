pub mod author;
pub mod import;
pub mod quote;
pub mod tag;
