pub mod common;
pub mod listing;
pub mod query;
