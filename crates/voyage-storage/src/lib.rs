//! Voyage Storage Layer
//!
//! SQLite-based persistence backing the lead and trip stores. Async
//! callers reach the connection through `Database::run_blocking`.

mod database;
mod error;
mod migrations;

pub use database::{format_timestamp, parse_date, parse_timestamp, Database};
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
