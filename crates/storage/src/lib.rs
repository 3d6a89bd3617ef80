#![warn(clippy::pedantic)]

pub mod snapshot;
pub mod sqlite;

pub use snapshot::CatalogStore;
pub use sqlite::SqliteStore;
