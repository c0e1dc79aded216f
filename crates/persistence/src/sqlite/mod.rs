//! SQLite implementation of the record store.

mod repos;
mod schema;

pub use repos::SqliteStore;
