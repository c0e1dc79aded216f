//! Rebank Persistence - the record store
//!
//! The engine consumes the abstract [`CustomerStore`] and [`AccountStore`]
//! traits; this crate also ships the two implementations: SQLite via sqlx
//! and an in-memory store with the same constraint semantics for tests
//! and demos.
//!
//! Constraint violations surface as distinguishable error variants
//! (classified by violation category, never by parsing error text) so the
//! service layer can translate them into domain errors.

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use error::{PersistenceError, PersistenceResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{AccountStore, CustomerStore};
