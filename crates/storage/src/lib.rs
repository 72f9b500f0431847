//! Storage layer for sandwich-map
//!
//! PostgreSQL-backed storage for price records and bagel menus, with an
//! in-memory backend for tests and database-less runs.

mod backend;
pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
mod seed;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use seed::{sample_bagel_vendors, sample_price_records};
pub use traits::{BagelStore, PriceStore};
