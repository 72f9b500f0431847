//! Storage errors for price records and bagel vendors.

use thiserror::Error;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StorageError {
    /// Lookup by id found no row.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// A vendor with the same case-insensitive name is already stored.
    #[error("bagel vendor '{0}' already exists")]
    DuplicateVendor(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored value does not decode into its domain type.
    #[error("corrupt {column} value: {detail}")]
    CorruptRow { column: &'static str, detail: String },

    #[error("migration failed: {0}")]
    Migration(#[source] sqlx::Error),
}

impl StorageError {
    pub(crate) fn price_not_found(id: &str) -> Self {
        Self::NotFound { entity: "price", id: id.to_owned() }
    }

    /// Maps a unique-index violation on `bagel_vendors` to `DuplicateVendor`.
    pub(crate) fn from_vendor_insert(err: sqlx::Error, name: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|c| c == UNIQUE_VIOLATION) =>
            {
                Self::DuplicateVendor(name.to_owned())
            },
            _ => Self::Database(err),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateVendor(_))
    }
}
