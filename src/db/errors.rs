use thiserror::Error;

/// Unified error type for database operations that application code can handle.
///
/// The MongoDB driver does not distinguish recoverable failure classes the
/// way a relational driver reports constraint violations; every driver error
/// is treated as non-recoverable and carried with its full context chain.
/// Absence of a record is not an error at this layer - lookups return
/// `Option` instead.
#[derive(Error, Debug)]
pub enum DbError {
    /// Catch-all for non-recoverable driver errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        DbError::Other(anyhow::Error::from(err))
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;
