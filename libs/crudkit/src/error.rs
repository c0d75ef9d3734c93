//! Store error taxonomy

use crate::row::MappingError;
use sea_orm::DbErr;
use thiserror::Error;

/// Failure of a repository operation.
///
/// Absence of a row is never an error; repositories report it as `None` or
/// as zero affected rows.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("row mapping failed: {0}")]
    Mapping(#[from] MappingError),

    #[error("statement could not be built: {0}")]
    Statement(#[from] sea_orm::sea_query::error::Error),

    #[error("a '{table}' record needs a caller-supplied id")]
    MissingId { table: &'static str },

    #[error("table '{child}' has no foreign key referencing '{parent}'")]
    MissingForeignKey {
        child: &'static str,
        parent: &'static str,
    },

    #[error("write to '{table}' returned no row")]
    NoRowReturned { table: &'static str },
}
