use sea_orm::DbErr;
use thiserror::Error;

/// Infrastructure errors raised by the store layer
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database operation '{operation}' failed: {source}")]
    Operation { operation: String, source: DbErr },
}
