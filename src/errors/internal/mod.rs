use thiserror::Error;

pub mod database;
pub mod item;
pub mod person;

pub use database::DatabaseError;
pub use item::ItemError;
pub use person::PersonError;

/// Internal error type for store and coordinator operations
///
/// Infrastructure errors (database) are shared by all stores; domain errors
/// are specific to each resource.
/// Not exposed via API - endpoints must convert to ApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Validation error: {field} {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Person(#[from] PersonError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn transaction_begin(source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::TransactionBegin { source })
    }

    pub fn transaction_commit(source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::TransactionCommit { source })
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> InternalError {
        InternalError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
