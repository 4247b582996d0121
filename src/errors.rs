use sea_orm::error::DbErr;
use serde::Serialize;

/// Errors surfaced by the browse/report layer.
///
/// Store-level failures bubble up unchanged inside `DatabaseError`; an empty
/// result set is never represented as an error (callers get `Ok(vec![])`).
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(
        #[from]
        #[serde(skip)]
        sea_orm::error::DbErr,
    ),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

pub trait IntoDbErr {
    fn into_db_err(self) -> DbErr;
}

impl IntoDbErr for DbErr {
    fn into_db_err(self) -> DbErr {
        self
    }
}

impl IntoDbErr for String {
    fn into_db_err(self) -> DbErr {
        DbErr::Custom(self)
    }
}

impl IntoDbErr for &str {
    fn into_db_err(self) -> DbErr {
        DbErr::Custom(self.to_string())
    }
}

impl ServiceError {
    /// Generic constructor that normalizes any supported database error input.
    pub fn db_error<E: IntoDbErr>(error: E) -> Self {
        ServiceError::DatabaseError(error.into_db_err())
    }
}

/// Application-level errors: configuration, connection establishment, and
/// schema initialization. Fatal to the operation that raised them; no retry.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitializationError(String),
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::DatabaseError(e) => ServiceError::DatabaseError(e),
            AppError::ConfigError(msg) => ServiceError::InternalError(msg),
            AppError::InitializationError(msg) => ServiceError::InternalError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_error_normalizes_strings() {
        let err = ServiceError::db_error("connection reset");
        match err {
            ServiceError::DatabaseError(DbErr::Custom(msg)) => {
                assert_eq!(msg, "connection reset")
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn app_error_converts_to_service_error() {
        let err: ServiceError = AppError::InitializationError("seed failed".into()).into();
        assert!(matches!(err, ServiceError::InternalError(_)));
    }
}
