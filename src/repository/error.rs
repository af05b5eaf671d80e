// ==========================================
// PM Scheduling Core - Repository Error Types
// ==========================================
// thiserror derive; one enum shared by both stores.
// ==========================================

use thiserror::Error;

/// Repository-layer error type.
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Availability =====
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("connection lock failed: {0}")]
    LockError(String),

    // ===== Database =====
    #[error("query failed: {0}")]
    DatabaseQueryError(String),

    #[error("record not found: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    // ===== Data quality =====
    #[error("field value error (field={field}): {message}")]
    FieldValueError { field: String, message: String },

    // ===== Catch-all =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, msg) => {
                use rusqlite::ErrorCode;
                let text = msg.unwrap_or_else(|| code.to_string());
                match code.code {
                    ErrorCode::CannotOpen
                    | ErrorCode::DatabaseBusy
                    | ErrorCode::DatabaseLocked
                    | ErrorCode::NotADatabase => RepositoryError::Unavailable(text),
                    _ => RepositoryError::DatabaseQueryError(text),
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result type alias for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
