use crate::model::common::{CategoryId, LangId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("This command does not support multiple shops ({shops} configured). Use the force (-f) option to run it anyway.")]
    GuardBlocked { shops: usize },
    #[error("Action '{action}' not allowed. Possible actions: {allowed}")]
    InvalidAction { action: String, allowed: String },
    #[error("Category with id {0} does not exist")]
    CategoryNotFound(CategoryId),
    #[error("Failed to update category {target}: {reason}")]
    PersistenceFailure { target: String, reason: String },
    #[error("Language with id {0} is not configured in the catalog")]
    UnknownLanguage(LangId),
    #[error("Catalog store error: {0}")]
    Store(String),
    #[error("Filesystem I/O error: {0}")]
    Io(String),
    #[error("JSON serialization error: {0}")]
    SerdeSerialize(String),
    #[error("JSON parsing error: {0}")]
    SerdeParse(String),
    #[error("Invalid argument provided: {0}")]
    Argument(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() || e.is_eof() || e.is_syntax() || e.is_data() {
            AppError::SerdeParse(e.to_string())
        } else {
            AppError::SerdeSerialize(e.to_string())
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn persistence<T: Into<String>>(target: T, cause: &AppError) -> AppError {
        AppError::PersistenceFailure {
            target: target.into(),
            reason: cause.to_string(),
        }
    }

    pub fn store<S: Into<String>>(message: S) -> AppError {
        AppError::Store(message.into())
    }

    /// Errors that come from the command's own rules rather than from the
    /// environment it runs in.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            AppError::GuardBlocked { .. }
                | AppError::InvalidAction { .. }
                | AppError::CategoryNotFound(_)
                | AppError::PersistenceFailure { .. }
        )
    }
}
