use async_trait::async_trait;
use crate::core::library::CatalogError;

#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
    },
    Unavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Notification {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        match other {
            CatalogError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            CatalogError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::ValidationRejected { message } => {
                CommandError::Validation { message }
            }
            CatalogError::CollaboratorUnavailable { message, reason_code, retryable } => {
                CommandError::Unavailable { message, reason_code, retryable }
            }
            CatalogError::NotificationFailed { message } => {
                CommandError::Notification { message }
            }
            CatalogError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CatalogError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
