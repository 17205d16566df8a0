use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CatalogError {
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
    // The external isbn checker answered and reported the isbn as invalid.
    ValidationRejected {
        message: String,
    },
    // The isbn checker or the notifier could not be reached or timed out. Nothing
    // retries automatically, the flag only tells the caller whether a retry is sensible.
    CollaboratorUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // The book has been stored but the creation notice could not be delivered.
    NotificationFailed {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl CatalogError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn duplicate_key(message: &str) -> CatalogError {
        CatalogError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn validation_rejected(message: &str) -> CatalogError {
        CatalogError::ValidationRejected { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogError {
        CatalogError::CollaboratorUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn notification_failed(message: &str) -> CatalogError {
        CatalogError::NotificationFailed { message: message.to_string() }
    }

    pub fn database_or_unavailable(message: &str, reason: Option<String>, retryable: bool) -> CatalogError {
        if retryable {
            CatalogError::database(
                format!("ddb database unavailable error {:?} {:?}", message, reason).as_str(), reason, true)
        } else if let Some(ref reason_val) = reason {
            if reason_val.as_str().contains("404") {
                CatalogError::not_found(
                    format!("not found error {:?} {:?}", message, reason).as_str())
            } else {
                CatalogError::database(
                    format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false)
            }
        } else {
            CatalogError::database(
                format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false)
        }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogError::Database { retryable, .. } => { *retryable }
            CatalogError::DuplicateKey { .. } => { false }
            CatalogError::NotFound { .. } => { false }
            CatalogError::ValidationRejected { .. } => { false }
            CatalogError::CollaboratorUnavailable { retryable, .. } => { *retryable }
            CatalogError::NotificationFailed { .. } => { false }
            CatalogError::Serialization { .. } => { false }
            CatalogError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for CatalogError {
    fn from(err: String) -> Self {
        CatalogError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl From<config::ConfigError> for CatalogError {
    fn from(err: config::ConfigError) -> Self {
        CatalogError::runtime(
            format!("failed to load configuration {}", err).as_str(), Some("config".to_string()))
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "timeout"
        } else if err.is_connect() {
            "connect"
        } else {
            "request"
        };
        CatalogError::unavailable(
            format!("collaborator request failed {}", err).as_str(), Some(reason.to_string()), true)
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::ValidationRejected { message } => {
                write!(f, "{}", message)
            }
            CatalogError::CollaboratorUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogError::NotificationFailed { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// A specialized Result type for the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use crate::core::library::CatalogError;

    #[tokio::test]
    async fn test_should_create_database_error() {
        assert!(matches!(CatalogError::database("test", None, false), CatalogError::Database{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(CatalogError::duplicate_key("test"), CatalogError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CatalogError::not_found("test"), CatalogError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_rejected_error() {
        assert!(matches!(CatalogError::validation_rejected("test"), CatalogError::ValidationRejected{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_unavailable_error() {
        assert!(matches!(CatalogError::unavailable("test", None, false), CatalogError::CollaboratorUnavailable{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_notification_failed_error() {
        assert!(matches!(CatalogError::notification_failed("test"), CatalogError::NotificationFailed{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_database_or_unavailable_error() {
        assert!(matches!(CatalogError::database_or_unavailable("test", None, true), CatalogError::Database{ retryable: true, .. }));
        assert!(matches!(CatalogError::database_or_unavailable("test", Some("404".to_string()), false), CatalogError::NotFound{ message: _ }));
        assert!(matches!(CatalogError::database_or_unavailable("test", Some("500".to_string()), false), CatalogError::Database{ retryable: false, .. }));
        assert!(matches!(CatalogError::database_or_unavailable("test", None, false), CatalogError::Database{ retryable: false, .. }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert!(!CatalogError::database("test", None, false).retryable());
        assert!(CatalogError::database("test", None, true).retryable());
        assert!(!CatalogError::duplicate_key("test").retryable());
        assert!(!CatalogError::not_found("test").retryable());
        assert!(!CatalogError::validation_rejected("test").retryable());
        assert!(!CatalogError::unavailable("test", None, false).retryable());
        assert!(CatalogError::unavailable("test", None, true).retryable());
        assert!(!CatalogError::notification_failed("test").retryable());
        assert!(!CatalogError::serialization("test").retryable());
        assert!(!CatalogError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_format_error_message() {
        assert_eq!("book exists", CatalogError::duplicate_key("book exists").to_string());
        assert_eq!("bad isbn", CatalogError::validation_rejected("bad isbn").to_string());
    }
}
