//! Interest-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, EventId};

/// Interest registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestError {
    /// No such event in the directory.
    EventNotFound(EventId),
    /// The user is already registered for this event.
    AlreadyRegistered,
    /// The user is not registered for this event.
    NotRegistered,
    /// Store I/O failure.
    Storage(String),
}

impl InterestError {
    pub fn code(&self) -> ErrorCode {
        match self {
            InterestError::EventNotFound(_) => ErrorCode::EventNotFound,
            InterestError::AlreadyRegistered => ErrorCode::AlreadyRegistered,
            InterestError::NotRegistered => ErrorCode::NotRegistered,
            InterestError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            InterestError::EventNotFound(id) => format!("Event not found: {}", id),
            InterestError::AlreadyRegistered => {
                "You are already registered for this event".to_string()
            }
            InterestError::NotRegistered => {
                "You are not registered for this event".to_string()
            }
            InterestError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for InterestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InterestError {}

impl From<DomainError> for InterestError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AlreadyRegistered => InterestError::AlreadyRegistered,
            ErrorCode::NotRegistered => InterestError::NotRegistered,
            _ => InterestError::Storage(err.to_string()),
        }
    }
}
