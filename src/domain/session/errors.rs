//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, EventId};

/// Session lifecycle errors.
///
/// All variants except `Storage` are locally recoverable: the caller
/// surfaces a user-facing message and takes no further action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No such event in the directory.
    EventNotFound(EventId),
    /// Actor is not the event organizer.
    Unauthorized,
    /// A session is already running for this event.
    AlreadyActive,
    /// No active session for this event.
    SessionNotActive,
    /// The user already has an open participant row.
    AlreadyJoined,
    /// The user has no open participant row.
    NotParticipating,
    /// A duration argument was not positive.
    InvalidDuration(String),
    /// Store I/O failure; may warrant a retry.
    Storage(String),
}

impl SessionError {
    pub fn storage(message: impl Into<String>) -> Self {
        SessionError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::EventNotFound(_) => ErrorCode::EventNotFound,
            SessionError::Unauthorized => ErrorCode::Unauthorized,
            SessionError::AlreadyActive => ErrorCode::AlreadyActive,
            SessionError::SessionNotActive => ErrorCode::SessionNotActive,
            SessionError::AlreadyJoined => ErrorCode::AlreadyJoined,
            SessionError::NotParticipating => ErrorCode::NotParticipating,
            SessionError::InvalidDuration(_) => ErrorCode::InvalidDuration,
            SessionError::Storage(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::EventNotFound(id) => format!("Event not found: {}", id),
            SessionError::Unauthorized => {
                "Only the event organizer can do that".to_string()
            }
            SessionError::AlreadyActive => {
                "A session is already running for this event".to_string()
            }
            SessionError::SessionNotActive => {
                "No active session for this event".to_string()
            }
            SessionError::AlreadyJoined => "You are already in this session".to_string(),
            SessionError::NotParticipating => "You are not in this session".to_string(),
            SessionError::InvalidDuration(msg) => msg.clone(),
            SessionError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::EventNotFound => SessionError::SessionNotActive,
            ErrorCode::Unauthorized => SessionError::Unauthorized,
            ErrorCode::AlreadyActive => SessionError::AlreadyActive,
            ErrorCode::SessionNotActive => SessionError::SessionNotActive,
            ErrorCode::AlreadyJoined => SessionError::AlreadyJoined,
            ErrorCode::NotParticipating => SessionError::NotParticipating,
            ErrorCode::InvalidDuration => SessionError::InvalidDuration(err.message),
            _ => SessionError::Storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(SessionError::AlreadyActive.code(), ErrorCode::AlreadyActive);
        assert_eq!(
            SessionError::EventNotFound(EventId::new(7)).code(),
            ErrorCode::EventNotFound
        );
    }

    #[test]
    fn domain_invalid_duration_converts_with_message() {
        let err: SessionError =
            DomainError::new(ErrorCode::InvalidDuration, "must be positive").into();
        assert!(matches!(err, SessionError::InvalidDuration(msg) if msg == "must be positive"));
    }

    #[test]
    fn domain_storage_errors_convert_to_storage() {
        let err: SessionError = DomainError::storage("connection refused").into();
        assert!(matches!(err, SessionError::Storage(_)));
    }
}
