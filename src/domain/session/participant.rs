//! Participant entity - one user's presence in a live session.

use crate::domain::foundation::{DomainError, ErrorCode, EventId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A user's membership in one live session.
///
/// # Invariants
///
/// - At most one row per `(event_id, user_id)` has `left_at = None`
/// - `planned_minutes` never exceeds the session time remaining at join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    event_id: EventId,
    user_id: UserId,
    username: String,

    /// When the user joined.
    join_time: Timestamp,

    /// Minutes the user intends to stay, clamped at join time.
    planned_minutes: i64,

    /// When the user left; `None` means currently in the session.
    left_at: Option<Timestamp>,
}

impl Participant {
    /// Joins a session at `now`.
    ///
    /// The effective planned duration is the requested duration clamped to
    /// `remaining_minutes`, or all of the remaining time when no request is
    /// made.
    ///
    /// # Errors
    ///
    /// - `InvalidDuration` if an explicit request is not positive
    pub fn join(
        event_id: EventId,
        user_id: UserId,
        username: impl Into<String>,
        now: Timestamp,
        requested_minutes: Option<i64>,
        remaining_minutes: i64,
    ) -> Result<Self, DomainError> {
        let planned_minutes = match requested_minutes {
            Some(requested) if requested <= 0 => {
                return Err(DomainError::new(
                    ErrorCode::InvalidDuration,
                    format!("Join duration must be positive, got {}", requested),
                ));
            }
            Some(requested) => requested.min(remaining_minutes),
            None => remaining_minutes,
        };

        Ok(Self {
            event_id,
            user_id,
            username: username.into(),
            join_time: now,
            planned_minutes,
            left_at: None,
        })
    }

    /// Reconstitutes a participant from persistence (no validation).
    pub fn reconstitute(
        event_id: EventId,
        user_id: UserId,
        username: String,
        join_time: Timestamp,
        planned_minutes: i64,
        left_at: Option<Timestamp>,
    ) -> Self {
        Self {
            event_id,
            user_id,
            username,
            join_time,
            planned_minutes,
            left_at,
        }
    }

    /// Returns the event id.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns the participant's user id.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the participant's display name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns when the user joined.
    pub fn join_time(&self) -> Timestamp {
        self.join_time
    }

    /// Returns the planned stay in minutes.
    pub fn planned_minutes(&self) -> i64 {
        self.planned_minutes
    }

    /// Returns when the user left, if they have.
    pub fn left_at(&self) -> Option<Timestamp> {
        self.left_at
    }

    /// Checks whether the user is still in the session.
    pub fn is_in_session(&self) -> bool {
        self.left_at.is_none()
    }

    /// Records the user leaving at `now` and returns the realized stay in
    /// whole minutes.
    ///
    /// # Errors
    ///
    /// - `NotParticipating` if the user already left
    pub fn leave(&mut self, now: Timestamp) -> Result<i64, DomainError> {
        if self.left_at.is_some() {
            return Err(DomainError::new(
                ErrorCode::NotParticipating,
                format!("User {} has already left event {}", self.user_id, self.event_id),
            ));
        }

        self.left_at = Some(now);
        Ok(self.join_time.minutes_until(&now).max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn ts(secs: i64) -> Timestamp {
        Timestamp::from_datetime(chrono::Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[test]
    fn join_without_request_takes_all_remaining_time() {
        let p = Participant::join(EventId::new(1), alice(), "Alice", ts(0), None, 60).unwrap();
        assert_eq!(p.planned_minutes(), 60);
        assert!(p.is_in_session());
    }

    #[test]
    fn join_clamps_request_to_remaining_time() {
        let p = Participant::join(EventId::new(1), alice(), "Alice", ts(0), Some(90), 60).unwrap();
        assert_eq!(p.planned_minutes(), 60);
    }

    #[test]
    fn join_honors_request_below_remaining_time() {
        let p = Participant::join(EventId::new(1), alice(), "Alice", ts(0), Some(20), 60).unwrap();
        assert_eq!(p.planned_minutes(), 20);
    }

    #[test]
    fn join_rejects_non_positive_request() {
        let result = Participant::join(EventId::new(1), alice(), "Alice", ts(0), Some(0), 60);
        assert!(result.is_err());
    }

    #[test]
    fn leave_reports_realized_minutes() {
        let mut p = Participant::join(EventId::new(1), alice(), "Alice", ts(0), None, 60).unwrap();
        let realized = p.leave(ts(600)).unwrap();
        assert_eq!(realized, 10);
        assert_eq!(p.left_at(), Some(ts(600)));
        assert!(!p.is_in_session());
    }

    #[test]
    fn leave_twice_fails() {
        let mut p = Participant::join(EventId::new(1), alice(), "Alice", ts(0), None, 60).unwrap();
        p.leave(ts(600)).unwrap();
        let err = p.leave(ts(700)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotParticipating);
    }

    proptest! {
        // The effective duration never exceeds the session time remaining
        // at the moment of joining.
        #[test]
        fn planned_minutes_never_exceeds_remaining(
            requested in proptest::option::of(1i64..=10_000),
            remaining in 0i64..=10_000,
        ) {
            let p = Participant::join(
                EventId::new(1),
                alice(),
                "Alice",
                ts(0),
                requested,
                remaining,
            ).unwrap();
            prop_assert!(p.planned_minutes() <= remaining);
            if let Some(req) = requested {
                prop_assert!(p.planned_minutes() <= req);
            }
        }
    }
}
