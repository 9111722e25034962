//! Live session aggregate entity.
//!
//! A live session turns a static event record into a running, deadline-bound
//! gathering. One session exists per event at a time; closed sessions are
//! kept as history and a later start overwrites the row with a fresh
//! instance.
//!
//! # Ownership
//!
//! The engine exclusively owns the `is_active` transition. The store is a
//! passive persistence surface with no transition logic of its own.

use crate::domain::foundation::{DomainError, ErrorCode, EventId, Timestamp};
use serde::{Deserialize, Serialize};

/// A running (or historical) timed session for one event.
///
/// # Invariants
///
/// - At most one session per `event_id` has `is_active = true`
/// - `end_time` is always after `start_time`
/// - `end_time` only ever moves forward (extension-only policy)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSession {
    /// Event this session runs for; also the session's identity.
    event_id: EventId,

    /// When the session started.
    start_time: Timestamp,

    /// Current planned deadline.
    end_time: Timestamp,

    /// Whether the session is still running.
    is_active: bool,
}

impl LiveSession {
    /// Starts a new active session running for `duration_minutes` from `now`.
    ///
    /// # Errors
    ///
    /// - `InvalidDuration` if `duration_minutes` is not positive
    pub fn begin(
        event_id: EventId,
        now: Timestamp,
        duration_minutes: i64,
    ) -> Result<Self, DomainError> {
        if duration_minutes <= 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidDuration,
                format!("Session duration must be positive, got {}", duration_minutes),
            ));
        }

        Ok(Self {
            event_id,
            start_time: now,
            end_time: now.plus_minutes(duration_minutes),
            is_active: true,
        })
    }

    /// Reconstitutes a session from persistence (no validation).
    pub fn reconstitute(
        event_id: EventId,
        start_time: Timestamp,
        end_time: Timestamp,
        is_active: bool,
    ) -> Self {
        Self {
            event_id,
            start_time,
            end_time,
            is_active,
        }
    }

    /// Returns the event id.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns when the session started.
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Returns the current planned deadline.
    pub fn end_time(&self) -> Timestamp {
        self.end_time
    }

    /// Returns whether the session is still running.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns whole minutes until the deadline, clamped to zero.
    pub fn remaining_minutes(&self, now: Timestamp) -> i64 {
        now.minutes_until(&self.end_time).max(0)
    }

    /// Checks whether a participant can still join at `now`.
    ///
    /// A session past its nominal end but not yet reaped by the scheduler
    /// is treated as not joinable; reconciliation is expected to deactivate
    /// it shortly.
    pub fn is_joinable(&self, now: Timestamp) -> bool {
        self.is_active && self.remaining_minutes(now) > 0
    }

    /// Pushes the deadline forward by `additional_minutes`.
    ///
    /// Extension-only: shortening a running session is rejected.
    ///
    /// # Errors
    ///
    /// - `SessionNotActive` if the session has ended
    /// - `InvalidDuration` if `additional_minutes` is not positive
    pub fn extend(&mut self, additional_minutes: i64) -> Result<Timestamp, DomainError> {
        if !self.is_active {
            return Err(DomainError::new(
                ErrorCode::SessionNotActive,
                format!("Session for event {} has ended", self.event_id),
            ));
        }
        if additional_minutes <= 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidDuration,
                format!("Extension must be positive, got {}", additional_minutes),
            ));
        }

        self.end_time = self.end_time.plus_minutes(additional_minutes);
        Ok(self.end_time)
    }

    /// Marks the session ended. Idempotent.
    pub fn close(&mut self) {
        self.is_active = false;
    }
}
