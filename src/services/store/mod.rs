//! Persistence boundary. The engine never talks to storage directly; it
//! reads snapshots and issues at most two kinds of writes through this
//! trait, and failures here must never abort an in-progress render.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::rental::Rental;
use crate::models::session::Session;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session {0} not found")]
    SessionNotFound(i64),
    #[error("store rejected write: {0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// External data store for sessions and rentals.
#[cfg_attr(test, automock)]
pub trait SessionStore {
    /// Sessions whose date falls in `[start, end]`.
    fn sessions_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Session>, StoreError>;

    /// Rentals whose inclusive date range intersects `[start, end]`.
    fn rentals_in_range(&self, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<Rental>, StoreError>;

    /// The single reschedule mutation: update one session's time-of-day.
    fn update_session_time(&mut self, session_id: i64, time: NaiveTime)
        -> Result<(), StoreError>;

    /// Bulk insert for materialized recurring sessions. Returns the count
    /// inserted.
    fn insert_sessions(&mut self, sessions: Vec<Session>) -> Result<usize, StoreError>;
}

/// In-memory store used by tests and the debug harness.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Vec<Session>,
    rentals: Vec<Rental>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
            rentals: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add_rental(&mut self, mut rental: Rental) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        rental.id = Some(id);
        self.rentals.push(rental);
        id
    }

    pub fn add_session(&mut self, mut session: Session) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        session.id = Some(id);
        self.sessions.push(session);
        id
    }

    pub fn session(&self, id: i64) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == Some(id))
    }
}

impl SessionStore for MemoryStore {
    fn sessions_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Session>, StoreError> {
        Ok(self
            .sessions
            .iter()
            .filter(|s| s.date >= start && s.date <= end)
            .cloned()
            .collect())
    }

    fn rentals_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Rental>, StoreError> {
        Ok(self
            .rentals
            .iter()
            .filter(|r| r.end_date >= start && r.start_date <= end)
            .cloned()
            .collect())
    }

    fn update_session_time(
        &mut self,
        session_id: i64,
        time: NaiveTime,
    ) -> Result<(), StoreError> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == Some(session_id))
            .ok_or(StoreError::SessionNotFound(session_id))?;
        session.time = time;
        Ok(())
    }

    fn insert_sessions(&mut self, sessions: Vec<Session>) -> Result<usize, StoreError> {
        let count = sessions.len();
        for session in sessions {
            self.add_session(session);
        }
        Ok(count)
    }
}

/// Materialize expanded recurrence sessions through the store's bulk
/// insert, logging and propagating failure to the caller for notification.
pub fn materialize_sessions(
    store: &mut dyn SessionStore,
    sessions: Vec<Session>,
) -> Result<usize, StoreError> {
    let result = store.insert_sessions(sessions);
    if let Err(ref err) = result {
        log::warn!("bulk insert of recurring sessions failed: {err}");
    }
    result
}
