//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the record holder
//! and domain ports, so tests can swap adapters without any I/O.

use std::sync::Arc;

use crate::domain::RecordHolder;
use crate::domain::ports::{FixtureUserLookup, UserLookup};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Fixed record served by `/id` and `/name`.
    pub record: Arc<RecordHolder>,
    /// User lookup port behind `/users/{id}`.
    pub users: Arc<dyn UserLookup>,
}

impl HttpState {
    /// Bundle a record holder with a lookup adapter.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::RecordHolder;
    /// use backend::domain::ports::FixtureUserLookup;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(RecordHolder::new(1, "Alice"), Arc::new(FixtureUserLookup));
    /// assert_eq!(state.record.id(), 1);
    /// ```
    pub fn new(record: RecordHolder, users: Arc<dyn UserLookup>) -> Self {
        Self {
            record: Arc::new(record),
            users,
        }
    }

    /// State with no users configured; every lookup misses.
    pub fn without_users(record: RecordHolder) -> Self {
        Self::new(record, Arc::new(FixtureUserLookup))
    }
}
