//! Driven port for fetching a single user by identifier.
//!
//! Callers depend on this trait rather than on any particular store. A miss
//! is a distinguished [`UserLookupError::NotFound`] outcome, never a
//! placeholder user.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures surfaced by user lookup adapters.
    pub enum UserLookupError {
        /// No user exists for the identifier.
        NotFound { id: i64 } => "user {id} not found",
        /// The backing store could not be read.
        Unavailable { message: String } => "user lookup unavailable: {message}",
    }
}

/// Port for retrieving a user by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Return the user stored under `id`.
    ///
    /// Adapters must return [`UserLookupError::NotFound`] when no record
    /// exists, and the returned user's id must equal `id`.
    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserLookupError>;
}

/// Lookup with no backing records; every id is a miss.
///
/// Used when the service starts without a users file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserLookup;

#[async_trait]
impl UserLookup for FixtureUserLookup {
    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserLookupError> {
        Err(UserLookupError::not_found(id.get()))
    }
}
