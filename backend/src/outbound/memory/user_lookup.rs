//! `UserLookup` backed by an immutable in-process map.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserLookup, UserLookupError};
use crate::domain::{User, UserId};

/// Lookup over a fixed set of users.
///
/// The map is built once and never mutated, so concurrent reads need no
/// locking. When the source holds two users with the same id, the later one
/// wins.
///
/// # Examples
/// ```
/// use backend::domain::ports::UserLookup;
/// use backend::domain::{User, UserId};
/// use backend::outbound::memory::InMemoryUserLookup;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let lookup: InMemoryUserLookup = [User::new(UserId::new(1), "Alice")].into_iter().collect();
/// let user = lookup.get_user_by_id(UserId::new(1)).await.expect("seeded user");
/// assert_eq!(user.name(), "Alice");
/// # });
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserLookup {
    users: HashMap<UserId, User>,
}

impl InMemoryUserLookup {
    /// Number of distinct users held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no users are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<User> for InMemoryUserLookup {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let users = iter.into_iter().map(|user| (user.id(), user)).collect();
        Self { users }
    }
}

#[async_trait]
impl UserLookup for InMemoryUserLookup {
    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserLookupError> {
        match self.users.get(&id) {
            Some(user) => Ok(user.clone()),
            None => {
                debug!(user_id = %id, "user lookup miss");
                Err(UserLookupError::not_found(id.get()))
            }
        }
    }
}
