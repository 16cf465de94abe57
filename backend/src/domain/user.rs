//! User entity returned by the lookup port.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Integer identifier used to look a user up.
///
/// Any `i64` is a valid identifier; whether a record exists for it is the
/// lookup adapter's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A user known to the lookup port.
///
/// ## Invariants
/// - A user returned by [`UserLookup::get_user_by_id`] carries the id that was
///   looked up.
///
/// [`UserLookup::get_user_by_id`]: crate::domain::ports::UserLookup::get_user_by_id
///
/// # Examples
/// ```
/// use backend::domain::{User, UserId};
///
/// let user = User::new(UserId::new(7), "Grace");
/// assert_eq!(user.id().get(), 7);
/// assert_eq!(user.name(), "Grace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    #[schema(value_type = i64, example = 1)]
    id: UserId,
    #[schema(example = "Alice")]
    name: String,
}

impl User {
    /// Build a user from its identifier and name.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Identifier of this user.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name of this user.
    pub fn name(&self) -> &str {
        &self.name
    }
}
