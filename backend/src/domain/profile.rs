//! Seven-field profile request accepted by [`RecordHolder::accept_profile`].
//!
//! [`RecordHolder::accept_profile`]: crate::domain::RecordHolder::accept_profile

use std::fmt;

use zeroize::Zeroizing;

/// Profile fields bundled into a single request value.
///
/// The password buffer is wiped when the value is dropped and never appears
/// in `Debug` output.
#[derive(Clone)]
pub struct ProfileFields {
    /// Profile identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Postal address.
    pub address: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Plain-text password.
    pub password: Zeroizing<String>,
}

impl fmt::Debug for ProfileFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileFields")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("age", &self.age)
            .field("address", &self.address)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
