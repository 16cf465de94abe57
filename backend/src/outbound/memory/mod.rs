//! In-memory adapters and the users file that seeds them.

mod user_lookup;
mod users_file;

pub use user_lookup::InMemoryUserLookup;
pub use users_file::{UsersFileError, load_users_file};
