//! Domain ports: traits the domain depends on, implemented by adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_lookup;

#[cfg(test)]
pub use user_lookup::MockUserLookup;
pub use user_lookup::{FixtureUserLookup, UserLookup, UserLookupError};
