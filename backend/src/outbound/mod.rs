//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process user lookup seeded from a JSON users file.
//!
//! Adapters translate between domain types and their backing store and hold
//! no business logic.

pub mod memory;
