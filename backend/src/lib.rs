//! Record service library.
//!
//! Serves a fixed identifier and name over HTTP and exposes a user lookup
//! port with in-memory and fixture adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
