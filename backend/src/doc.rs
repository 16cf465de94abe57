//! OpenAPI document for the HTTP surface.
//!
//! Served by Swagger UI in debug builds and printed by
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Record service API",
        description = "Fixed record accessors, user lookup, and health probes."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::record::get_id,
        crate::inbound::http::record::get_name,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, Error, ErrorCode)),
    tags(
        (name = "record", description = "Fixed identifier and name"),
        (name = "users", description = "User lookup"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
