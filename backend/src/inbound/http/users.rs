//! User lookup handler.
//!
//! ```text
//! GET /users/1    -> {"id":1,"name":"Alice"}
//! GET /users/404  -> 404 {"code":"not_found","message":"user 404 not found",...}
//! GET /users/abc  -> 400 {"code":"invalid_request",...}
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Error, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Raw path segment; parsed by the handler so binding failures use the
/// JSON error envelope.
#[derive(Debug, Deserialize)]
pub struct UserPath {
    id: String,
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<i64>().map(UserId::new).map_err(|_| {
        Error::invalid_request("user id must be an integer")
            .with_details(json!({ "field": "id", "value": raw }))
    })
}

/// Fetch a user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Identifier is not an integer", body = Error),
        (status = 404, description = "No user with this identifier", body = Error),
        (status = 503, description = "Lookup adapter unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<UserPath>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path.id)?;
    let user = state.users.get_user_by_id(id).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests;
