//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod record;
pub mod state;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Register the record, user, and health endpoints on an app or scope.
///
/// Callers supply [`state::HttpState`] and [`health::HealthState`] as app
/// data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::domain::RecordHolder;
/// use backend::inbound::http::{self, health::HealthState, state::HttpState};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::without_users(RecordHolder::new(1, "Alice"))))
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(http::routes);
/// ```
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(record::get_id)
        .service(record::get_name)
        .service(users::get_user)
        .service(health::ready)
        .service(health::live);
}
