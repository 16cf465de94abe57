//! Record accessors.
//!
//! ```text
//! GET /id    -> 1
//! GET /name  -> "Alice"
//! ```
//!
//! Both handlers read immutable state and cannot fail.

use actix_web::{get, web};

use crate::inbound::http::state::HttpState;

/// Return the stored identifier.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::record::get_id;
///
/// let app = App::new().service(get_id);
/// ```
#[utoipa::path(
    get,
    path = "/id",
    responses((status = 200, description = "Stored identifier", body = i64, example = json!(1))),
    tags = ["record"],
    operation_id = "getId"
)]
#[get("/id")]
pub async fn get_id(state: web::Data<HttpState>) -> web::Json<i64> {
    web::Json(state.record.id())
}

/// Return the stored name.
#[utoipa::path(
    get,
    path = "/name",
    responses((status = 200, description = "Stored name", body = String, example = json!("Alice"))),
    tags = ["record"],
    operation_id = "getName"
)]
#[get("/name")]
pub async fn get_name(state: web::Data<HttpState>) -> web::Json<String> {
    web::Json(state.record.name().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordHolder;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn fetch(record: RecordHolder, uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::without_users(record)))
                .service(get_id)
                .service(get_name),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[rstest]
    #[case(RecordHolder::new(1, "Alice"), "/id", json!(1))]
    #[case(RecordHolder::new(1, "Alice"), "/name", json!("Alice"))]
    #[case(RecordHolder::new(0, ""), "/id", json!(0))]
    #[case(RecordHolder::new(0, ""), "/name", json!(""))]
    #[case(RecordHolder::new(-3, "Ünïcode"), "/name", json!("Ünïcode"))]
    #[actix_web::test]
    async fn serves_stored_values(
        #[case] record: RecordHolder,
        #[case] uri: &str,
        #[case] expected: Value,
    ) {
        let (status, body) = fetch(record, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn post_is_not_routed() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::without_users(RecordHolder::new(
                    1, "Alice",
                ))))
                .service(get_id),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::post().uri("/id").to_request())
                .await;
        assert!(response.status().is_client_error());
    }
}
