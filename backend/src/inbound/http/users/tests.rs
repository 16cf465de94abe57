//! Tests for the user lookup handler.

use super::*;
use crate::domain::ports::{MockUserLookup, UserLookup, UserLookupError};
use crate::domain::{RecordHolder, TRACE_ID_HEADER};
use crate::middleware::Trace;
use crate::outbound::memory::InMemoryUserLookup;
use actix_web::{App, http::StatusCode, test as actix_test};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;

#[fixture]
fn seeded() -> Arc<dyn UserLookup> {
    let lookup: InMemoryUserLookup = [
        User::new(UserId::new(1), "Alice"),
        User::new(UserId::new(2), "Bob"),
    ]
    .into_iter()
    .collect();
    Arc::new(lookup)
}

async fn call(
    users: Arc<dyn UserLookup>,
    uri: &str,
) -> (StatusCode, Option<String>, Value) {
    let state = HttpState::new(RecordHolder::new(1, "Alice"), users);
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(get_user),
    )
    .await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let body = actix_test::read_body(response).await;
    (status, header, serde_json::from_slice(&body).expect("json body"))
}

#[rstest]
#[case("/users/1", json!({ "id": 1, "name": "Alice" }))]
#[case("/users/2", json!({ "id": 2, "name": "Bob" }))]
#[case("/users/+1", json!({ "id": 1, "name": "Alice" }))]
#[actix_web::test]
async fn returns_seeded_users(
    seeded: Arc<dyn UserLookup>,
    #[case] uri: &str,
    #[case] expected: Value,
) {
    let (status, _, body) = call(seeded, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[rstest]
#[actix_web::test]
async fn miss_is_not_found_with_trace_id(seeded: Arc<dyn UserLookup>) {
    let (status, header, body) = call(seeded, "/users/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("user 404 not found")
    );
    let header = header.expect("trace id header");
    assert_eq!(
        body.get("traceId").and_then(Value::as_str),
        Some(header.as_str())
    );
}

#[rstest]
#[case("abc")]
#[case("1.5")]
#[case("99999999999999999999")]
#[actix_web::test]
async fn non_integer_id_is_invalid_request(seeded: Arc<dyn UserLookup>, #[case] raw: &str) {
    let (status, _, body) = call(seeded, &format!("/users/{raw}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert_eq!(body.pointer("/details/field"), Some(&json!("id")));
    assert_eq!(body.pointer("/details/value"), Some(&json!(raw)));
}

#[rstest]
#[actix_web::test]
async fn negative_ids_reach_the_port() {
    let mut lookup = MockUserLookup::new();
    lookup
        .expect_get_user_by_id()
        .withf(|id| id.get() == -7)
        .times(1)
        .returning(|id| Ok(User::new(id, "Negative")));
    let (status, _, body) = call(Arc::new(lookup), "/users/-7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": -7, "name": "Negative" }));
}

#[rstest]
#[actix_web::test]
async fn unavailable_adapter_is_service_unavailable() {
    let mut lookup = MockUserLookup::new();
    lookup
        .expect_get_user_by_id()
        .times(1)
        .returning(|_| Err(UserLookupError::unavailable("connection reset")));
    let (status, _, body) = call(Arc::new(lookup), "/users/1").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("service_unavailable")
    );
}

#[rstest]
#[case("7", 7)]
#[case("-1", -1)]
#[case("0", 0)]
#[case("+1", 1)]
fn parses_integer_segments(#[case] raw: &str, #[case] expected: i64) {
    assert_eq!(parse_user_id(raw).expect("integer id").get(), expected);
}
