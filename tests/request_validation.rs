//! Handler-level tests driven through the real router. These cover every
//! path that short-circuits before reaching the database, so they need no
//! running PostgreSQL: the pool is created lazily and never connects.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use contact_api::{app, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    // connect_lazy performs no I/O; port 1 guarantees a refused connection
    // for the one test that does touch the pool.
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://127.0.0.1:1/unreachable")
        .unwrap();
    app(AppState { pool })
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_answers_without_database() {
    let resp = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn ready_reports_degraded_when_database_is_down() {
    let resp = test_app()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
}

#[tokio::test]
async fn create_person_with_empty_name_is_rejected_before_storage() {
    let resp = test_app()
        .oneshot(json_request("POST", "/person", r#"{"name":""}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["errors"]["name"][0], "name is required");
}

#[tokio::test]
async fn create_person_with_missing_name_is_rejected() {
    let resp = test_app()
        .oneshot(json_request("POST", "/person", "{}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["errors"]["name"][0], "name is required");
}

#[tokio::test]
async fn create_person_with_overlong_name_is_rejected() {
    let long = "a".repeat(201);
    let body = format!(r#"{{"name":"{}"}}"#, long);
    let resp = test_app()
        .oneshot(json_request("POST", "/person", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["errors"]["name"][0],
        "name must be at most 200 characters"
    );
}

#[tokio::test]
async fn update_contact_requires_value_and_type() {
    let resp = test_app()
        .oneshot(json_request(
            "PUT",
            "/contact/1f0e76a2-54b7-4c07-b91b-5c2e9d4f3a10",
            "{}",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["errors"]["value"][0], "value is required");
    assert_eq!(body["errors"]["type"][0], "type is required");
}

#[tokio::test]
async fn create_contact_is_validated_before_the_person_lookup() {
    let resp = test_app()
        .oneshot(json_request(
            "POST",
            "/person/1f0e76a2-54b7-4c07-b91b-5c2e9d4f3a10/contact",
            r#"{"type":"Email"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["errors"]["value"][0], "value is required");
}

#[tokio::test]
async fn unknown_contact_type_variant_is_rejected() {
    let resp = test_app()
        .oneshot(json_request(
            "PUT",
            "/contact/1f0e76a2-54b7-4c07-b91b-5c2e9d4f3a10",
            r#"{"type":"Carrier-Pigeon","value":"coop 7"}"#,
        ))
        .await
        .unwrap();
    // serde rejects the variant at deserialization time
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_uuid_path_id_is_rejected() {
    let resp = test_app()
        .oneshot(Request::get("/person/not-a-uuid").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
