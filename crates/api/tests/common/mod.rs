#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use schoolpay_api::config::ServerConfig;
use schoolpay_api::router::build_app_router;
use schoolpay_api::state::AppState;
use schoolpay_payroll::config::PayrollConfig;
use sqlx::PgPool;
use tower::ServiceExt;

/// A `ServerConfig` for tests: dev CORS origin, 30-second timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// The production router and middleware stack over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        payroll: Arc::new(PayrollConfig::default()),
    };
    build_app_router(state, &config)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Insert an active teacher directly into the LMS `users` table.
pub async fn insert_teacher(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (full_name, role) VALUES ($1, 'teacher') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a group led by `teacher_id` and one student payment into it.
pub async fn insert_collected(pool: &PgPool, teacher_id: i64, amount: i64, month: &str) {
    let student_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (full_name, role) VALUES ('Student', 'student') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    let group_id: i64 =
        sqlx::query_scalar("INSERT INTO groups (name, teacher_id) VALUES ('Group', $1) RETURNING id")
            .bind(teacher_id)
            .fetch_one(pool)
            .await
            .unwrap();
    sqlx::query(
        "INSERT INTO student_payments (student_id, group_id, amount, month) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(student_id)
    .bind(group_id)
    .bind(rust_decimal::Decimal::from(amount))
    .bind(month)
    .execute(pool)
    .await
    .unwrap();
}
