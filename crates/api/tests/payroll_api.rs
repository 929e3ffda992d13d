//! HTTP-level tests for the `/api/v1/payroll` endpoints.
//!
//! Requests go straight to the router through `tower::ServiceExt`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, insert_collected, insert_teacher, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn money(v: &serde_json::Value) -> f64 {
    v.as_f64().expect("money should be a JSON number")
}

// ---------------------------------------------------------------------------
// Compensation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn compensation_defaults_then_saved(pool: PgPool) {
    let teacher = insert_teacher(&pool, "Alice").await;
    let uri = format!("/api/v1/payroll/teachers/{teacher}/compensation");

    let response = get(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Compensation settings retrieved");
    assert_eq!(json["data"]["is_default"], true);
    assert_eq!(money(&json["data"]["base_percentage"]), 50.0);

    let response = put_json(
        build_test_app(pool.clone()),
        &uri,
        json!({ "base_percentage": 45, "bonus_percentage": 5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Compensation settings saved");
    assert_eq!(money(&json["data"]["base_percentage"]), 45.0);

    let json = body_json(get(build_test_app(pool), &uri).await).await;
    assert_eq!(json["data"]["is_default"], false);
    assert_eq!(money(&json["data"]["bonus_percentage"]), 5.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn compensation_without_base_is_validation_error(pool: PgPool) {
    let teacher = insert_teacher(&pool, "Alice").await;
    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/payroll/teachers/{teacher}/compensation"),
        json!({ "bonus_percentage": 5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "base_percentage is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_teacher_is_404(pool: PgPool) {
    let response = get(
        build_test_app(pool),
        "/api/v1/payroll/teachers/987654/compensation",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_teacher_id_is_bad_request(pool: PgPool) {
    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/payroll/teachers/abc/compensation",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());

    let response = put_json(
        build_test_app(pool),
        "/api/v1/payroll/teachers/abc/compensation",
        json!({ "base_percentage": 45 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Advances
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn give_and_list_advances(pool: PgPool) {
    let teacher = insert_teacher(&pool, "Alice").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/payroll/advances",
        json!({ "teacher_id": teacher, "amount": 25000, "month": "2024-05", "description": "rent" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["month"], "2024-05");
    assert_eq!(money(&json["data"]["amount"]), 25000.0);

    let json = body_json(
        get(
            build_test_app(pool),
            &format!("/api/v1/payroll/teachers/{teacher}/advances?month=2024-05"),
        )
        .await,
    )
    .await;
    assert_eq!(json["message"], "Advances retrieved");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_with_unknown_issuer_is_404(pool: PgPool) {
    let teacher = insert_teacher(&pool, "Alice").await;
    let response = post_json(
        build_test_app(pool),
        "/api/v1/payroll/advances",
        json!({ "teacher_id": teacher, "amount": 100, "month": "2024-05", "issued_by": 987654 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "User with id 987654 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_with_fraction_of_a_cent_is_validation_error(pool: PgPool) {
    let teacher = insert_teacher(&pool, "Alice").await;
    let response = post_json(
        build_test_app(pool),
        "/api/v1/payroll/advances",
        json!({ "teacher_id": teacher, "amount": 0.001, "month": "2024-05" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_with_missing_fields_is_validation_error(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/payroll/advances",
        json!({ "amount": 100 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "teacher_id is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_without_month_is_validation_error(pool: PgPool) {
    let teacher = insert_teacher(&pool, "Alice").await;
    let response = get(
        build_test_app(pool),
        &format!("/api/v1/payroll/teachers/{teacher}/advances"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_is_bad_request(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/payroll/advances",
        json!({ "teacher_id": "not-a-number" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Settlements and payments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn calculate_pay_and_report(pool: PgPool) {
    let teacher = insert_teacher(&pool, "Alice").await;
    insert_collected(&pool, teacher, 1_000_000, "2024-05").await;

    // Paying before calculating is refused.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/payroll/settlements/payments",
        json!({ "teacher_id": teacher, "month": "2024-05", "amount": 1000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    assert_eq!(body_json(response).await["code"], "PRECONDITION_FAILED");

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/payroll/settlements/calculate",
        json!({ "teacher_id": teacher, "month": "2024-05" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Settlement calculated");
    assert_eq!(money(&json["data"]["final_salary"]), 500_000.0);
    assert_eq!(json["data"]["is_paid"], false);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/payroll/settlements/payments",
        json!({ "teacher_id": teacher, "month": "2024-05", "amount": 500000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_fully_paid"], true);
    assert_eq!(money(&json["data"]["remaining"]), 0.0);

    let json = body_json(
        get(
            build_test_app(pool.clone()),
            &format!("/api/v1/payroll/teachers/{teacher}/report?month=2024-05"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["teacher"]["full_name"], "Alice");
    assert_eq!(json["data"]["settlement"]["is_paid"], true);
    assert_eq!(json["data"]["payments"].as_array().unwrap().len(), 1);
    assert_eq!(money(&json["data"]["total_paid"]), 500_000.0);

    let json = body_json(
        get(
            build_test_app(pool),
            &format!("/api/v1/payroll/teachers/{teacher}/settlements"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"][0]["month"], "2024-05");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn calculate_all_and_monthly_report(pool: PgPool) {
    for name in ["Alice", "Bob"] {
        let teacher = insert_teacher(&pool, name).await;
        insert_collected(&pool, teacher, 200_000, "2024-05").await;
    }

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/payroll/settlements/calculate-all",
        json!({ "month": "2024-05" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["success_count"], 2);
    assert_eq!(json["data"]["error_count"], 0);
    assert_eq!(json["data"]["results"][0]["status"], "success");

    let json = body_json(
        get(
            build_test_app(pool.clone()),
            "/api/v1/payroll/reports/monthly?month=2024-05",
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["summary"]["teachers_count"], 2);
    assert_eq!(money(&json["data"]["summary"]["total_final_salary"]), 200_000.0);
    assert_eq!(json["data"]["previous_month"], "2024-04");

    let json = body_json(get(build_test_app(pool), "/api/v1/payroll/debts?month=2024-06").await).await;
    assert_eq!(json["data"]["has_debts"], false);
    assert_eq!(json["data"]["previous_month"], "2024-05");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn calculate_with_bad_month_is_validation_error(pool: PgPool) {
    let teacher = insert_teacher(&pool, "Alice").await;
    let response = post_json(
        build_test_app(pool),
        "/api/v1/payroll/settlements/calculate",
        json!({ "teacher_id": teacher, "month": "2024-5" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
