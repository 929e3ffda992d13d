//! Handlers for teacher payroll.
//!
//! Thin wrappers over `schoolpay_payroll`: parse the path, query or body,
//! call the engine, wrap the result in the response envelope. Path and body
//! rejections are taken as `Result` so they come back in the error envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use schoolpay_core::types::DbId;
use schoolpay_core::validation::{require, require_period};
use schoolpay_db::models::advance::CreateAdvance;
use schoolpay_db::models::compensation::SetCompensationSettings;
use schoolpay_db::models::salary_payment::RecordSalaryPayment;
use schoolpay_db::models::settlement::{BatchPeriodRequest, SettlementPeriodRequest};
use schoolpay_payroll::{advances, batch, payments, rates, reports, settlement};

use crate::error::AppResult;
use crate::query::MonthParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Compensation settings
// ---------------------------------------------------------------------------

/// GET /api/v1/payroll/teachers/{teacher_id}/compensation
///
/// Effective rates; `is_default` is true when nothing was saved.
pub async fn get_compensation(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(teacher_id) = path?;
    let resolved = rates::resolve_rates(&state.pool, teacher_id).await?;
    Ok(Json(DataResponse::with_message(
        "Compensation settings retrieved",
        resolved,
    )))
}

/// PUT /api/v1/payroll/teachers/{teacher_id}/compensation
pub async fn set_compensation(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    body: Result<Json<SetCompensationSettings>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(teacher_id) = path?;
    let Json(input) = body?;
    let row = rates::set_compensation_settings(&state.pool, teacher_id, &input).await?;
    Ok(Json(DataResponse::with_message(
        "Compensation settings saved",
        row,
    )))
}

// ---------------------------------------------------------------------------
// Advances
// ---------------------------------------------------------------------------

/// POST /api/v1/payroll/advances
pub async fn give_advance(
    State(state): State<AppState>,
    body: Result<Json<CreateAdvance>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let advance = advances::give_advance(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message("Advance issued", advance)),
    ))
}

/// GET /api/v1/payroll/teachers/{teacher_id}/advances?month=YYYY-MM
pub async fn list_advances(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let Path(teacher_id) = path?;
    let month = require_period(params.month.as_deref(), "month")?;
    let items = advances::list_advances(&state.pool, teacher_id, month).await?;
    Ok(Json(DataResponse::with_message("Advances retrieved", items)))
}

// ---------------------------------------------------------------------------
// Settlements
// ---------------------------------------------------------------------------

/// POST /api/v1/payroll/settlements/calculate
///
/// Compute (or recompute) one teacher's settlement for a month.
pub async fn calculate_settlement(
    State(state): State<AppState>,
    body: Result<Json<SettlementPeriodRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let teacher_id = require(input.teacher_id, "teacher_id")?;
    let month = require_period(input.month.as_deref(), "month")?;

    let computed = settlement::compute_settlement(&state.pool, teacher_id, month).await?;
    Ok(Json(DataResponse::with_message(
        "Settlement calculated",
        computed,
    )))
}

/// POST /api/v1/payroll/settlements/calculate-all
///
/// Per-teacher failures are reported in the body; the request itself
/// succeeds unless the teacher listing fails.
pub async fn calculate_all_settlements(
    State(state): State<AppState>,
    body: Result<Json<BatchPeriodRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let month = require_period(input.month.as_deref(), "month")?;

    let outcome =
        batch::compute_all_settlements(&state.pool, month, state.payroll.batch_concurrency)
            .await?;
    let message = format!(
        "Calculated {} settlements, {} failed",
        outcome.success_count, outcome.error_count
    );
    Ok(Json(DataResponse::with_message(message, outcome)))
}

/// GET /api/v1/payroll/teachers/{teacher_id}/settlements
pub async fn settlement_history(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(teacher_id) = path?;
    let items = settlement::settlement_history(&state.pool, teacher_id).await?;
    Ok(Json(DataResponse::with_message(
        "Settlement history retrieved",
        items,
    )))
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

/// POST /api/v1/payroll/settlements/payments
///
/// Returns 412 when the settlement has not been calculated yet.
pub async fn record_payment(
    State(state): State<AppState>,
    body: Result<Json<RecordSalaryPayment>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let receipt = payments::record_payment(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message("Salary payment recorded", receipt)),
    ))
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// GET /api/v1/payroll/teachers/{teacher_id}/report?month=YYYY-MM
pub async fn teacher_report(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let Path(teacher_id) = path?;
    let month = require_period(params.month.as_deref(), "month")?;
    let report = reports::teacher_report(&state.pool, teacher_id, month).await?;
    Ok(Json(DataResponse::with_message("Teacher report generated", report)))
}

/// GET /api/v1/payroll/reports/monthly?month=YYYY-MM
pub async fn monthly_report(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let month = require_period(params.month.as_deref(), "month")?;
    let report = reports::all_teachers_report(&state.pool, month).await?;
    Ok(Json(DataResponse::with_message("Monthly report generated", report)))
}

/// GET /api/v1/payroll/debts?month=YYYY-MM
///
/// Negative balances from the month before `month`.
pub async fn check_debts(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> AppResult<impl IntoResponse> {
    let month = require_period(params.month.as_deref(), "month")?;
    let check = reports::check_debts(&state.pool, month).await?;
    Ok(Json(DataResponse::with_message("Debt check completed", check)))
}
